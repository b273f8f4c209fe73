//! Theme context with persistence and OS appearance tracking.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::tokens::DesignTokens;
use super::{ThemeError, ThemeMode, ThemePreference, ThemeStorage};

/// Storage key for the persisted preference.
pub const PREFERENCE_KEY: &str = "theme.preference";

#[derive(Debug, Clone, Copy)]
struct ThemeInner {
    preference: ThemePreference,
    system: ThemeMode,
}

impl ThemeInner {
    fn mode(&self) -> ThemeMode {
        self.preference.resolve(self.system)
    }
}

/// Theme context shared by every component under one host.
///
/// Lifecycle: [`load`](Self::load) on startup, forward OS appearance changes
/// with [`set_system_mode`](Self::set_system_mode) or
/// [`listen_system_appearance`](Self::listen_system_appearance), persist
/// user choices with [`set_preference`](Self::set_preference). Clones share
/// the same state.
#[derive(Clone)]
pub struct ThemeProvider {
    storage: Arc<dyn ThemeStorage>,
    inner: Arc<RwLock<ThemeInner>>,
    mode_tx: Arc<watch::Sender<ThemeMode>>,
    // Held from the storage write until the in-memory update
    write_lock: Arc<Mutex<()>>,
}

impl ThemeProvider {
    /// Load the stored preference.
    ///
    /// A missing or unreadable value falls back to `System`.
    pub async fn load(
        storage: impl ThemeStorage + 'static,
        system: ThemeMode,
    ) -> Result<Self, ThemeError> {
        Self::load_shared(Arc::new(storage), system).await
    }

    /// Load from storage shared with other owners.
    pub async fn load_shared(
        storage: Arc<dyn ThemeStorage>,
        system: ThemeMode,
    ) -> Result<Self, ThemeError> {
        let preference = match storage.get(PREFERENCE_KEY).await? {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("ignoring stored theme preference: {}", err);
                ThemePreference::System
            }),
            None => ThemePreference::System,
        };

        let inner = ThemeInner { preference, system };
        debug!("theme loaded: {} -> {:?}", preference, inner.mode());

        let (mode_tx, _) = watch::channel(inner.mode());
        Ok(Self {
            storage,
            inner: Arc::new(RwLock::new(inner)),
            mode_tx: Arc::new(mode_tx),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn snapshot(&self) -> ThemeInner {
        *self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, f: impl FnOnce(&mut ThemeInner)) -> ThemeMode {
        let mode = {
            let mut guard = self
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            f(&mut guard);
            guard.mode()
        };
        self.mode_tx.send_if_modified(|current| {
            if *current == mode {
                false
            } else {
                *current = mode;
                true
            }
        });
        mode
    }

    /// The user's preference.
    pub fn preference(&self) -> ThemePreference {
        self.snapshot().preference
    }

    /// Last known OS appearance.
    pub fn system_mode(&self) -> ThemeMode {
        self.snapshot().system
    }

    /// The resolved appearance.
    pub fn mode(&self) -> ThemeMode {
        self.snapshot().mode()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Design tokens for the resolved appearance.
    pub fn tokens(&self) -> DesignTokens {
        DesignTokens::for_mode(self.mode())
    }

    /// Persist a new preference, then apply it.
    ///
    /// Nothing changes if the write fails. Concurrent calls apply in the
    /// order they reach storage.
    pub async fn set_preference(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let _guard = self.write_lock.lock().await;
        self.storage
            .set(PREFERENCE_KEY, preference.to_string())
            .await?;
        let mode = self.update(|inner| inner.preference = preference);
        debug!("theme preference -> {} ({:?})", preference, mode);
        Ok(())
    }

    /// Switch to the opposite of the resolved appearance.
    pub async fn toggle(&self) -> Result<ThemeMode, ThemeError> {
        let next = self.mode().inverse();
        self.set_preference(next.into()).await?;
        Ok(next)
    }

    /// Record an OS appearance change.
    ///
    /// Subscribers only hear about it when the preference is `System`.
    pub fn set_system_mode(&self, system: ThemeMode) {
        let mode = self.update(|inner| inner.system = system);
        debug!("system appearance -> {:?} (theme {:?})", system, mode);
    }

    /// Receive the resolved appearance whenever it changes.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode_tx.subscribe()
    }

    /// Follow an OS appearance feed until the listener is stopped or dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn listen_system_appearance(
        &self,
        mut appearance: watch::Receiver<ThemeMode>,
    ) -> AppearanceListener {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let provider = self.clone();

        let handle = tokio::spawn(async move {
            let initial = *appearance.borrow_and_update();
            provider.set_system_mode(initial);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    changed = appearance.changed() => {
                        if changed.is_err() {
                            debug!("system appearance feed closed");
                            break;
                        }
                        let system = *appearance.borrow_and_update();
                        provider.set_system_mode(system);
                    }
                }
            }
        });

        AppearanceListener {
            cancel,
            handle: Some(handle),
        }
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.snapshot();
        f.debug_struct("ThemeProvider")
            .field("preference", &inner.preference)
            .field("system", &inner.system)
            .finish_non_exhaustive()
    }
}

/// Handle to a running OS appearance listener.
///
/// Dropping it stops the listener.
#[derive(Debug)]
pub struct AppearanceListener {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl AppearanceListener {
    /// Stop listening and wait for the task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for AppearanceListener {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
