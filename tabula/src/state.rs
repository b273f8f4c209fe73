use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// A value shared between a host and the components it controls.
///
/// Clones point at the same value. A host keeps one clone and hands another
/// to [`Slot::shared`]; writes from either side are visible to both, and
/// the `changed` flag records that a write happened since the host last
/// looked.
///
/// # Example
///
/// ```
/// use tabula::state::State;
///
/// let page = State::new(1usize);
/// let handle = page.clone();
/// handle.set(3);
/// assert_eq!(page.get(), 3);
/// assert!(page.take_changed());
/// assert!(!page.take_changed());
/// ```
#[derive(Debug)]
pub struct State<T> {
    value: Arc<RwLock<T>>,
    changed: Arc<AtomicBool>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            changed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Read the current value in place.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self
            .value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        self.replace(value);
    }

    /// Replace the value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        let mut guard = self
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.changed.store(true, Ordering::SeqCst);
        std::mem::replace(&mut *guard, value)
    }

    /// Modify the value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
        self.changed.store(true, Ordering::SeqCst);
    }

    /// Whether a write happened since the last call; clears the flag.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            changed: Arc::clone(&self.changed),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Change listener invoked after every write to a [`Slot`].
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;
/// Reads a caller-owned value.
pub type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
/// Writes a caller-owned value.
pub type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

enum Source<T> {
    Owned(T),
    External { get: Getter<T>, set: Setter<T> },
}

/// One piece of component state, either owned here or by the caller.
///
/// The ownership mode is fixed when the slot is built. An owned slot keeps
/// its own copy; an external (controlled) slot reads through the caller's
/// getter and writes through the caller's setter, so a setter that ignores
/// the write leaves the value unchanged. The change listener fires on every
/// write in both modes.
pub struct Slot<T> {
    source: Source<T>,
    on_change: Option<Listener<T>>,
}

impl<T: Clone> Slot<T> {
    /// Uncontrolled slot holding its own value.
    pub fn owned(initial: T) -> Self {
        Self {
            source: Source::Owned(initial),
            on_change: None,
        }
    }

    /// Controlled slot backed by caller-supplied accessors.
    pub fn external<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> T + Send + Sync + 'static,
        S: Fn(T) + Send + Sync + 'static,
    {
        Self {
            source: Source::External {
                get: Arc::new(get),
                set: Arc::new(set),
            },
            on_change: None,
        }
    }

    /// Controlled slot backed by a shared [`State`].
    pub fn shared(state: State<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        let reader = state.clone();
        Self::external(move || reader.get(), move |value| state.set(value))
    }

    /// Attach a change listener.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(listener));
        self
    }

    /// Whether the caller owns this value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, Source::External { .. })
    }

    /// Current value.
    pub fn get(&self) -> T {
        match &self.source {
            Source::Owned(value) => value.clone(),
            Source::External { get, .. } => get(),
        }
    }

    /// Write a value and notify the listener.
    pub fn set(&mut self, value: T) {
        match &mut self.source {
            Source::Owned(current) => *current = value.clone(),
            Source::External { set, .. } => set(value.clone()),
        }
        if let Some(listener) = &self.on_change {
            listener(&value);
        }
    }

    /// Modify the current value and write it back.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }
}

impl<T: Default + Clone> Default for Slot<T> {
    fn default() -> Self {
        Self::owned(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Owned(value) => f.debug_tuple("Slot::Owned").field(value).finish(),
            Source::External { .. } => f.write_str("Slot::External"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_owned_slot_stores() {
        let mut slot = Slot::owned(String::new());
        slot.set("abc".to_string());
        assert_eq!(slot.get(), "abc");
        assert!(!slot.is_controlled());
    }

    #[test]
    fn test_listener_fires_in_both_modes() {
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        let mut owned = Slot::owned(0).on_change(move |v| log.lock().unwrap().push(*v));
        owned.set(1);

        let log = Arc::clone(&seen);
        let mut external = Slot::external(|| 0, |_| {}).on_change(move |v| log.lock().unwrap().push(*v));
        external.set(2);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_external_slot_reads_through_caller() {
        let state = State::new(5);
        let mut slot = Slot::shared(state.clone());
        assert!(slot.is_controlled());
        slot.update(|v| *v += 1);
        assert_eq!(state.get(), 6);

        state.set(10);
        assert_eq!(slot.get(), 10);
    }

    #[test]
    fn test_external_slot_ignoring_setter_keeps_value() {
        let mut slot = Slot::external(|| 7, |_| {});
        slot.set(8);
        assert_eq!(slot.get(), 7);
    }
}
