use std::sync::Arc;
use std::time::Duration;

use tabula::theme::{
    DesignTokens, FileThemeStorage, MemoryThemeStorage, PREFERENCE_KEY, ThemeError, ThemeMode,
    ThemePreference, ThemeProvider, ThemeStorage,
};
use async_trait::async_trait;
use tokio::sync::watch;

fn temp_path() -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("tabula-test-{}", uuid::Uuid::new_v4()))
        .join("theme.json")
}

#[test]
fn test_preference_parsing() {
    assert_eq!("Dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
    assert_eq!(" system ".parse::<ThemePreference>().unwrap(), ThemePreference::System);
    assert!(matches!(
        "sepia".parse::<ThemePreference>(),
        Err(ThemeError::InvalidPreference(_))
    ));
}

#[test]
fn test_preference_resolution() {
    assert_eq!(ThemePreference::System.resolve(ThemeMode::Dark), ThemeMode::Dark);
    assert_eq!(ThemePreference::Light.resolve(ThemeMode::Dark), ThemeMode::Light);
}

#[test]
fn test_tokens_differ_by_mode() {
    let light = DesignTokens::for_mode(ThemeMode::Light);
    let dark = DesignTokens::for_mode(ThemeMode::Dark);
    assert_ne!(light.colors.background, dark.colors.background);
    assert_eq!(light.spacing, dark.spacing);
    assert_eq!(dark.color("bg"), Some(dark.colors.background));
    assert!(dark.color("unknown_color").is_none());
}

#[tokio::test]
async fn test_load_defaults_to_system() {
    let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Dark)
        .await
        .unwrap();
    assert_eq!(provider.preference(), ThemePreference::System);
    assert_eq!(provider.mode(), ThemeMode::Dark);
    assert_eq!(provider.tokens().mode, ThemeMode::Dark);
}

#[tokio::test]
async fn test_load_ignores_garbage() {
    let storage = MemoryThemeStorage::new();
    storage.set(PREFERENCE_KEY, "sepia".to_string()).await.unwrap();
    let provider = ThemeProvider::load(storage, ThemeMode::Light).await.unwrap();
    assert_eq!(provider.preference(), ThemePreference::System);
}

#[tokio::test]
async fn test_set_preference_persists_and_publishes() {
    let storage: Arc<dyn ThemeStorage> = Arc::new(MemoryThemeStorage::new());
    let provider = ThemeProvider::load_shared(Arc::clone(&storage), ThemeMode::Light)
        .await
        .unwrap();
    let mut changes = provider.subscribe();

    provider.set_preference(ThemePreference::Dark).await.unwrap();
    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), ThemeMode::Dark);
    assert_eq!(
        storage.get(PREFERENCE_KEY).await.unwrap().as_deref(),
        Some("dark")
    );

    // A second provider over the same storage sees the saved choice
    let other = ThemeProvider::load_shared(storage, ThemeMode::Light).await.unwrap();
    assert_eq!(other.mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_system_changes_only_publish_when_following_system() {
    let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    let mut changes = provider.subscribe();

    provider.set_system_mode(ThemeMode::Dark);
    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), ThemeMode::Dark);

    provider.set_preference(ThemePreference::Light).await.unwrap();
    let _ = changes.borrow_and_update();
    provider.set_system_mode(ThemeMode::Light);
    provider.set_system_mode(ThemeMode::Dark);
    assert!(!changes.has_changed().unwrap());
    assert_eq!(provider.mode(), ThemeMode::Light);
    assert_eq!(provider.system_mode(), ThemeMode::Dark);
}

/// Storage whose dark writes land first but return late.
struct SlowDarkStorage(MemoryThemeStorage);

#[async_trait]
impl ThemeStorage for SlowDarkStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThemeError> {
        let slow = value == "dark";
        self.0.set(key, value).await?;
        if slow {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ThemeError> {
        self.0.delete(key).await
    }
}

#[tokio::test]
async fn test_concurrent_preferences_match_storage() {
    let storage: Arc<dyn ThemeStorage> = Arc::new(SlowDarkStorage(MemoryThemeStorage::new()));
    let provider = ThemeProvider::load_shared(Arc::clone(&storage), ThemeMode::Light)
        .await
        .unwrap();

    let (dark, light) = tokio::join!(
        provider.set_preference(ThemePreference::Dark),
        provider.set_preference(ThemePreference::Light),
    );
    dark.unwrap();
    light.unwrap();

    let reloaded = ThemeProvider::load_shared(storage, ThemeMode::Light).await.unwrap();
    assert_eq!(reloaded.preference(), provider.preference());
    assert_eq!(provider.preference(), ThemePreference::Light);
}

#[tokio::test]
async fn test_toggle() {
    let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    assert_eq!(provider.toggle().await.unwrap(), ThemeMode::Dark);
    assert_eq!(provider.preference(), ThemePreference::Dark);
    assert_eq!(provider.toggle().await.unwrap(), ThemeMode::Light);
}

#[tokio::test]
async fn test_independent_providers() {
    let a = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    let b = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    a.set_preference(ThemePreference::Dark).await.unwrap();
    assert!(a.is_dark());
    assert!(!b.is_dark());
}

#[tokio::test]
async fn test_appearance_listener_follows_feed() {
    let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    let mut changes = provider.subscribe();
    let (os_tx, os_rx) = watch::channel(ThemeMode::Light);

    let listener = provider.listen_system_appearance(os_rx);
    os_tx.send(ThemeMode::Dark).unwrap();

    tokio::time::timeout(Duration::from_secs(2), changes.changed())
        .await
        .expect("no theme change")
        .unwrap();
    assert_eq!(provider.mode(), ThemeMode::Dark);

    listener.stop().await;
    // The feed may already be closed
    let _ = os_tx.send(ThemeMode::Light);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(provider.system_mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_appearance_listener_ends_with_feed() {
    let provider = ThemeProvider::load(MemoryThemeStorage::new(), ThemeMode::Light)
        .await
        .unwrap();
    let (os_tx, os_rx) = watch::channel(ThemeMode::Dark);
    let listener = provider.listen_system_appearance(os_rx);
    drop(os_tx);

    tokio::time::timeout(Duration::from_secs(2), async {
        while !listener.is_finished() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("listener did not finish");
    assert_eq!(provider.system_mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_file_storage_round_trip() {
    let path = temp_path();
    {
        let storage = FileThemeStorage::open(&path).await.unwrap();
        let provider = ThemeProvider::load(storage, ThemeMode::Light).await.unwrap();
        provider.set_preference(ThemePreference::Dark).await.unwrap();
    }

    let storage = FileThemeStorage::open(&path).await.unwrap();
    assert_eq!(
        storage.get(PREFERENCE_KEY).await.unwrap().as_deref(),
        Some("dark")
    );
    storage.delete(PREFERENCE_KEY).await.unwrap();

    let reopened = FileThemeStorage::open(&path).await.unwrap();
    assert_eq!(reopened.get(PREFERENCE_KEY).await.unwrap(), None);

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_file_storage_rejects_corrupt_file() {
    let path = temp_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(
        FileThemeStorage::open(&path).await,
        Err(ThemeError::Serialization(_))
    ));

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}
