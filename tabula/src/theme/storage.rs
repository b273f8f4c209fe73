//! Key-value storage for theme preferences.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use directories::ProjectDirs;
use tokio::sync::Mutex;

use super::ThemeError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabula";
const APPLICATION: &str = "tabula";

/// Backend trait for theme storage.
///
/// Implementations store plain string values by key.
#[async_trait]
pub trait ThemeStorage: Send + Sync {
    /// Get the value for a key.
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Set the value for a key.
    async fn set(&self, key: &str, value: String) -> Result<(), ThemeError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), ThemeError>;
}

/// In-memory storage, for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryThemeStorage {
    values: DashMap<String, String>,
}

impl MemoryThemeStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThemeStorage for MemoryThemeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ThemeError> {
        self.values.remove(key);
        Ok(())
    }
}

/// JSON-file storage with an in-memory cache.
///
/// The whole file is one JSON object of string values. It is read once on
/// open and rewritten on every change.
#[derive(Debug)]
pub struct FileThemeStorage {
    path: PathBuf,
    cache: DashMap<String, String>,
    write_lock: Mutex<()>,
}

impl FileThemeStorage {
    /// Open storage at the given path, creating it on first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref().to_path_buf();
        let cache = DashMap::new();

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) if !contents.trim().is_empty() => {
                let values: HashMap<String, String> = serde_json::from_str(&contents)?;
                for (key, value) in values {
                    cache.insert(key, value);
                }
            }
            Ok(_) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        log::debug!("opened theme storage at {}", path.display());
        Ok(Self {
            path,
            cache,
            write_lock: Mutex::new(()),
        })
    }

    /// Open storage in the platform config directory.
    ///
    /// - Linux: `$XDG_CONFIG_HOME/tabula/theme.json` or `~/.config/tabula/theme.json`
    /// - macOS: `~/Library/Application Support/dev.tabula.tabula/theme.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\tabula\tabula\config\theme.json`
    pub async fn open_default() -> Result<Self, ThemeError> {
        let dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(ThemeError::NoConfigDir)?;
        Self::open(dirs.config_dir().join("theme.json")).await
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self) -> Result<(), ThemeError> {
        let _guard = self.write_lock.lock().await;
        let snapshot: HashMap<String, String> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let contents = serde_json::to_string_pretty(&snapshot)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[async_trait]
impl ThemeStorage for FileThemeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.cache.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThemeError> {
        self.cache.insert(key.to_string(), value);
        self.flush().await
    }

    async fn delete(&self, key: &str) -> Result<(), ThemeError> {
        if self.cache.remove(key).is_some() {
            self.flush().await?;
        }
        Ok(())
    }
}
