use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::prefs::Preferences;

/// Error type for preference persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode preferences: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// String-valued key-value store for UI preferences.
///
/// Reads are served from memory; each `set` persists immediately.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Decode the full preference set from a store
pub fn load_preferences(store: &dyn PreferenceStore) -> Preferences {
    Preferences::decode(|key| store.get(key))
}

/// Preferences held in a flat JSON object on disk (prefs.json)
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a
    /// malformed one is logged and treated as empty (it is overwritten on
    /// the next `set`).
    pub fn open(path: &Path) -> Self {
        let values = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!(
                        "event=prefs_load module=prefs status=malformed path={} error={}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        log::debug!(
            "event=prefs_load module=prefs status=ok path={} keys={}",
            path.display(),
            values.len()
        );
        FileStore {
            path: path.to_path_buf(),
            values,
        }
    }

    /// Write all values atomically (temp file in the same directory + rename)
    fn flush(&self) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::WriteError {
            path: self.path.clone(),
            source,
        };
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut content = serde_json::to_string_pretty(&self.values)?;
        content.push('\n');
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.get(key) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        MemoryStore {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prefs::ThemeMode;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_reopen_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::open(&path);
        store.set("theme", "light").unwrap();
        store.set("skillsThreshold", "3").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme"), Some("light"));
        let prefs = load_preferences(&reopened);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.skills_threshold, 3);
    }

    #[test]
    fn values_are_stored_as_strings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = FileStore::open(&path);
        store.set("showProjects", "false").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["showProjects"], serde_json::Value::String("false".into()));
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(&dir.path().join("nope.json"));
        assert_eq!(store.get("theme"), None);
        assert_eq!(load_preferences(&store), Preferences::default());
    }

    #[test]
    fn malformed_file_is_empty_and_recovers_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json {{{").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(FileStore::open(&path).get("theme"), Some("dark"));
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/folio/prefs.json");
        let mut store = FileStore::open(&path);
        store.set("username", "Ada").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::with_values(&[("experienceLevel", "advanced")]);
        store.set("username", "Grace").unwrap();
        let prefs = load_preferences(&store);
        assert_eq!(prefs.username, "Grace");
        assert_eq!(prefs.experience_level.as_str(), "advanced");
    }
}
