//! Flat string preference store backing the server registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Contract the registry persists through: a flat, unordered key/value
/// space scoped to this application.
pub trait PrefStore {
    fn get_all(&self) -> HashMap<String, String>;
    fn get_string(&self, key: &str, default: &str) -> String;
    fn put_string(&mut self, key: &str, value: &str);
    fn clear(&mut self);
    fn commit(&mut self) -> Result<(), PrefsError>;
}

/// Preference store persisted as one flat JSON object on disk.
/// Mutations stage in memory until `commit`.
#[derive(Debug)]
pub struct JsonPrefs {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonPrefs {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that exists but does not parse is an error.
    pub fn open(path: &Path) -> Result<Self, PrefsError> {
        let values = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(PrefsError::ParseFailed)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(PrefsError::ReadFailed(e)),
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefStore for JsonPrefs {
    fn get_all(&self) -> HashMap<String, String> {
        self.values.clone()
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    /// Write the staged values back to disk. Creates the parent directory
    /// if needed.
    fn commit(&mut self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(PrefsError::CreateDir)?;
        }
        let output =
            serde_json::to_string_pretty(&self.values).map_err(PrefsError::SerializeFailed)?;
        std::fs::write(&self.path, output)
            .map_err(|e| PrefsError::WriteFailed(e, self.path.clone()))?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum PrefsError {
    ReadFailed(std::io::Error),
    ParseFailed(serde_json::Error),
    SerializeFailed(serde_json::Error),
    CreateDir(std::io::Error),
    WriteFailed(std::io::Error, PathBuf),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::ReadFailed(e) => write!(f, "Failed to read servers file: {}", e),
            PrefsError::ParseFailed(e) => write!(f, "Failed to parse servers file: {}", e),
            PrefsError::SerializeFailed(e) => write!(f, "Failed to serialize servers: {}", e),
            PrefsError::CreateDir(e) => write!(f, "Failed to create directory: {}", e),
            PrefsError::WriteFailed(e, path) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for PrefsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = JsonPrefs::open(&dir.path().join("servers.json")).unwrap();
        assert!(prefs.get_all().is_empty());
    }

    #[test]
    fn commit_roundtrips_values() {
        let dir = TempDir::new().unwrap();
        // Nested path exercises parent directory creation on commit.
        let path = dir.path().join("glances/servers.json");

        let mut prefs = JsonPrefs::open(&path).unwrap();
        prefs.put_string("web", "http://web:61209");
        prefs.put_string("db", "http://db:5432");
        prefs.commit().unwrap();

        let reopened = JsonPrefs::open(&path).unwrap();
        assert_eq!(reopened.get_string("web", ""), "http://web:61209");
        assert_eq!(reopened.get_string("db", ""), "http://db:5432");
        assert_eq!(reopened.get_all().len(), 2);
    }

    #[test]
    fn get_string_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let prefs = JsonPrefs::open(&dir.path().join("servers.json")).unwrap();
        assert_eq!(prefs.get_string("nope", "fallback"), "fallback");
    }

    #[test]
    fn clear_then_commit_empties_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("servers.json");

        let mut prefs = JsonPrefs::open(&path).unwrap();
        prefs.put_string("web", "http://web:61209");
        prefs.commit().unwrap();

        prefs.clear();
        prefs.commit().unwrap();

        let reopened = JsonPrefs::open(&path).unwrap();
        assert!(reopened.get_all().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("servers.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonPrefs::open(&path),
            Err(PrefsError::ParseFailed(_))
        ));
    }
}
