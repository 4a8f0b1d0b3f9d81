//! Persisted user preferences.
//!
//! Preferences are a flat key-value map of strings and booleans. The
//! on-disk form is a single JSON object; keys this program does not know
//! about are kept intact when the file is rewritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde_json::{Map, Value};
use thiserror::Error;

/// Directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "release-note-tui";

const PREFS_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preferences file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences file `{path}` is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("preferences file `{0}` does not contain a JSON object")]
    NotAnObject(PathBuf),
}

/// Key-value persistence used by the release-note state.
///
/// A missing key, or a key holding a value of another type, reads as `None`.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError>;
}

/// Default preferences path: `<config_dir>/release-note-tui/preferences.json`
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFS_FILE_NAME))
}

/// Preferences backed by a JSON file, rewritten on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Load preferences from `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => parse_object(&path, &content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(source) => return Err(PrefsError::Io { path, source }),
        };
        info!(
            "event=prefs_load module=prefs status=ok path={} keys={}",
            path.display(),
            values.len()
        );
        Ok(Self { path, values })
    }

    /// Like `open`, but falls back to an empty store when the file is unreadable.
    /// The broken file is replaced on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!("event=prefs_load module=prefs status=error error={e}");
                Self {
                    path,
                    values: Map::new(),
                }
            }
        }
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn flush(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let content = serde_json::to_string_pretty(&self.values).map_err(|source| {
            PrefsError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, content).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn parse_object(path: &Path, content: &str) -> Result<Map<String, Value>, PrefsError> {
    let value: Value = serde_json::from_str(content).map_err(|source| PrefsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PrefsError::NotAnObject(path.to_path_buf())),
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_string)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.set_value(key, Value::String(value.to_string()))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.set_value(key, Value::Bool(value))
    }
}

/// In-memory preferences for tests. Clones share the same map, so a test
/// can keep a handle and observe writes made through a boxed copy.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: std::rc::Rc<std::cell::RefCell<Map<String, Value>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), Value::Bool(value));
        self
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key)?.as_str().map(str::to_string)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.borrow().get(key)?.as_bool()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), Value::Bool(value));
        Ok(())
    }
}
