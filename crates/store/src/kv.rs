// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};
use snafu::{ResultExt, ensure};

use crate::err::*;

/// Raw string storage keyed by name.
///
/// Backends only move strings around; encoding lives in [`KVStore`].
pub trait KvBackend: Send + Sync {
    /// Returns `None` if the key does not exist.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys become file names, so they are restricted to a safe alphabet.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    ensure!(valid, InvalidKeySnafu { key });
    Ok(())
}

/// Stores every key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf { self.dir.join(format!("{key}.json")) }
}

impl KvBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(IoSnafu {
                action: "read",
                path,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.dir).context(IoSnafu {
            action: "create",
            path:   self.dir.clone(),
        })?;

        // Write a sibling file first so a crash never leaves a torn record.
        let path = self.path_for(key);
        let staging = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staging, value).context(IoSnafu {
            action: "write",
            path:   staging.clone(),
        })?;
        fs::rename(&staging, &path).context(IoSnafu {
            action: "replace",
            path,
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(IoSnafu {
                action: "remove",
                path,
            }),
        }
    }
}

/// Process-local backend. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.lock().len() }

    pub fn is_empty(&self) -> bool { self.entries.lock().is_empty() }
}

impl KvBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Key-value store over a [`KvBackend`].
///
/// All values are serialized to JSON before storage
#[derive(Clone)]
pub struct KVStore {
    backend: Arc<dyn KvBackend>,
}

impl std::fmt::Debug for KVStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KVStore").finish_non_exhaustive()
    }
}

impl KVStore {
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Set a key-value pair
    ///
    /// The value will be serialized to JSON before storage
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value_json = serde_json::to_string(value).context(CodecSnafu)?;
        self.backend.write(key, &value_json)
    }

    /// Get a value by key
    ///
    /// Returns `None` if the key does not exist
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.read(key)? {
            Some(value_json) => {
                let value = serde_json::from_str(&value_json).context(CodecSnafu)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Remove a key-value pair
    pub fn remove(&self, key: &str) -> Result<()> { self.backend.remove(key) }
}
