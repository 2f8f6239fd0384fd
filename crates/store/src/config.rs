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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::kv::{FileBackend, KVStore, MemoryBackend};

/// Where persisted theme records live.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// One JSON file per key under [`StorageConfig::dir`].
    #[default]
    #[display("file")]
    File,
    /// Nothing survives the process.
    #[display("memory")]
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend used for persisted records
    #[builder(default)]
    pub backend: BackendKind,

    /// Directory for the file backend
    #[default(_code = "themesmith_paths::storage_dir().clone()")]
    #[builder(default = themesmith_paths::storage_dir().clone(), into)]
    pub dir: PathBuf,
}

impl StorageConfig {
    /// Opens a key-value store for this configuration.
    pub fn open(&self) -> KVStore {
        match self.backend {
            BackendKind::File => {
                tracing::debug!(dir = %self.dir.display(), "using file storage backend");
                KVStore::new(FileBackend::new(&self.dir))
            }
            BackendKind::Memory => {
                tracing::debug!("using in-memory storage backend");
                KVStore::new(MemoryBackend::new())
            }
        }
    }
}
