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

//! The session-wide owner of the current theme configuration.
//!
//! Consumers hold the store by reference and change it only through
//! [`ThemeStore::update`], [`ThemeStore::replace`] and [`ThemeStore::reset`].
//! Renderers subscribe to the derived [`RenderTheme`] instead of polling:
//! ```ignore
//! let mut rx = store.subscribe();
//! store.update(&patch);
//! assert!(rx.has_changed()?);
//! let theme = rx.borrow_and_update().clone();
//! ```

use std::sync::Arc;

use themesmith_theme::{RenderTheme, ThemeConfig};
use tokio::sync::watch;

use crate::{err::Error, kv::KVStore};

/// Key the raw configuration is persisted under. Not versioned.
pub const STORAGE_KEY: &str = "mui-theme-builder-config";

/// How the configuration held at startup was obtained.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A persisted configuration was adopted verbatim.
    Restored,
    /// Nothing was persisted; the built-in configuration is used.
    Missing,
    /// Reading or decoding the persisted value failed; the built-in
    /// configuration is used.
    Fallback(Error),
}

impl LoadOutcome {
    pub const fn is_restored(&self) -> bool { matches!(self, Self::Restored) }

    pub const fn used_builtin(&self) -> bool { !self.is_restored() }
}

/// Result of writing a change through to storage.
#[derive(Debug)]
pub enum Persisted {
    Saved,
    /// The stored record was removed.
    Cleared,
    /// The in-memory change stands but storage could not be updated.
    Failed(Error),
}

impl Persisted {
    pub const fn is_ok(&self) -> bool { !matches!(self, Self::Failed(_)) }
}

/// Owns the current [`ThemeConfig`] and its derived [`RenderTheme`].
pub struct ThemeStore {
    kv:           KVStore,
    config:       ThemeConfig,
    theme:        watch::Sender<Arc<RenderTheme>>,
    load_outcome: LoadOutcome,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("config", &self.config)
            .field("load_outcome", &self.load_outcome)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Opens the store, restoring the persisted configuration if there is
    /// one. Storage failures fall back to [`ThemeConfig::builtin`] and are
    /// reported through [`ThemeStore::load_outcome`], never returned.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn open(kv: KVStore) -> Self {
        let (config, load_outcome) = match kv.get::<ThemeConfig>(STORAGE_KEY) {
            Ok(Some(config)) => {
                tracing::debug!("restored persisted theme configuration");
                (config, LoadOutcome::Restored)
            }
            Ok(None) => {
                tracing::debug!("no persisted theme configuration, using built-in");
                (ThemeConfig::builtin(), LoadOutcome::Missing)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted theme configuration, using built-in");
                (ThemeConfig::builtin(), LoadOutcome::Fallback(e))
            }
        };

        let theme = watch::Sender::new(Arc::new(RenderTheme::derive(&config)));
        Self {
            kv,
            config,
            theme,
            load_outcome,
        }
    }

    pub const fn config(&self) -> &ThemeConfig { &self.config }

    pub const fn load_outcome(&self) -> &LoadOutcome { &self.load_outcome }

    /// The render theme for the current configuration.
    pub fn theme(&self) -> Arc<RenderTheme> { self.theme.borrow().clone() }

    /// A receiver that observes every new render theme.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RenderTheme>> { self.theme.subscribe() }

    /// Merges `patch` into the current configuration.
    ///
    /// See [`ThemeConfig::merged`] for the merge rule.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn update(&mut self, patch: &ThemeConfig) -> Persisted {
        let next = self.config.merged(patch);
        self.commit(next)
    }

    /// Adopts `config` wholesale, e.g. after an import.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn replace(&mut self, config: ThemeConfig) -> Persisted { self.commit(config) }

    /// Restores the built-in configuration and removes the persisted copy.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn reset(&mut self) -> Persisted {
        self.config = ThemeConfig::builtin();
        self.publish();
        match self.kv.remove(STORAGE_KEY) {
            Ok(()) => Persisted::Cleared,
            Err(e) => {
                tracing::warn!(error = %e, "failed to clear persisted theme configuration");
                Persisted::Failed(e)
            }
        }
    }

    fn commit(&mut self, config: ThemeConfig) -> Persisted {
        self.config = config;
        self.publish();
        match self.kv.set(STORAGE_KEY, &self.config) {
            Ok(()) => {
                tracing::debug!("persisted theme configuration");
                Persisted::Saved
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist theme configuration");
                Persisted::Failed(e)
            }
        }
    }

    fn publish(&self) {
        let theme = RenderTheme::derive(&self.config);
        self.theme.send_replace(Arc::new(theme));
    }
}
