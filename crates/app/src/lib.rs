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

mod err;
mod settings;

use std::path::{Path, PathBuf};

pub use err::{Error, Result};
pub use settings::{AppConfig, ENV_PREFIX};
use snafu::ResultExt;
use themesmith_export::{Dialect, ExportFormat, from_json, usage_snippet};
use themesmith_store::{Persisted, ThemeStore};
use themesmith_theme::{PaletteMode, ThemeConfig, presets::Preset};
use tracing::info;

use crate::err::{EncodeThemeSnafu, ExportSnafu, FileSnafu, ParseSnafu};

/// A theme editing session: settings plus the store they opened.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    store:      ThemeStore,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let store = ThemeStore::open(config.storage.open());
        info!(
            backend = %config.storage.backend,
            restored = store.load_outcome().is_restored(),
            "opened theme store"
        );
        Self { config, store }
    }

    pub const fn store(&self) -> &ThemeStore { &self.store }

    pub fn store_mut(&mut self) -> &mut ThemeStore { &mut self.store }

    /// Current configuration as pretty JSON.
    pub fn config_json(&self) -> Result<String> {
        ExportFormat::Json
            .render(self.store.config())
            .context(ExportSnafu)
    }

    /// Derived render theme as pretty JSON.
    pub fn theme_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.store.theme().as_ref()).context(EncodeThemeSnafu)
    }

    /// Merges a partial configuration given as JSON text.
    ///
    /// Nothing changes when `text` is rejected.
    pub fn apply_json(&mut self, text: &str) -> Result<Persisted> {
        let patch = from_json(text).context(ParseSnafu)?;
        Ok(self.store.update(&patch))
    }

    /// Adopts a full configuration given as JSON text.
    ///
    /// Nothing changes when `text` is rejected.
    pub fn import_json(&mut self, text: &str) -> Result<Persisted> {
        let config: ThemeConfig = from_json(text).context(ParseSnafu)?;
        info!("importing theme configuration");
        Ok(self.store.replace(config))
    }

    /// Reads `path` and adopts its content, see [`App::import_json`].
    pub fn import_file(&mut self, path: &Path) -> Result<Persisted> {
        let text = read_file(path)?;
        self.import_json(&text)
    }

    /// Merges a partial configuration read from `path`, see
    /// [`App::apply_json`].
    pub fn apply_file(&mut self, path: &Path) -> Result<Persisted> {
        let text = read_file(path)?;
        self.apply_json(&text)
    }

    pub fn reset(&mut self) -> Persisted { self.store.reset() }

    /// Merges a bundled preset; keys the preset does not set are kept.
    pub fn apply_preset(&mut self, preset: Preset) -> Persisted {
        info!(%preset, "applying preset");
        self.store.update(&preset.config())
    }

    /// Switches the palette mode along with the matching surface and text
    /// colors.
    pub fn set_mode(&mut self, mode: PaletteMode) -> Persisted {
        info!(%mode, "switching palette mode");
        self.store.update(&ThemeConfig::mode_patch(mode))
    }

    /// Renders the current configuration in `format`.
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        format.render(self.store.config()).context(ExportSnafu)
    }

    /// Writes an export to `out`, or to the format's default file name in
    /// `dir` when `out` is a directory. Returns the written path.
    pub fn export_to(&self, format: ExportFormat, out: &Path) -> Result<PathBuf> {
        let path = if out.is_dir() {
            out.join(format.default_file_name())
        } else {
            out.to_path_buf()
        };
        let text = self.export(format)?;
        std::fs::write(&path, text).context(FileSnafu {
            action: "write",
            path:   &path,
        })?;
        info!(path = %path.display(), %format, "exported theme configuration");
        Ok(path)
    }

    pub fn usage(dialect: Dialect) -> String { usage_snippet(dialect) }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(FileSnafu {
        action: "read",
        path,
    })
}
