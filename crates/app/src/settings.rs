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

use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use snafu::{ResultExt, ensure};
use themesmith_common_telemetry::LoggingOptions;
use themesmith_store::StorageConfig;

use crate::{
    App,
    err::{Result, SettingsNotFoundSnafu, SettingsSnafu},
};

/// Prefix of environment overrides, e.g. `THEMESMITH__STORAGE__BACKEND=memory`.
pub const ENV_PREFIX: &str = "THEMESMITH";
const ENV_SEPARATOR: &str = "__";

/// Configuration for the application
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    #[builder(default)]
    pub logging: LoggingOptions,
    /// Storage configuration
    #[builder(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads settings from built-in defaults, then the settings file, then
    /// `THEMESMITH__*` environment variables.
    ///
    /// An explicit `path` must exist. Without one, the default
    /// `settings.toml` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> { Self::load_with_env(path, None) }

    /// Like [`AppConfig::load`], reading overrides from `env` instead of the
    /// process environment when it is given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) => {
                ensure!(path.is_file(), SettingsNotFoundSnafu { path });
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true)
            }
            None => config::File::from(themesmith_paths::settings_file().as_path())
                .format(config::FileFormat::Toml)
                .required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .source(env),
            )
            .build()
            .context(SettingsSnafu)?;

        let config: Self = settings.try_deserialize().context(SettingsSnafu)?;
        tracing::debug!(
            backend = %config.storage.backend,
            dir = %config.storage.dir.display(),
            "loaded settings"
        );
        Ok(config)
    }

    /// Opens the theme session described by this configuration.
    #[must_use]
    pub fn open(self) -> App { App::new(self) }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use themesmith_common_telemetry::{LogFormat, init_default_ut_logging};
    use themesmith_store::BackendKind;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn defaults_from_empty_sources() {
        init_default_ut_logging();
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn toml_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "debug"
log_format = "json"

[storage]
backend = "memory"
dir = "/tmp/themesmith-test"
"#
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.storage.backend, BackendKind::Memory);
        assert_eq!(config.storage.dir, Path::new("/tmp/themesmith-test"));

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("THEMESMITH__STORAGE__BACKEND", "file"),
                ("THEMESMITH__LOGGING__LEVEL", "trace"),
            ]),
        )
        .unwrap();
        assert_eq!(config.storage.backend, BackendKind::File);
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert_eq!(config.storage.dir, Path::new("/tmp/themesmith-test"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::load_with_env(Some(&missing), env(&[])).unwrap_err();
        assert!(matches!(err, crate::Error::SettingsNotFound { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage\nbackend = ").unwrap();
        let err = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
        assert!(matches!(err, crate::Error::Settings { .. }));
    }
}
