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
    io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

static HOME_DIR: OnceLock<PathBuf> = OnceLock::new();

/// A custom data directory override, set only by `set_custom_data_dir`.
static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// The resolved data directory.
/// On macOS, this is `~/Library/Application Support/Themesmith`.
/// On Linux/FreeBSD, this is `$XDG_DATA_HOME/themesmith`.
static CURRENT_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// The resolved config directory.
/// On Linux/FreeBSD, this is `$XDG_CONFIG_HOME/themesmith`, elsewhere
/// `~/.config/themesmith`.
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the path to the user's home directory, or the current directory
/// when no home can be determined.
pub fn home_dir() -> &'static PathBuf {
    HOME_DIR.get_or_init(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
}

/// Returns the path to the configuration directory used by themesmith.
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        if let Some(custom_dir) = CUSTOM_DATA_DIR.get() {
            custom_dir.join("config")
        } else if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| home_dir().join("AppData").join("Roaming"))
                .join("Themesmith")
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            dirs::config_dir()
                .unwrap_or_else(|| home_dir().join(".config"))
                .join("themesmith")
        } else {
            home_dir().join(".config").join("themesmith")
        }
    })
}

/// Returns the path to the data directory used by themesmith.
pub fn data_dir() -> &'static PathBuf {
    CURRENT_DATA_DIR.get_or_init(|| {
        if let Some(custom_dir) = CUSTOM_DATA_DIR.get() {
            custom_dir.clone()
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            dirs::data_local_dir()
                .unwrap_or_else(|| home_dir().join(".local").join("share"))
                .join("themesmith")
        } else {
            dirs::data_local_dir()
                .unwrap_or_else(|| home_dir().clone())
                .join("Themesmith")
        }
    })
}

/// Sets a custom directory for all user data, overriding the default data
/// directory. Must be called before `data_dir` or `config_dir` is first
/// used. Relative paths are canonicalized and the directory is created.
///
/// Returns an error if the data directory was already resolved or the
/// directory cannot be created.
pub fn set_custom_data_dir<P: ?Sized + AsRef<Path>>(dir: &P) -> io::Result<&'static PathBuf> {
    if CURRENT_DATA_DIR.get().is_some() || CONFIG_DIR.get().is_some() {
        return Err(io::Error::other(
            "set_custom_data_dir called after data_dir or config_dir was initialized",
        ));
    }

    let mut path = dir.as_ref().to_path_buf();
    std::fs::create_dir_all(&path)?;
    if path.is_relative() {
        if let Ok(abs) = path.canonicalize() {
            path = abs;
        }
    }

    Ok(CUSTOM_DATA_DIR.get_or_init(|| path))
}

/// Returns the path to the logs directory.
pub fn logs_dir() -> &'static PathBuf {
    static LOGS_DIR: OnceLock<PathBuf> = OnceLock::new();
    LOGS_DIR.get_or_init(|| {
        if cfg!(target_os = "macos") && CUSTOM_DATA_DIR.get().is_none() {
            home_dir().join("Library/Logs/Themesmith")
        } else {
            data_dir().join("logs")
        }
    })
}

/// Returns the directory holding persisted theme records.
pub fn storage_dir() -> &'static PathBuf {
    static STORAGE_DIR: OnceLock<PathBuf> = OnceLock::new();
    STORAGE_DIR.get_or_init(|| data_dir().join("storage"))
}

/// Returns the path to the `settings.toml` file.
pub fn settings_file() -> &'static PathBuf {
    static SETTINGS_FILE: OnceLock<PathBuf> = OnceLock::new();
    SETTINGS_FILE.get_or_init(|| config_dir().join("settings.toml"))
}
