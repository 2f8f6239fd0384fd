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

use themesmith_app::{App, AppConfig, Error};
use themesmith_store::{BackendKind, StorageConfig};
use themesmith_theme::ThemeConfig;

fn open_in(dir: &Path) -> App {
    AppConfig::builder()
        .storage(
            StorageConfig::builder()
                .backend(BackendKind::File)
                .dir(dir)
                .build(),
        )
        .build()
        .open()
}

#[test]
fn test_edits_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = open_in(dir.path());
    assert!(!app.store().load_outcome().is_restored());
    app.apply_json(r##"{"palette": {"primary": {"main": "#123456"}}}"##)
        .unwrap();
    let edited = app.store().config().clone();
    drop(app);

    let app = open_in(dir.path());
    assert!(app.store().load_outcome().is_restored());
    assert_eq!(app.store().config(), &edited);
}

#[test]
fn test_failed_import_file_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"palette\": ").unwrap();

    let mut app = open_in(dir.path());
    assert!(matches!(
        app.import_file(&bad).unwrap_err(),
        Error::Parse { .. }
    ));
    assert!(matches!(
        app.import_file(&dir.path().join("absent.json")).unwrap_err(),
        Error::File { .. }
    ));
    drop(app);

    let app = open_in(dir.path());
    assert!(!app.store().load_outcome().is_restored());
    assert_eq!(app.store().config(), &ThemeConfig::builtin());
}

#[test]
fn test_reset_clears_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = open_in(dir.path());
    app.apply_json(r#"{"spacing": 2}"#).unwrap();
    assert!(app.reset().is_ok());
    drop(app);

    let app = open_in(dir.path());
    assert!(!app.store().load_outcome().is_restored());
    assert_eq!(app.store().config(), &ThemeConfig::builtin());
}
