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

use themesmith_export::{Dialect, from_json, to_json, to_source_code};
use serde_json::Map;
use themesmith_theme::{CustomShadow, Lenient, PaletteMode, ThemeConfig};

fn edited_config() -> ThemeConfig {
    let mut config = ThemeConfig::builtin().merged(
        &from_json(
            r##"{
                "palette": { "mode": "dark", "primary": { "main": "rgba(10, 20, 30, 0.5)" } },
                "typography": { "h2": { "fontWeight": 700 } },
                "spacing": 6,
                "components": { "MuiCard": { "styleOverrides": { "root": { "padding": 0 } } } }
            }"##,
        )
        .unwrap(),
    );
    config.custom_shadow = Some(Lenient::Known(CustomShadow {
        color:    Some(Lenient::Known("#ff0000".to_owned())),
        opacity:  Some(Lenient::Known(0.5)),
        blur:     Some(Lenient::Known(10)),
        spread:   Some(Lenient::Known(0)),
        offset_x: Some(Lenient::Known(0)),
        offset_y: Some(Lenient::Known(4)),
        extra:    Map::new(),
    }));
    config
}

/// Text between `themeConfig... = ` and the statement terminator.
fn embedded_payload(code: &str) -> &str {
    let start = code.find(" = ").unwrap() + 3;
    let end = code.find(";\n\nexport const theme").unwrap();
    &code[start..end]
}

#[test]
fn test_json_round_trip_of_edited_config() {
    let config = edited_config();
    let text = to_json(&config).unwrap();
    let parsed = from_json(&text).unwrap();

    assert_eq!(parsed, config);
    assert_eq!(parsed.palette().unwrap().mode(), Some(PaletteMode::Dark));
}

#[test]
fn test_dialects_embed_identical_payload() {
    let config = edited_config();
    let typed = to_source_code(&config, Dialect::Typed).unwrap();
    let untyped = to_source_code(&config, Dialect::Untyped).unwrap();

    assert_eq!(embedded_payload(&typed), embedded_payload(&untyped));
    assert_eq!(embedded_payload(&typed), to_json(&config).unwrap());

    let typed_only: Vec<&str> = typed
        .lines()
        .filter(|line| !untyped.lines().any(|other| other == *line))
        .collect();
    assert_eq!(
        typed_only,
        vec![
            "import type { ThemeOptions } from '@mui/material/styles';",
            "export const themeConfig: ThemeOptions = {",
        ]
    );
}

#[test]
fn test_embedded_payload_parses_back() {
    let config = edited_config();
    let code = to_source_code(&config, Dialect::Typed).unwrap();
    assert_eq!(from_json(embedded_payload(&code)).unwrap(), config);
}
