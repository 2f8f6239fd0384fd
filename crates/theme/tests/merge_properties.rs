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

use serde_json::json;
use themesmith_theme::{
    CustomShadow, Lenient, PaletteMode, RenderTheme, ThemeConfig, presets::Preset,
};

fn patch(value: serde_json::Value) -> ThemeConfig { serde_json::from_value(value).unwrap() }

#[test]
fn test_control_sized_patches_compose() {
    let mut config = ThemeConfig::builtin();
    for p in [
        json!({ "palette": { "primary": { "main": "#000000" } } }),
        json!({ "palette": { "mode": "dark" } }),
        json!({ "typography": { "fontFamily": "Inter" } }),
        json!({ "customShadow": { "opacity": 0.5 } }),
        json!({ "shape": { "borderRadius": 12 } }),
        json!({ "spacing": 6 }),
    ] {
        config = config.merged(&patch(p));
    }

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["palette"]["primary"]["main"], "#000000");
    assert_eq!(value["palette"]["secondary"]["main"], "#dc004e");
    assert_eq!(value["palette"]["mode"], "dark");
    assert_eq!(value["typography"]["fontFamily"], "Inter");
    assert_eq!(value["typography"]["h1"]["fontSize"], "6rem");
    assert_eq!(value["customShadow"]["opacity"], 0.5);
    assert_eq!(value["customShadow"]["blur"], 4);
    assert_eq!(value["shape"]["borderRadius"], 12);
    assert_eq!(value["spacing"], 6);
}

#[test]
fn test_render_theme_follows_merged_shadow() {
    let config = ThemeConfig::builtin().merged(&ThemeConfig {
        custom_shadow: Some(Lenient::Known(CustomShadow {
            color: Some(Lenient::Known("#ff0000".to_owned())),
            opacity: Some(Lenient::Known(0.5)),
            blur: Some(Lenient::Known(10)),
            offset_y: Some(Lenient::Known(4)),
            ..Default::default()
        })),
        ..Default::default()
    });

    let theme = RenderTheme::derive(&config);
    assert_eq!(theme.shadow(1), "0px 4px 10px 0px #ff000080");
    assert_eq!(theme.shadow(0), "none");
}

#[test]
fn test_unknown_top_level_keys_survive_merge() {
    let config = ThemeConfig::builtin().merged(&patch(json!({
        "components": { "MuiButton": { "defaultProps": { "disableRipple": true } } }
    })));
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value["components"]["MuiButton"]["defaultProps"]["disableRipple"],
        true
    );
    assert_eq!(value["spacing"], 8);
}

#[test]
fn test_preset_then_mode_switch() {
    let config = ThemeConfig::builtin()
        .merged(&Preset::OceanBlue.config())
        .merged(&ThemeConfig::mode_patch(PaletteMode::Dark));

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["palette"]["primary"]["main"], "#006494");
    assert_eq!(value["palette"]["mode"], "dark");
    assert_eq!(value["palette"]["background"]["default"], "#121212");
    assert_eq!(value["palette"]["text"]["secondary"], "rgba(255, 255, 255, 0.6)");
    assert_eq!(value["typography"]["button"]["textTransform"], "uppercase");
    assert_eq!(value["typography"]["fontSize"], 14);
    assert_eq!(value["shape"]["borderRadius"], 8);

    let theme = RenderTheme::derive(&config);
    assert_eq!(theme.palette.background.paper, "#1e1e1e");
    assert_eq!(theme.shadow(2), "0px 3px 8px 0px #00649426");
}
