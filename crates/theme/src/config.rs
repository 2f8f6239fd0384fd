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

//! Theme configuration edited by the builder.
//!
//! A `ThemeConfig` is both the full configuration and a partial update: every
//! field at every level is optional. The same type flows through
//! [`ThemeConfig::merged`], storage and export.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    lenient::{Lenient, known, merge_extra, merge_section, pick},
    palette::{BackgroundColors, ColorRole, Palette, PaletteMode, TextColors},
    shadow::{
        CustomShadow, DEFAULT_SHADOW_BLUR, DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_OFFSET_X,
        DEFAULT_SHADOW_OFFSET_Y, DEFAULT_SHADOW_OPACITY, DEFAULT_SHADOW_SPREAD,
    },
    typography::{ButtonStyle, TextStyle, TextTransform, Typography},
};

/// Corner rounding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Lenient<u32>>,
    #[serde(flatten)]
    pub extra:         Map<String, Value>,
}

impl Shape {
    pub fn rounded(border_radius: u32) -> Self {
        Self {
            border_radius: Some(Lenient::Known(border_radius)),
            extra:         Map::new(),
        }
    }

    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            border_radius: pick(&patch.border_radius, &self.border_radius),
            extra:         merge_extra(&self.extra, &patch.extra),
        }
    }
}

/// Root of a theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette:       Option<Lenient<Palette>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography:    Option<Lenient<Typography>>,
    /// Base spacing unit in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing:       Option<Lenient<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape:         Option<Lenient<Shape>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shadow: Option<Lenient<CustomShadow>>,
    /// Explicit elevation ramp. Takes precedence over `custom_shadow` when it
    /// holds exactly [`crate::ELEVATION_LEVELS`] entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows:       Option<Lenient<Vec<String>>>,
    /// Any other theme option of the host framework, carried through as-is.
    #[serde(flatten)]
    pub extra:         Map<String, Value>,
}

impl ThemeConfig {
    /// Applies `patch` on top of `self`.
    ///
    /// `palette`, `typography`, `shape` and `custom_shadow` are merged one
    /// level deep. Every other top-level field present in `patch` replaces
    /// the current value. Absent fields are left untouched.
    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            palette: merge_section(&self.palette, &patch.palette, Palette::merged),
            typography: merge_section(&self.typography, &patch.typography, Typography::merged),
            spacing: pick(&patch.spacing, &self.spacing),
            shape: merge_section(&self.shape, &patch.shape, Shape::merged),
            custom_shadow: merge_section(
                &self.custom_shadow,
                &patch.custom_shadow,
                CustomShadow::merged,
            ),
            shadows: pick(&patch.shadows, &self.shadows),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    pub fn palette(&self) -> Option<&Palette> { known(&self.palette) }

    pub fn typography(&self) -> Option<&Typography> { known(&self.typography) }

    pub fn spacing(&self) -> Option<u32> { known(&self.spacing).copied() }

    pub fn shape(&self) -> Option<&Shape> { known(&self.shape) }

    pub fn custom_shadow(&self) -> Option<&CustomShadow> { known(&self.custom_shadow) }

    pub fn shadows(&self) -> Option<&[String]> { known(&self.shadows).map(Vec::as_slice) }

    /// Patch that switches the palette to `mode` and swaps the surface and
    /// text colors for the matching pair. Other palette keys are untouched.
    pub fn mode_patch(mode: PaletteMode) -> Self {
        Self {
            palette: Some(Lenient::Known(Palette {
                mode: Some(Lenient::Known(mode)),
                background: Some(Lenient::Known(BackgroundColors::for_mode(mode))),
                text: Some(Lenient::Known(TextColors::for_mode(mode))),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    /// The built-in starting configuration with every field populated.
    pub fn builtin() -> Self {
        Self {
            palette:       Some(Lenient::Known(Palette {
                mode:       Some(Lenient::Known(PaletteMode::Light)),
                primary:    Some(ColorRole::new("#1976d2").into()),
                secondary:  Some(ColorRole::new("#dc004e").into()),
                error:      Some(ColorRole::new("#d32f2f").into()),
                warning:    Some(ColorRole::new("#ed6c02").into()),
                info:       Some(ColorRole::new("#0288d1").into()),
                success:    Some(ColorRole::new("#2e7d32").into()),
                background: Some(BackgroundColors::for_mode(PaletteMode::Light).into()),
                text:       Some(TextColors::for_mode(PaletteMode::Light).into()),
                extra:      Map::new(),
            })),
            typography:    Some(Lenient::Known(Typography {
                font_family: Some(
                    r#""Roboto", "Helvetica", "Arial", sans-serif"#.to_owned().into(),
                ),
                font_size:   Some(Lenient::Known(14)),
                h1:          Some(TextStyle::new("6rem", 300, 1.167).into()),
                h2:          Some(TextStyle::new("3.75rem", 300, 1.2).into()),
                h3:          Some(TextStyle::new("3rem", 400, 1.167).into()),
                h4:          Some(TextStyle::new("2.125rem", 400, 1.235).into()),
                h5:          Some(TextStyle::new("1.5rem", 400, 1.334).into()),
                h6:          Some(TextStyle::new("1.25rem", 500, 1.6).into()),
                body1:       Some(TextStyle::new("1rem", 400, 1.5).into()),
                body2:       Some(TextStyle::new("0.875rem", 400, 1.43).into()),
                button:      Some(Lenient::Known(ButtonStyle {
                    font_size:      Some("0.875rem".to_owned().into()),
                    font_weight:    Some(Lenient::Known(500)),
                    text_transform: Some(TextTransform::Uppercase.into()),
                    extra:          Map::new(),
                })),
                extra:       Map::new(),
            })),
            spacing:       Some(Lenient::Known(8)),
            shape:         Some(Shape::rounded(4).into()),
            custom_shadow: Some(Lenient::Known(CustomShadow {
                color:    Some(DEFAULT_SHADOW_COLOR.to_owned().into()),
                opacity:  Some(Lenient::Known(DEFAULT_SHADOW_OPACITY)),
                blur:     Some(Lenient::Known(DEFAULT_SHADOW_BLUR)),
                spread:   Some(Lenient::Known(DEFAULT_SHADOW_SPREAD)),
                offset_x: Some(Lenient::Known(DEFAULT_SHADOW_OFFSET_X)),
                offset_y: Some(Lenient::Known(DEFAULT_SHADOW_OFFSET_Y)),
                extra:    Map::new(),
            })),
            shadows:       None,
            extra:         Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn primary_patch(color: &str) -> ThemeConfig {
        ThemeConfig {
            palette: Some(Lenient::Known(Palette {
                primary: Some(ColorRole::new(color).into()),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    #[test]
    fn merge_keeps_untouched_palette_roles() {
        fn main(role: &Option<Lenient<ColorRole>>) -> Option<&str> {
            known(role).and_then(ColorRole::main)
        }

        let merged = ThemeConfig::builtin().merged(&primary_patch("#000000"));
        let palette = merged.palette().unwrap();
        assert_eq!(main(&palette.primary), Some("#000000"));
        assert_eq!(main(&palette.secondary), Some("#dc004e"));
        assert_eq!(palette.mode(), Some(PaletteMode::Light));
    }

    #[test]
    fn scalar_spacing_is_replaced() {
        let base = ThemeConfig::builtin();
        let merged = base.merged(&ThemeConfig {
            spacing: Some(Lenient::Known(12)),
            ..Default::default()
        });
        assert_eq!(merged.spacing(), Some(12));
        assert_eq!(
            ThemeConfig {
                spacing: base.spacing.clone(),
                ..merged
            },
            base
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let patch = ThemeConfig {
            custom_shadow: Some(Lenient::Known(CustomShadow {
                blur: Some(Lenient::Known(12)),
                ..Default::default()
            })),
            shape: Some(Shape::rounded(16).into()),
            ..Default::default()
        };
        let once = ThemeConfig::builtin().merged(&patch);
        let twice = once.merged(&patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn nested_patch_on_empty_base_is_adopted() {
        let merged = ThemeConfig::default().merged(&primary_patch("#abcdef"));
        assert_eq!(merged, primary_patch("#abcdef"));
    }

    #[test]
    fn shadow_fields_merge_individually() {
        let merged = ThemeConfig::builtin().merged(&ThemeConfig {
            custom_shadow: Some(Lenient::Known(CustomShadow {
                opacity: Some(Lenient::Known(0.9)),
                ..Default::default()
            })),
            ..Default::default()
        });
        let shadow = merged.custom_shadow().unwrap();
        assert_eq!(shadow.opacity, Some(Lenient::Known(0.9)));
        assert_eq!(shadow.offset_y, Some(Lenient::Known(DEFAULT_SHADOW_OFFSET_Y)));
        assert_eq!(shadow.color, Some(DEFAULT_SHADOW_COLOR.to_owned().into()));
    }

    #[test]
    fn extra_keys_replace_per_key() {
        let base: ThemeConfig = serde_json::from_value(json!({
            "direction": "ltr",
            "zIndex": { "appBar": 1100 }
        }))
        .unwrap();
        let patch: ThemeConfig = serde_json::from_value(json!({
            "zIndex": { "drawer": 1200 }
        }))
        .unwrap();

        let merged = base.merged(&patch);
        assert_eq!(merged.extra["direction"], "ltr");
        assert_eq!(merged.extra["zIndex"], json!({ "drawer": 1200 }));
    }

    #[test]
    fn nested_extra_keys_merge_per_key() {
        let base: ThemeConfig = serde_json::from_value(json!({
            "palette": { "divider": "#ccc", "primary": { "main": "#f00" } },
            "shape": { "borderRadius": 4, "pill": 999 }
        }))
        .unwrap();
        let patch: ThemeConfig = serde_json::from_value(json!({
            "palette": { "tonalOffset": 0.3 },
            "shape": { "borderRadius": 4.5 }
        }))
        .unwrap();

        let value = serde_json::to_value(base.merged(&patch)).unwrap();
        assert_eq!(
            value,
            json!({
                "palette": {
                    "divider": "#ccc",
                    "tonalOffset": 0.3,
                    "primary": { "main": "#f00" }
                },
                "shape": { "borderRadius": 4.5, "pill": 999 }
            })
        );
    }

    #[test]
    fn unparseable_section_is_replaced_wholesale() {
        let base = ThemeConfig::builtin();
        let patch: ThemeConfig = serde_json::from_value(json!({ "shape": "square" })).unwrap();
        let merged = base.merged(&patch);
        assert_eq!(merged.shape, Some(Lenient::Raw(json!("square"))));
        assert!(merged.shape().is_none());
        assert_eq!(merged.palette, base.palette);
    }

    #[test]
    fn mode_patch_swaps_surface_and_text() {
        let merged = ThemeConfig::builtin().merged(&ThemeConfig::mode_patch(PaletteMode::Dark));
        let palette = merged.palette().unwrap();
        assert_eq!(palette.mode(), Some(PaletteMode::Dark));
        assert_eq!(
            palette.background(),
            Some(&BackgroundColors::new("#121212", "#1e1e1e"))
        );
        assert_eq!(
            palette.text(),
            Some(&TextColors::new(
                "rgba(255, 255, 255, 0.87)",
                "rgba(255, 255, 255, 0.6)"
            ))
        );
        assert_eq!(palette.primary, ThemeConfig::builtin().palette().unwrap().primary);

        let back = merged.merged(&ThemeConfig::mode_patch(PaletteMode::Light));
        assert_eq!(back, ThemeConfig::builtin());
    }

    #[test]
    fn builtin_serializes_in_camel_case() {
        let value = serde_json::to_value(ThemeConfig::builtin()).unwrap();
        assert_eq!(value["palette"]["primary"]["main"], "#1976d2");
        assert_eq!(value["shape"]["borderRadius"], 4);
        assert_eq!(value["customShadow"]["offsetY"], 2);
        assert_eq!(value["typography"]["h6"]["lineHeight"], 1.6);
        assert!(value.get("shadows").is_none());
    }

    #[test]
    fn empty_config_is_empty_object() {
        assert!(ThemeConfig::default().is_empty());
        assert_eq!(serde_json::to_string(&ThemeConfig::default()).unwrap(), "{}");
        assert!(!ThemeConfig::builtin().is_empty());
    }
}
