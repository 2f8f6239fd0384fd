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

//! Fully resolved theme handed to the presentation layer.
//!
//! Unlike [`ThemeConfig`], nothing in a [`RenderTheme`] is optional: every
//! unset field is filled with the host framework's own default for the
//! active palette mode.

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ThemeConfig,
    lenient::{Lenient, known},
    palette::{ColorRole, Palette, PaletteMode},
    shadow::{ELEVATION_LEVELS, elevation_ramp},
    typography::{TextStyle, TextTransform, Typography, Variant},
};

const FRAMEWORK_FONT_FAMILY: &str = r#""Roboto", "Helvetica", "Arial", sans-serif"#;
const FRAMEWORK_FONT_SIZE: u32 = 14;
const FRAMEWORK_SPACING: u32 = 8;
const FRAMEWORK_BORDER_RADIUS: u32 = 4;

/// Framework colors for one palette mode.
struct ModeDefaults {
    primary:            &'static str,
    secondary:          &'static str,
    error:              &'static str,
    warning:            &'static str,
    info:               &'static str,
    success:            &'static str,
    background_default: &'static str,
    background_paper:   &'static str,
    text_primary:       &'static str,
    text_secondary:     &'static str,
}

const LIGHT: ModeDefaults = ModeDefaults {
    primary:            "#1976d2",
    secondary:          "#9c27b0",
    error:              "#d32f2f",
    warning:            "#ed6c02",
    info:               "#0288d1",
    success:            "#2e7d32",
    background_default: "#fff",
    background_paper:   "#fff",
    text_primary:       "rgba(0, 0, 0, 0.87)",
    text_secondary:     "rgba(0, 0, 0, 0.6)",
};

const DARK: ModeDefaults = ModeDefaults {
    primary:            "#90caf9",
    secondary:          "#ce93d8",
    error:              "#f44336",
    warning:            "#ffa726",
    info:               "#29b6f6",
    success:            "#66bb6a",
    background_default: "#121212",
    background_paper:   "#121212",
    text_primary:       "#fff",
    text_secondary:     "rgba(255, 255, 255, 0.7)",
};

const fn mode_defaults(mode: PaletteMode) -> &'static ModeDefaults {
    match mode {
        PaletteMode::Light => &LIGHT,
        PaletteMode::Dark => &DARK,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBackground {
    pub default: String,
    pub paper:   String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedText {
    pub primary:   String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPalette {
    pub mode:       PaletteMode,
    pub primary:    String,
    pub secondary:  String,
    pub error:      String,
    pub warning:    String,
    pub info:       String,
    pub success:    String,
    pub background: ResolvedBackground,
    pub text:       ResolvedText,
}

impl ResolvedPalette {
    fn resolve(palette: Option<&Palette>) -> Self {
        let mode = palette.and_then(Palette::mode).unwrap_or_default();
        let fallback = mode_defaults(mode);
        let role = |get: fn(&Palette) -> &Option<Lenient<ColorRole>>, default: &str| {
            palette
                .and_then(|p| known(get(p)))
                .and_then(ColorRole::main)
                .unwrap_or(default)
                .to_owned()
        };
        let color = |value: Option<&Option<Lenient<String>>>, default: &str| {
            value.and_then(known).map_or(default, String::as_str).to_owned()
        };
        let background = palette.and_then(Palette::background);
        let text = palette.and_then(Palette::text);

        Self {
            mode,
            primary: role(|p| &p.primary, fallback.primary),
            secondary: role(|p| &p.secondary, fallback.secondary),
            error: role(|p| &p.error, fallback.error),
            warning: role(|p| &p.warning, fallback.warning),
            info: role(|p| &p.info, fallback.info),
            success: role(|p| &p.success, fallback.success),
            background: ResolvedBackground {
                default: color(background.map(|b| &b.default), fallback.background_default),
                paper:   color(background.map(|b| &b.paper), fallback.background_paper),
            },
            text: ResolvedText {
                primary:   color(text.map(|t| &t.primary), fallback.text_primary),
                secondary: color(text.map(|t| &t.secondary), fallback.text_secondary),
            },
        }
    }
}

/// A CSS length: strings as written, bare numbers as pixels.
fn css_length(value: &Option<Lenient<String>>) -> Option<String> {
    match value.as_ref()? {
        Lenient::Known(length) => Some(length.clone()),
        Lenient::Raw(Value::Number(px)) => Some(format!("{px}px")),
        Lenient::Raw(_) => None,
    }
}

/// A numeric font weight, accepting the `normal` and `bold` keywords and
/// numeric strings.
fn css_weight(value: &Option<Lenient<u16>>) -> Option<u16> {
    match value.as_ref()? {
        Lenient::Known(weight) => Some(*weight),
        Lenient::Raw(Value::String(keyword)) => match keyword.as_str() {
            "normal" => Some(400),
            "bold" => Some(700),
            other => other.parse().ok(),
        },
        Lenient::Raw(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTextStyle {
    pub font_size:   String,
    pub font_weight: u16,
    pub line_height: f64,
}

impl ResolvedTextStyle {
    fn resolve(style: Option<&TextStyle>, fallback: (&str, u16, f64)) -> Self {
        let (font_size, font_weight, line_height) = fallback;
        Self {
            font_size:   style
                .and_then(|s| css_length(&s.font_size))
                .unwrap_or_else(|| font_size.to_owned()),
            font_weight: style
                .and_then(|s| css_weight(&s.font_weight))
                .unwrap_or(font_weight),
            line_height: style
                .and_then(|s| known(&s.line_height).copied())
                .unwrap_or(line_height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedButtonStyle {
    pub font_size:      String,
    pub font_weight:    u16,
    pub text_transform: TextTransform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    pub font_family: String,
    pub font_size:   u32,
    pub h1:          ResolvedTextStyle,
    pub h2:          ResolvedTextStyle,
    pub h3:          ResolvedTextStyle,
    pub h4:          ResolvedTextStyle,
    pub h5:          ResolvedTextStyle,
    pub h6:          ResolvedTextStyle,
    pub body1:       ResolvedTextStyle,
    pub body2:       ResolvedTextStyle,
    pub button:      ResolvedButtonStyle,
}

/// Framework text style defaults: font size, weight, line height.
const fn variant_defaults(variant: Variant) -> (&'static str, u16, f64) {
    match variant {
        Variant::H1 => ("6rem", 300, 1.167),
        Variant::H2 => ("3.75rem", 300, 1.2),
        Variant::H3 => ("3rem", 400, 1.167),
        Variant::H4 => ("2.125rem", 400, 1.235),
        Variant::H5 => ("1.5rem", 400, 1.334),
        Variant::H6 => ("1.25rem", 500, 1.6),
        Variant::Body1 => ("1rem", 400, 1.5),
        Variant::Body2 => ("0.875rem", 400, 1.43),
    }
}

impl ResolvedTypography {
    fn resolve(typography: Option<&Typography>) -> Self {
        let style = |variant| {
            ResolvedTextStyle::resolve(
                typography.and_then(|t| t.style(variant)),
                variant_defaults(variant),
            )
        };
        let button = typography.and_then(Typography::button);

        Self {
            font_family: typography
                .and_then(|t| known(&t.font_family))
                .map_or(FRAMEWORK_FONT_FAMILY, String::as_str)
                .to_owned(),
            font_size:   typography
                .and_then(|t| known(&t.font_size).copied())
                .unwrap_or(FRAMEWORK_FONT_SIZE),
            h1:          style(Variant::H1),
            h2:          style(Variant::H2),
            h3:          style(Variant::H3),
            h4:          style(Variant::H4),
            h5:          style(Variant::H5),
            h6:          style(Variant::H6),
            body1:       style(Variant::Body1),
            body2:       style(Variant::Body2),
            button:      ResolvedButtonStyle {
                font_size:      button
                    .and_then(|b| css_length(&b.font_size))
                    .unwrap_or_else(|| "0.875rem".to_owned()),
                font_weight:    button.and_then(|b| css_weight(&b.font_weight)).unwrap_or(500),
                text_transform: button
                    .and_then(|b| known(&b.text_transform).copied())
                    .unwrap_or(TextTransform::Uppercase),
            },
        }
    }

    pub const fn style(&self, variant: Variant) -> &ResolvedTextStyle {
        match variant {
            Variant::H1 => &self.h1,
            Variant::H2 => &self.h2,
            Variant::H3 => &self.h3,
            Variant::H4 => &self.h4,
            Variant::H5 => &self.h5,
            Variant::H6 => &self.h6,
            Variant::Body1 => &self.body1,
            Variant::Body2 => &self.body2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShape {
    pub border_radius: u32,
}

/// Theme object consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTheme {
    pub palette:    ResolvedPalette,
    pub typography: ResolvedTypography,
    pub spacing:    u32,
    pub shape:      ResolvedShape,
    /// One entry per elevation level, `none` at level 0.
    pub shadows:    Vec<String>,
}

impl RenderTheme {
    /// Resolves `config` against framework defaults.
    pub fn derive(config: &ThemeConfig) -> Self {
        let custom_shadow = config.custom_shadow();
        let shadows = match config.shadows() {
            Some(explicit) if explicit.len() == ELEVATION_LEVELS => explicit.to_vec(),
            Some(explicit) => {
                tracing::warn!(
                    levels = explicit.len(),
                    expected = ELEVATION_LEVELS,
                    "ignoring explicit shadow ramp with wrong number of levels"
                );
                elevation_ramp(custom_shadow)
            }
            None => elevation_ramp(custom_shadow),
        };

        Self {
            palette: ResolvedPalette::resolve(config.palette()),
            typography: ResolvedTypography::resolve(config.typography()),
            spacing: config.spacing().unwrap_or(FRAMEWORK_SPACING),
            shape: ResolvedShape {
                border_radius: config
                    .shape()
                    .and_then(|s| known(&s.border_radius).copied())
                    .unwrap_or(FRAMEWORK_BORDER_RADIUS),
            },
            shadows,
        }
    }

    /// Shadow for an elevation level; levels past the ramp clamp to the last
    /// entry.
    pub fn shadow(&self, elevation: usize) -> &str {
        self.shadows
            .get(elevation)
            .or_else(|| self.shadows.last())
            .map_or("none", String::as_str)
    }
}

impl Default for RenderTheme {
    fn default() -> Self { Self::derive(&ThemeConfig::default()) }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        palette::BackgroundColors,
        shadow::{CustomShadow, FALLBACK_SHADOWS},
    };

    #[test]
    fn empty_config_resolves_to_framework_defaults() {
        let theme = RenderTheme::derive(&ThemeConfig::default());
        assert_eq!(theme.palette.mode, PaletteMode::Light);
        assert_eq!(theme.palette.secondary, "#9c27b0");
        assert_eq!(theme.palette.background.paper, "#fff");
        assert_eq!(theme.typography.font_size, 14);
        assert_eq!(theme.spacing, 8);
        assert_eq!(theme.shape.border_radius, 4);
        assert_eq!(theme.shadows, FALLBACK_SHADOWS.map(str::to_owned).to_vec());
    }

    #[test]
    fn builtin_config_wins_over_framework_defaults() {
        let theme = RenderTheme::derive(&ThemeConfig::builtin());
        assert_eq!(theme.palette.secondary, "#dc004e");
        assert_eq!(theme.palette.background.paper, "#f5f5f5");
        assert_eq!(theme.shadow(0), "none");
        assert_eq!(theme.shadow(1), "0px 2px 4px 0px #00000033");
        assert_eq!(theme.shadow(24), theme.shadow(1));
        assert_eq!(theme.shadow(99), theme.shadow(24));
    }

    #[test]
    fn dark_mode_uses_dark_fallbacks() {
        let config = ThemeConfig {
            palette: Some(Lenient::Known(Palette {
                mode: Some(Lenient::Known(PaletteMode::Dark)),
                background: Some(Lenient::Known(BackgroundColors {
                    paper: Some("#1e1e1e".to_owned().into()),
                    ..Default::default()
                })),
                ..Default::default()
            })),
            ..Default::default()
        };
        let theme = RenderTheme::derive(&config);
        assert_eq!(theme.palette.primary, "#90caf9");
        assert_eq!(theme.palette.background.default, "#121212");
        assert_eq!(theme.palette.background.paper, "#1e1e1e");
        assert_eq!(theme.palette.text.primary, "#fff");
    }

    #[test]
    fn partial_text_style_keeps_other_defaults() {
        let mut typography = Typography::default();
        *typography.style_mut(Variant::H3) = Some(Lenient::Known(TextStyle {
            font_weight: Some(Lenient::Known(700)),
            ..Default::default()
        }));
        let theme = RenderTheme::derive(&ThemeConfig {
            typography: Some(typography.into()),
            ..Default::default()
        });
        let h3 = theme.typography.style(Variant::H3);
        assert_eq!(h3.font_weight, 700);
        assert_eq!(h3.font_size, "3rem");
        assert!((h3.line_height - 1.167).abs() < f64::EPSILON);

        for variant in Variant::iter().filter(|v| *v != Variant::H3) {
            let (size, ..) = variant_defaults(variant);
            assert_eq!(theme.typography.style(variant).font_size, size);
        }
    }

    #[test]
    fn loosely_typed_values_resolve_sensibly() {
        let config: ThemeConfig = serde_json::from_value(json!({
            "palette": { "mode": "sepia", "primary": "#f00" },
            "typography": {
                "h1": { "fontWeight": "bold", "fontSize": 48 },
                "h2": { "fontWeight": "600", "lineHeight": "56px" },
                "button": { "fontWeight": "heavy" }
            },
            "shape": { "borderRadius": 4.5 },
            "spacing": "8px"
        }))
        .unwrap();

        let theme = RenderTheme::derive(&config);
        assert_eq!(theme.palette.mode, PaletteMode::Light);
        assert_eq!(theme.palette.primary, "#1976d2");
        assert_eq!(theme.typography.h1.font_weight, 700);
        assert_eq!(theme.typography.h1.font_size, "48px");
        assert_eq!(theme.typography.h2.font_weight, 600);
        assert!((theme.typography.h2.line_height - 1.2).abs() < f64::EPSILON);
        assert_eq!(theme.typography.button.font_weight, 500);
        assert_eq!(theme.shape.border_radius, FRAMEWORK_BORDER_RADIUS);
        assert_eq!(theme.spacing, FRAMEWORK_SPACING);
    }

    #[test]
    fn explicit_ramp_overrides_custom_shadow() {
        let mut ramp = vec!["none".to_owned()];
        ramp.extend((1..ELEVATION_LEVELS).map(|i| format!("0px {i}px 0px 0px #000")));
        let theme = RenderTheme::derive(&ThemeConfig {
            custom_shadow: Some(CustomShadow::default().into()),
            shadows: Some(ramp.clone().into()),
            ..Default::default()
        });
        assert_eq!(theme.shadows, ramp);
    }

    #[test]
    fn short_explicit_ramp_is_ignored() {
        let theme = RenderTheme::derive(&ThemeConfig {
            shadows: Some(vec!["none".to_owned()].into()),
            custom_shadow: Some(CustomShadow::default().into()),
            ..Default::default()
        });
        assert_eq!(theme.shadows.len(), ELEVATION_LEVELS);
        assert_eq!(theme.shadow(3), "0px 2px 4px 0px #00000033");
    }
}
