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

//! Named starting points offered by the editor.
//!
//! A preset is a partial [`ThemeConfig`]: it sets palette, typography
//! variants, spacing, corner radius and custom shadow, and is merged into the
//! current configuration like any other patch. Base font size, the button
//! style and pass-through keys are left as they were.

use serde_json::Map;

use crate::{
    config::{Shape, ThemeConfig},
    lenient::Lenient,
    palette::{BackgroundColors, ColorRole, Palette, PaletteMode, TextColors},
    shadow::CustomShadow,
    typography::{TextStyle, Typography},
};

/// The bundled presets, in menu order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Preset {
    #[display("Material Default")]
    MaterialDefault,
    #[display("Ocean Blue")]
    OceanBlue,
    #[display("Forest Green")]
    ForestGreen,
    #[display("Sunset Orange")]
    SunsetOrange,
    #[display("Purple Dream")]
    PurpleDream,
    #[display("Midnight")]
    Midnight,
    #[display("Cyberpunk")]
    Cyberpunk,
}

impl Preset {
    /// Looks a preset up by its display name (`"Ocean Blue"`) or slug
    /// (`ocean-blue`), ignoring case.
    pub fn find(name: &str) -> Option<Self> {
        let slug = name.trim().replace([' ', '_'], "-");
        slug.parse().ok()
    }

    /// Command-line name, e.g. `ocean-blue`.
    pub fn slug(self) -> &'static str { self.into() }

    /// The partial configuration this preset applies.
    pub fn config(self) -> ThemeConfig {
        match self {
            Self::MaterialDefault => preset(
                palette(
                    PaletteMode::Light,
                    ["#1976d2", "#dc004e", "#d32f2f", "#ed6c02", "#0288d1", "#2e7d32"],
                    ("#ffffff", "#f5f5f5"),
                    ("rgba(0, 0, 0, 0.87)", "rgba(0, 0, 0, 0.6)"),
                ),
                typography(r#""Roboto", "Helvetica", "Arial", sans-serif"#, [
                    ("6rem", 300, 1.167),
                    ("3.75rem", 300, 1.2),
                    ("3rem", 400, 1.167),
                    ("2.125rem", 400, 1.235),
                    ("1.5rem", 400, 1.334),
                    ("1.25rem", 500, 1.6),
                    ("1rem", 400, 1.5),
                    ("0.875rem", 400, 1.43),
                ]),
                (8, 4),
                shadow("#000000", 0.2, 4, 2),
            ),
            Self::OceanBlue => preset(
                palette(
                    PaletteMode::Light,
                    ["#006494", "#13293d", "#c62828", "#f57c00", "#0277bd", "#2e7d32"],
                    ("#f0f4f8", "#ffffff"),
                    ("#13293d", "rgba(19, 41, 61, 0.7)"),
                ),
                typography(r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#, [
                    ("5rem", 700, 1.2),
                    ("3.5rem", 700, 1.2),
                    ("2.75rem", 600, 1.2),
                    ("2rem", 600, 1.3),
                    ("1.5rem", 600, 1.4),
                    ("1.25rem", 600, 1.5),
                    ("1rem", 400, 1.6),
                    ("0.875rem", 400, 1.5),
                ]),
                (8, 8),
                shadow("#006494", 0.15, 8, 3),
            ),
            Self::ForestGreen => preset(
                palette(
                    PaletteMode::Light,
                    ["#2d6a4f", "#95d5b2", "#c62828", "#f57c00", "#0288d1", "#2e7d32"],
                    ("#f1faee", "#ffffff"),
                    ("#1b4332", "rgba(27, 67, 50, 0.7)"),
                ),
                typography(r#""Merriweather", "Georgia", serif"#, [
                    ("5.5rem", 300, 1.2),
                    ("4rem", 300, 1.25),
                    ("3rem", 400, 1.3),
                    ("2.25rem", 400, 1.35),
                    ("1.75rem", 400, 1.4),
                    ("1.375rem", 500, 1.5),
                    ("1rem", 400, 1.7),
                    ("0.9375rem", 400, 1.6),
                ]),
                (10, 12),
                shadow("#2d6a4f", 0.12, 12, 4),
            ),
            Self::SunsetOrange => preset(
                palette(
                    PaletteMode::Light,
                    ["#f77f00", "#d62828", "#c62828", "#f57c00", "#0288d1", "#2e7d32"],
                    ("#fcf6f5", "#ffffff"),
                    ("#003049", "rgba(0, 48, 73, 0.7)"),
                ),
                typography(r#""Poppins", "Roboto", "Arial", sans-serif"#, [
                    ("5.5rem", 800, 1.1),
                    ("4rem", 700, 1.15),
                    ("3rem", 700, 1.2),
                    ("2.25rem", 600, 1.25),
                    ("1.625rem", 600, 1.3),
                    ("1.375rem", 600, 1.4),
                    ("1rem", 400, 1.6),
                    ("0.875rem", 400, 1.5),
                ]),
                (8, 16),
                shadow("#f77f00", 0.25, 16, 4),
            ),
            Self::PurpleDream => preset(
                palette(
                    PaletteMode::Light,
                    ["#7209b7", "#f72585", "#c62828", "#f57c00", "#0288d1", "#2e7d32"],
                    ("#fdf0f8", "#ffffff"),
                    ("#3c096c", "rgba(60, 9, 108, 0.7)"),
                ),
                typography(r#""Quicksand", "Roboto", "Arial", sans-serif"#, [
                    ("5.5rem", 700, 1.15),
                    ("4rem", 600, 1.2),
                    ("3rem", 600, 1.25),
                    ("2.25rem", 500, 1.3),
                    ("1.625rem", 500, 1.35),
                    ("1.375rem", 500, 1.4),
                    ("1rem", 400, 1.6),
                    ("0.875rem", 400, 1.5),
                ]),
                (12, 20),
                shadow("#7209b7", 0.2, 20, 6),
            ),
            Self::Midnight => preset(
                palette(
                    PaletteMode::Dark,
                    ["#4dabf7", "#ffd43b", "#ff6b6b", "#ffa94d", "#74c0fc", "#51cf66"],
                    ("#0a0e27", "#1a1d3a"),
                    ("#e0e7ff", "rgba(224, 231, 255, 0.7)"),
                ),
                typography(r#""Montserrat", "Roboto", "Arial", sans-serif"#, [
                    ("5.5rem", 700, 1.1),
                    ("4rem", 600, 1.15),
                    ("3rem", 600, 1.2),
                    ("2.25rem", 500, 1.25),
                    ("1.625rem", 500, 1.3),
                    ("1.375rem", 500, 1.4),
                    ("1rem", 400, 1.6),
                    ("0.875rem", 400, 1.5),
                ]),
                (8, 6),
                shadow("#4dabf7", 0.3, 12, 4),
            ),
            Self::Cyberpunk => preset(
                palette(
                    PaletteMode::Dark,
                    ["#00ffff", "#ff00ff", "#ff3366", "#ffcc00", "#00ffff", "#00ff99"],
                    ("#0d1117", "#161b22"),
                    ("#f0f6fc", "rgba(240, 246, 252, 0.7)"),
                ),
                typography(r#""Rajdhani", "Roboto Mono", "Courier New", monospace"#, [
                    ("6rem", 700, 1.1),
                    ("4.5rem", 700, 1.1),
                    ("3.5rem", 600, 1.15),
                    ("2.5rem", 600, 1.2),
                    ("1.75rem", 600, 1.25),
                    ("1.5rem", 600, 1.3),
                    ("1rem", 500, 1.5),
                    ("0.9375rem", 500, 1.4),
                ]),
                (6, 2),
                shadow("#00ffff", 0.5, 20, 0),
            ),
        }
    }
}

/// Roles in `primary, secondary, error, warning, info, success` order.
fn palette(
    mode: PaletteMode,
    roles: [&str; 6],
    (background_default, background_paper): (&str, &str),
    (text_primary, text_secondary): (&str, &str),
) -> Palette {
    let [primary, secondary, error, warning, info, success] =
        roles.map(|color| Some(Lenient::Known(ColorRole::new(color))));
    Palette {
        mode: Some(Lenient::Known(mode)),
        primary,
        secondary,
        error,
        warning,
        info,
        success,
        background: Some(BackgroundColors::new(background_default, background_paper).into()),
        text: Some(TextColors::new(text_primary, text_secondary).into()),
        extra: Map::new(),
    }
}

/// Styles in `h1..h6, body1, body2` order as `(size, weight, line height)`.
fn typography(font_family: &str, styles: [(&str, u16, f64); 8]) -> Typography {
    let [h1, h2, h3, h4, h5, h6, body1, body2] = styles.map(|(size, weight, line_height)| {
        Some(Lenient::Known(TextStyle::new(size, weight, line_height)))
    });
    Typography {
        font_family: Some(font_family.to_owned().into()),
        h1,
        h2,
        h3,
        h4,
        h5,
        h6,
        body1,
        body2,
        ..Default::default()
    }
}

fn shadow(color: &str, opacity: f64, blur: u32, offset_y: i32) -> CustomShadow {
    CustomShadow {
        color:    Some(color.to_owned().into()),
        opacity:  Some(Lenient::Known(opacity)),
        blur:     Some(Lenient::Known(blur)),
        spread:   Some(Lenient::Known(0)),
        offset_x: Some(Lenient::Known(0)),
        offset_y: Some(Lenient::Known(offset_y)),
        extra:    Map::new(),
    }
}

fn preset(
    palette: Palette,
    typography: Typography,
    (spacing, border_radius): (u32, u32),
    custom_shadow: CustomShadow,
) -> ThemeConfig {
    ThemeConfig {
        palette: Some(palette.into()),
        typography: Some(typography.into()),
        spacing: Some(Lenient::Known(spacing)),
        shape: Some(Shape::rounded(border_radius).into()),
        custom_shadow: Some(custom_shadow.into()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::render::RenderTheme;

    #[test]
    fn names_resolve_both_ways() {
        assert_eq!(Preset::find("Ocean Blue"), Some(Preset::OceanBlue));
        assert_eq!(Preset::find("ocean-blue"), Some(Preset::OceanBlue));
        assert_eq!(Preset::find("PURPLE_DREAM"), Some(Preset::PurpleDream));
        assert_eq!(Preset::find("solarized"), None);
        for preset in Preset::iter() {
            assert_eq!(Preset::find(&preset.to_string()), Some(preset));
            assert_eq!(Preset::find(preset.slug()), Some(preset));
        }
        assert_eq!(Preset::iter().count(), 7);
    }

    #[test]
    fn material_default_matches_builtin_sections() {
        let builtin = ThemeConfig::builtin();
        let preset = Preset::MaterialDefault.config();
        assert_eq!(preset.palette, builtin.palette);
        assert_eq!(preset.custom_shadow, builtin.custom_shadow);
        assert_eq!(builtin.merged(&preset), builtin);
    }

    #[test]
    fn applying_a_preset_keeps_unset_keys() {
        let base: ThemeConfig = serde_json::from_value(serde_json::json!({
            "typography": {
                "fontSize": 15,
                "button": { "textTransform": "none" },
                "h1": { "fontSize": "1rem" }
            },
            "direction": "rtl"
        }))
        .unwrap();

        let merged = base.merged(&Preset::Cyberpunk.config());
        let typography = merged.typography().unwrap();
        assert_eq!(typography.font_size, Some(Lenient::Known(15)));
        assert!(typography.button().is_some());
        assert_eq!(merged.extra["direction"], "rtl");
        assert_eq!(merged.spacing(), Some(6));

        let theme = RenderTheme::derive(&merged);
        assert_eq!(theme.palette.mode, PaletteMode::Dark);
        assert_eq!(theme.typography.h1.font_size, "6rem");
        assert_eq!(theme.shadow(1), "0px 0px 20px 0px #00ffff80");
        assert_eq!(theme.shape.border_radius, 2);
    }
}
