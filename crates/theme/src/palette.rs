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

//! Palette section of a theme configuration.
//!
//! Colors are opaque strings (`#1976d2`, `rgba(0, 0, 0, 0.87)`, ...). Nothing
//! here parses or validates them; they are handed to the host framework as
//! written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient::{Lenient, known, merge_extra, pick};

/// Light or dark palette mode.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaletteMode {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

/// A semantic color role. Only the main shade is edited; `light`, `dark`
/// and `contrastText` ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main:  Option<Lenient<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorRole {
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main:  Some(Lenient::Known(main.into())),
            extra: Map::new(),
        }
    }

    pub fn main(&self) -> Option<&str> { known(&self.main).map(String::as_str) }
}

/// Surface colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Lenient<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper:   Option<Lenient<String>>,
    #[serde(flatten)]
    pub extra:   Map<String, Value>,
}

impl BackgroundColors {
    pub fn new(default: impl Into<String>, paper: impl Into<String>) -> Self {
        Self {
            default: Some(Lenient::Known(default.into())),
            paper:   Some(Lenient::Known(paper.into())),
            extra:   Map::new(),
        }
    }

    /// Surface pair applied when the user switches to `mode`.
    pub fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self::new("#ffffff", "#f5f5f5"),
            PaletteMode::Dark => Self::new("#121212", "#1e1e1e"),
        }
    }
}

/// Foreground text colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary:   Option<Lenient<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Lenient<String>>,
    #[serde(flatten)]
    pub extra:     Map<String, Value>,
}

impl TextColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary:   Some(Lenient::Known(primary.into())),
            secondary: Some(Lenient::Known(secondary.into())),
            extra:     Map::new(),
        }
    }

    /// Text pair applied when the user switches to `mode`.
    pub fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self::new("rgba(0, 0, 0, 0.87)", "rgba(0, 0, 0, 0.6)"),
            PaletteMode::Dark => {
                Self::new("rgba(255, 255, 255, 0.87)", "rgba(255, 255, 255, 0.6)")
            }
        }
    }
}

/// The `palette` section.
///
/// Merging two palettes is shallow: a role present in the patch replaces the
/// whole role of the base, roles absent from the patch are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode:       Option<Lenient<PaletteMode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary:    Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary:  Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:      Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning:    Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info:       Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success:    Option<Lenient<ColorRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Lenient<BackgroundColors>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text:       Option<Lenient<TextColors>>,
    /// `divider`, `action`, `grey` and other palette keys.
    #[serde(flatten)]
    pub extra:      Map<String, Value>,
}

impl Palette {
    /// Shallow merge: every key set in `patch` wins.
    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            mode:       pick(&patch.mode, &self.mode),
            primary:    pick(&patch.primary, &self.primary),
            secondary:  pick(&patch.secondary, &self.secondary),
            error:      pick(&patch.error, &self.error),
            warning:    pick(&patch.warning, &self.warning),
            info:       pick(&patch.info, &self.info),
            success:    pick(&patch.success, &self.success),
            background: pick(&patch.background, &self.background),
            text:       pick(&patch.text, &self.text),
            extra:      merge_extra(&self.extra, &patch.extra),
        }
    }

    /// The palette mode, if set to a recognised value.
    pub fn mode(&self) -> Option<PaletteMode> { known(&self.mode).copied() }

    pub fn background(&self) -> Option<&BackgroundColors> { known(&self.background) }

    pub fn text(&self) -> Option<&TextColors> { known(&self.text) }
}
