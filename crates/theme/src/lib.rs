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

//! Theme model for themesmith.
//!
//! [`ThemeConfig`] is the editable, fully optional configuration that gets
//! persisted and exported. [`RenderTheme`] is the resolved form a renderer
//! consumes. [`ThemeConfig::merged`] implements the update rule shared by
//! every editor control. [`presets`] holds the named starting points.

mod config;
mod lenient;
mod palette;
pub mod presets;
mod render;
mod shadow;
mod typography;

pub use config::{Shape, ThemeConfig};
pub use lenient::Lenient;
pub use palette::{BackgroundColors, ColorRole, Palette, PaletteMode, TextColors};
pub use render::{
    RenderTheme, ResolvedBackground, ResolvedButtonStyle, ResolvedPalette, ResolvedShape,
    ResolvedText, ResolvedTextStyle, ResolvedTypography,
};
pub use shadow::{
    CustomShadow, DEFAULT_SHADOW_BLUR, DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_OFFSET_X,
    DEFAULT_SHADOW_OFFSET_Y, DEFAULT_SHADOW_OPACITY, DEFAULT_SHADOW_SPREAD, ELEVATION_LEVELS,
    FALLBACK_SHADOWS, alpha_hex, elevation_ramp,
};
pub use typography::{ButtonStyle, TextStyle, TextTransform, Typography, Variant};
