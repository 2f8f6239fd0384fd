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

//! Custom box shadow and the elevation ramp built from it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient::{Lenient, known, merge_extra, pick};

/// Number of elevation levels the host framework expects, `0..=24`.
pub const ELEVATION_LEVELS: usize = 25;

pub const DEFAULT_SHADOW_COLOR: &str = "#000000";
pub const DEFAULT_SHADOW_OPACITY: f64 = 0.2;
pub const DEFAULT_SHADOW_BLUR: u32 = 4;
pub const DEFAULT_SHADOW_SPREAD: i32 = 0;
pub const DEFAULT_SHADOW_OFFSET_X: i32 = 0;
pub const DEFAULT_SHADOW_OFFSET_Y: i32 = 2;

/// Shadow parameters edited by the user. Every field falls back to the
/// `DEFAULT_SHADOW_*` constants when unset or not decodable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomShadow {
    /// Hex color without alpha, e.g. `#000000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color:    Option<Lenient<String>>,
    /// 0.0..=1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity:  Option<Lenient<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur:     Option<Lenient<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread:   Option<Lenient<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<Lenient<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<Lenient<i32>>,
    #[serde(flatten)]
    pub extra:    Map<String, Value>,
}

impl CustomShadow {
    /// Shallow merge, patch keys win.
    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            color:    pick(&patch.color, &self.color),
            opacity:  pick(&patch.opacity, &self.opacity),
            blur:     pick(&patch.blur, &self.blur),
            spread:   pick(&patch.spread, &self.spread),
            offset_x: pick(&patch.offset_x, &self.offset_x),
            offset_y: pick(&patch.offset_y, &self.offset_y),
            extra:    merge_extra(&self.extra, &patch.extra),
        }
    }

    /// Formats the shadow as a CSS `box-shadow` value:
    /// `"{x}px {y}px {blur}px {spread}px {color}{alpha}"`.
    pub fn to_css(&self) -> String {
        let color = known(&self.color).map_or(DEFAULT_SHADOW_COLOR, String::as_str);
        let opacity = known(&self.opacity).copied().unwrap_or(DEFAULT_SHADOW_OPACITY);
        format!(
            "{}px {}px {}px {}px {color}{}",
            known(&self.offset_x).copied().unwrap_or(DEFAULT_SHADOW_OFFSET_X),
            known(&self.offset_y).copied().unwrap_or(DEFAULT_SHADOW_OFFSET_Y),
            known(&self.blur).copied().unwrap_or(DEFAULT_SHADOW_BLUR),
            known(&self.spread).copied().unwrap_or(DEFAULT_SHADOW_SPREAD),
            alpha_hex(opacity),
        )
    }
}

/// Scales a 0..=1 opacity to a two digit lowercase hex alpha channel.
/// Out of range values are clamped, NaN maps to `00`.
pub fn alpha_hex(opacity: f64) -> String {
    let scaled = (opacity.clamp(0.0, 1.0) * 255.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = scaled as u8;
    format!("{byte:02x}")
}

/// Builds the elevation ramp: `none` at level 0 and the custom shadow at
/// every other level, or the framework's stock ramp when `custom` is `None`.
pub fn elevation_ramp(custom: Option<&CustomShadow>) -> Vec<String> {
    match custom {
        Some(shadow) => {
            let css = shadow.to_css();
            std::iter::once("none".to_owned())
                .chain(std::iter::repeat_n(css, ELEVATION_LEVELS - 1))
                .collect()
        }
        None => FALLBACK_SHADOWS.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Stock material elevation ramp used when no custom shadow is configured.
pub const FALLBACK_SHADOWS: [&str; ELEVATION_LEVELS] = [
    "none",
    "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)",
    "0px 3px 1px -2px rgba(0,0,0,0.2),0px 2px 2px 0px rgba(0,0,0,0.14),0px 1px 5px 0px rgba(0,0,0,0.12)",
    "0px 3px 3px -2px rgba(0,0,0,0.2),0px 3px 4px 0px rgba(0,0,0,0.14),0px 1px 8px 0px rgba(0,0,0,0.12)",
    "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)",
    "0px 3px 5px -1px rgba(0,0,0,0.2),0px 5px 8px 0px rgba(0,0,0,0.14),0px 1px 14px 0px rgba(0,0,0,0.12)",
    "0px 3px 5px -1px rgba(0,0,0,0.2),0px 6px 10px 0px rgba(0,0,0,0.14),0px 1px 18px 0px rgba(0,0,0,0.12)",
    "0px 4px 5px -2px rgba(0,0,0,0.2),0px 7px 10px 1px rgba(0,0,0,0.14),0px 2px 16px 1px rgba(0,0,0,0.12)",
    "0px 5px 5px -3px rgba(0,0,0,0.2),0px 8px 10px 1px rgba(0,0,0,0.14),0px 3px 14px 2px rgba(0,0,0,0.12)",
    "0px 5px 6px -3px rgba(0,0,0,0.2),0px 9px 12px 1px rgba(0,0,0,0.14),0px 3px 16px 2px rgba(0,0,0,0.12)",
    "0px 6px 6px -3px rgba(0,0,0,0.2),0px 10px 14px 1px rgba(0,0,0,0.14),0px 4px 18px 3px rgba(0,0,0,0.12)",
    "0px 6px 7px -4px rgba(0,0,0,0.2),0px 11px 15px 1px rgba(0,0,0,0.14),0px 4px 20px 3px rgba(0,0,0,0.12)",
    "0px 7px 8px -4px rgba(0,0,0,0.2),0px 12px 17px 2px rgba(0,0,0,0.14),0px 5px 22px 4px rgba(0,0,0,0.12)",
    "0px 7px 8px -4px rgba(0,0,0,0.2),0px 13px 19px 2px rgba(0,0,0,0.14),0px 5px 24px 4px rgba(0,0,0,0.12)",
    "0px 7px 9px -4px rgba(0,0,0,0.2),0px 14px 21px 2px rgba(0,0,0,0.14),0px 5px 26px 4px rgba(0,0,0,0.12)",
    "0px 8px 9px -5px rgba(0,0,0,0.2),0px 15px 22px 2px rgba(0,0,0,0.14),0px 6px 28px 5px rgba(0,0,0,0.12)",
    "0px 8px 10px -5px rgba(0,0,0,0.2),0px 16px 24px 2px rgba(0,0,0,0.14),0px 6px 30px 5px rgba(0,0,0,0.12)",
    "0px 8px 11px -5px rgba(0,0,0,0.2),0px 17px 26px 2px rgba(0,0,0,0.14),0px 6px 32px 5px rgba(0,0,0,0.12)",
    "0px 9px 11px -5px rgba(0,0,0,0.2),0px 18px 28px 2px rgba(0,0,0,0.14),0px 7px 34px 6px rgba(0,0,0,0.12)",
    "0px 9px 12px -6px rgba(0,0,0,0.2),0px 19px 29px 2px rgba(0,0,0,0.14),0px 7px 36px 6px rgba(0,0,0,0.12)",
    "0px 10px 13px -6px rgba(0,0,0,0.2),0px 20px 31px 3px rgba(0,0,0,0.14),0px 8px 38px 7px rgba(0,0,0,0.12)",
    "0px 10px 13px -6px rgba(0,0,0,0.2),0px 21px 33px 3px rgba(0,0,0,0.14),0px 8px 40px 7px rgba(0,0,0,0.12)",
    "0px 10px 14px -6px rgba(0,0,0,0.2),0px 22px 35px 3px rgba(0,0,0,0.14),0px 8px 42px 7px rgba(0,0,0,0.12)",
    "0px 11px 14px -7px rgba(0,0,0,0.2),0px 23px 36px 3px rgba(0,0,0,0.14),0px 9px 44px 8px rgba(0,0,0,0.12)",
    "0px 11px 15px -7px rgba(0,0,0,0.2),0px 24px 38px 3px rgba(0,0,0,0.14),0px 9px 46px 8px rgba(0,0,0,0.12)",
];
