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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient::{Lenient, known, merge_extra, pick};

/// One named text style (`h1`, `body2`, ...). `letterSpacing` and other CSS
/// properties ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// CSS length with unit, e.g. `"1.25rem"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size:   Option<Lenient<String>>,
    /// 100..=900
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Lenient<u16>>,
    /// Unitless multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Lenient<f64>>,
    #[serde(flatten)]
    pub extra:       Map<String, Value>,
}

impl TextStyle {
    pub fn new(font_size: impl Into<String>, font_weight: u16, line_height: f64) -> Self {
        Self {
            font_size:   Some(Lenient::Known(font_size.into())),
            font_weight: Some(Lenient::Known(font_weight)),
            line_height: Some(Lenient::Known(line_height)),
            extra:       Map::new(),
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextTransform {
    #[display("none")]
    None,
    #[display("capitalize")]
    Capitalize,
    #[display("uppercase")]
    Uppercase,
    #[display("lowercase")]
    Lowercase,
}

/// Button label style. Buttons carry a text transform instead of a line
/// height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size:      Option<Lenient<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight:    Option<Lenient<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<Lenient<TextTransform>>,
    #[serde(flatten)]
    pub extra:          Map<String, Value>,
}

/// Names of the text styles a typography section can carry.
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
)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    #[display("h1")]
    H1,
    #[display("h2")]
    H2,
    #[display("h3")]
    H3,
    #[display("h4")]
    H4,
    #[display("h5")]
    H5,
    #[display("h6")]
    H6,
    #[display("body1")]
    Body1,
    #[display("body2")]
    Body2,
}

/// The `typography` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Lenient<String>>,
    /// Base font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size:   Option<Lenient<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h4:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h5:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h6:          Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body1:       Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body2:       Option<Lenient<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button:      Option<Lenient<ButtonStyle>>,
    /// `subtitle1`, `caption`, `htmlFontSize` and friends.
    #[serde(flatten)]
    pub extra:       Map<String, Value>,
}

impl Typography {
    pub fn style(&self, variant: Variant) -> Option<&TextStyle> {
        let field = match variant {
            Variant::H1 => &self.h1,
            Variant::H2 => &self.h2,
            Variant::H3 => &self.h3,
            Variant::H4 => &self.h4,
            Variant::H5 => &self.h5,
            Variant::H6 => &self.h6,
            Variant::Body1 => &self.body1,
            Variant::Body2 => &self.body2,
        };
        known(field)
    }

    pub fn style_mut(&mut self, variant: Variant) -> &mut Option<Lenient<TextStyle>> {
        match variant {
            Variant::H1 => &mut self.h1,
            Variant::H2 => &mut self.h2,
            Variant::H3 => &mut self.h3,
            Variant::H4 => &mut self.h4,
            Variant::H5 => &mut self.h5,
            Variant::H6 => &mut self.h6,
            Variant::Body1 => &mut self.body1,
            Variant::Body2 => &mut self.body2,
        }
    }

    pub fn button(&self) -> Option<&ButtonStyle> { known(&self.button) }

    /// Shallow merge. A text style present in `patch` replaces the base
    /// style as a whole.
    #[must_use]
    pub fn merged(&self, patch: &Self) -> Self {
        Self {
            font_family: pick(&patch.font_family, &self.font_family),
            font_size:   pick(&patch.font_size, &self.font_size),
            h1:          pick(&patch.h1, &self.h1),
            h2:          pick(&patch.h2, &self.h2),
            h3:          pick(&patch.h3, &self.h3),
            h4:          pick(&patch.h4, &self.h4),
            h5:          pick(&patch.h5, &self.h5),
            h6:          pick(&patch.h6, &self.h6),
            body1:       pick(&patch.body1, &self.body1),
            body2:       pick(&patch.body2, &self.body2),
            button:      pick(&patch.button, &self.button),
            extra:       merge_extra(&self.extra, &patch.extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn style_accessors_cover_every_variant() {
        let mut typography = Typography::default();
        for (i, variant) in Variant::iter().enumerate() {
            let weight = 100 * (u16::try_from(i).unwrap() + 1);
            *typography.style_mut(variant) = Some(TextStyle::new("1rem", weight, 1.5).into());
        }
        for (i, variant) in Variant::iter().enumerate() {
            let style = typography.style(variant).unwrap();
            let weight = 100 * (u16::try_from(i).unwrap() + 1);
            assert_eq!(style.font_weight, Some(Lenient::Known(weight)));
        }
    }

    #[test]
    fn variant_names_match_json_keys() {
        let typography = Typography {
            body2: Some(TextStyle::new("0.875rem", 400, 1.43).into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&typography).unwrap();
        let key = Variant::Body2.to_string();
        assert_eq!(json[key.as_str()]["fontSize"], "0.875rem");
        assert_eq!("h4".parse::<Variant>().unwrap(), Variant::H4);
    }

    #[test]
    fn button_style_uses_camel_case() {
        let button = ButtonStyle {
            text_transform: Some(TextTransform::Uppercase.into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&button).unwrap();
        assert_eq!(json, r#"{"textTransform":"uppercase"}"#);
    }

    #[test]
    fn framework_values_outside_the_model_are_kept() {
        let value = json!({
            "h1": { "fontSize": "6rem", "fontWeight": "bold", "letterSpacing": "-0.01562em" },
            "h2": { "fontSize": 48, "lineHeight": "56px" },
            "subtitle1": { "fontSize": "1rem" },
            "button": { "textTransform": "full-width" }
        });
        let typography: Typography = serde_json::from_value(value.clone()).unwrap();

        let h1 = typography.style(Variant::H1).unwrap();
        assert_eq!(h1.font_size, Some("6rem".to_owned().into()));
        assert_eq!(h1.font_weight, Some(Lenient::Raw(json!("bold"))));
        assert_eq!(h1.extra["letterSpacing"], "-0.01562em");
        assert!(typography.extra.contains_key("subtitle1"));
        assert_eq!(serde_json::to_value(&typography).unwrap(), value);
    }
}
