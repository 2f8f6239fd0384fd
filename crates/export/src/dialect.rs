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

/// Source syntax of an exported theme module.
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
pub enum Dialect {
    /// TypeScript, with a `ThemeOptions` annotation.
    #[default]
    #[display("ts")]
    #[strum(serialize = "ts", serialize = "typed", serialize = "typescript")]
    Typed,
    /// Plain JavaScript.
    #[display("js")]
    #[strum(serialize = "js", serialize = "untyped", serialize = "javascript")]
    Untyped,
}

impl Dialect {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Typed => "ts",
            Self::Untyped => "js",
        }
    }

    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Typed => "theme.ts",
            Self::Untyped => "theme.js",
        }
    }

    pub const fn is_typed(self) -> bool { matches!(self, Self::Typed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        for (name, dialect) in [
            ("ts", Dialect::Typed),
            ("typed", Dialect::Typed),
            ("typescript", Dialect::Typed),
            ("js", Dialect::Untyped),
            ("untyped", Dialect::Untyped),
        ] {
            assert_eq!(name.parse::<Dialect>().unwrap(), dialect);
        }
        assert!("coffee".parse::<Dialect>().is_err());
    }

    #[test]
    fn file_names_follow_extension() {
        assert_eq!(Dialect::Typed.default_file_name(), "theme.ts");
        assert_eq!(Dialect::Untyped.default_file_name(), "theme.js");
        assert_eq!(Dialect::Untyped.to_string(), Dialect::Untyped.extension());
    }
}
