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

use serde_json::Value;
use snafu::{ResultExt, ensure};
use themesmith_theme::ThemeConfig;

use crate::err::{EncodeSnafu, NotAnObjectSnafu, ParseError, Result, SyntaxSnafu};

/// Default file name for a JSON export.
pub const JSON_FILE_NAME: &str = "theme-config.json";

/// Pretty-prints `config` with two-space indentation. Every set field is
/// written, including ones equal to the built-in values.
pub fn to_json(config: &ThemeConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context(EncodeSnafu)
}

/// Parses a configuration from JSON text.
///
/// The text must be a JSON object. Nothing below the top level is
/// validated: missing fields stay unset, while unknown keys and values the
/// editor cannot interpret are carried through verbatim.
pub fn from_json(text: &str) -> Result<ThemeConfig, ParseError> {
    let value: Value = serde_json::from_str(text).context(SyntaxSnafu)?;
    ensure!(
        value.is_object(),
        NotAnObjectSnafu {
            found: json_kind(&value),
        }
    );
    let config: ThemeConfig = serde_json::from_value(value).context(SyntaxSnafu)?;
    if !config.extra.is_empty() {
        tracing::debug!(
            keys = ?config.extra.keys().collect::<Vec<_>>(),
            "carrying unrecognized theme keys through"
        );
    }
    Ok(config)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
