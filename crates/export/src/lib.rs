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

//! Stateless conversions between a [`ThemeConfig`] and text.
//!
//! Nothing here touches storage, the clipboard or the file system; callers
//! decide where the text goes.

mod dialect;
mod err;
mod json;
mod source;

pub use dialect::Dialect;
pub use err::{ExportError, ParseError, Result};
pub use json::{JSON_FILE_NAME, from_json, to_json};
pub use source::{to_source_code, usage_snippet};
use themesmith_theme::ThemeConfig;

/// Output kind of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ExportFormat {
    #[display("json")]
    Json,
    #[display("{_0}")]
    Source(Dialect),
}

impl ExportFormat {
    /// Renders `config` in this format.
    pub fn render(self, config: &ThemeConfig) -> Result<String> {
        match self {
            Self::Json => to_json(config),
            Self::Source(dialect) => to_source_code(config, dialect),
        }
    }

    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => JSON_FILE_NAME,
            Self::Source(dialect) => dialect.default_file_name(),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            return Ok(Self::Json);
        }
        s.parse().map(Self::Source)
    }
}
