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

use snafu::Snafu;

pub type Result<T, E = ExportError> = std::result::Result<T, E>;

/// Failure to turn a configuration into text.
#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum ExportError {
    #[snafu(display("Failed to encode theme configuration"))]
    Encode {
        source: serde_json::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
}

/// Failure to turn text into a configuration.
#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum ParseError {
    #[snafu(display("Invalid JSON: {source}"))]
    Syntax {
        source: serde_json::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Theme configuration must be a JSON object, found {found}"))]
    NotAnObject {
        found: &'static str,
        #[snafu(implicit)]
        loc:   snafu::Location,
    },
}
