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

//! Version strings for `themesmith --version`, filled in at compile time.

use shadow_rs::{formatcp, shadow};

shadow!(build);

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Set by the release pipeline when it builds distributable binaries.
const RELEASE_BUILD: bool = option_env!("THEMESMITH_RELEASE").is_some();

const WORKTREE: &str = if build::GIT_CLEAN { "" } else { "-dirty" };

/// `0.1.0` for release builds. Local builds read `0.1.0-dev`, plus
/// `+{commit}` and a `-dirty` marker when git metadata was available.
#[allow(clippy::const_is_empty)]
pub const FULL_VERSION: &str = match (RELEASE_BUILD, build::SHORT_COMMIT.is_empty()) {
    (true, _) => build::PKG_VERSION,
    (false, true) => formatcp!("{}-dev", build::PKG_VERSION),
    (false, false) => formatcp!("{}-dev+{}{}", build::PKG_VERSION, build::SHORT_COMMIT, WORKTREE),
};

/// `themesmith --version` output with toolchain and build time.
pub const LONG_VERSION: &str = formatcp!(
    "{}\nbuilt {} with {}",
    FULL_VERSION,
    build::BUILD_TIME,
    build::RUST_VERSION
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings_extend_package_version() {
        assert!(FULL_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.starts_with(FULL_VERSION));
        assert!(LONG_VERSION.contains("\nbuilt "));
        if !RELEASE_BUILD {
            assert!(FULL_VERSION.contains("-dev"));
        }
    }
}
