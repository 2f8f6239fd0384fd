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

//! Field values that decode when they can and are kept verbatim when they
//! cannot.
//!
//! The host framework accepts more than the editor models (`fontWeight:
//! "bold"`, `borderRadius: 4.5`, `fontSize: 16`), so every configuration
//! field is a [`Lenient`]. Unmodelled keys go to the `extra` map of the
//! enclosing section.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded value, or the raw JSON it was written as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Known(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub const fn raw(&self) -> Option<&Value> {
        match self {
            Self::Known(_) => None,
            Self::Raw(value) => Some(value),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self { Self::Known(value) }
}

/// The decoded value of an optional field, if it has one.
pub(crate) fn known<T>(field: &Option<Lenient<T>>) -> Option<&T> {
    field.as_ref().and_then(Lenient::known)
}

/// Returns the patch value when present, otherwise the base value.
pub(crate) fn pick<T: Clone>(patch: &Option<T>, base: &Option<T>) -> Option<T> {
    patch.as_ref().or(base.as_ref()).cloned()
}

/// Merges two sections with `merge` when both decoded. Otherwise the patch
/// value wins as written.
pub(crate) fn merge_section<T: Clone>(
    base: &Option<Lenient<T>>,
    patch: &Option<Lenient<T>>,
    merge: impl FnOnce(&T, &T) -> T,
) -> Option<Lenient<T>> {
    match (base, patch) {
        (Some(Lenient::Known(base)), Some(Lenient::Known(patch))) => {
            Some(Lenient::Known(merge(base, patch)))
        }
        (_, Some(patch)) => Some(patch.clone()),
        (base, None) => base.clone(),
    }
}

/// Key-wise union of two pass-through maps, patch keys win.
pub(crate) fn merge_extra(
    base: &Map<String, Value>,
    patch: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
