// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt::{self, Display};

use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use smallvec::SmallVec;
use ustr::Ustr;

/// Error when decoding a variant value or converting it to a native type
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum VariantError {
    /// The encoding is neither a string nor an object, holds the kind of JSON value found
    NotAVariant(&'static str),
    /// An object without any key
    NoTag,
    /// An object with more than one key, holds the keys in document order
    MultipleTags(SmallVec<[Ustr; 2]>),
    UnexpectedTag {
        expected: &'static [&'static str],
        got: Ustr,
    },
    MissingPayload(Ustr),
    UnexpectedPayload(Ustr),
    InvalidPayload {
        tag: Ustr,
        reason: String,
    },
}

impl Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use VariantError::*;
        match self {
            NotAVariant(kind) => write!(f, "Expected a string or an object, found {kind}"),
            NoTag => write!(f, "Variant object has no tag"),
            MultipleTags(tags) => {
                write!(f, "Variant object has multiple tags: {}", tags.iter().join(", "))
            }
            UnexpectedTag { expected, got } => write!(
                f,
                "Unexpected variant tag {got}, expected one of: {}",
                expected.iter().join(", ")
            ),
            MissingPayload(tag) => write!(f, "Variant {tag} requires a payload"),
            UnexpectedPayload(tag) => write!(f, "Variant {tag} does not take a payload"),
            InvalidPayload { tag, reason } => {
                write!(f, "Invalid payload for variant {tag}: {reason}")
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// Misuse of an unwrap-family operation, for example unwrapping a `None`.
///
/// The panicking operations report this through `abort`; their `try_` counterparts
/// return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnwrapError {
    WrongVariant {
        operation: &'static str,
        expected: &'static str,
        found: Ustr,
    },
    MissingPayload {
        operation: &'static str,
        tag: Ustr,
    },
}

impl UnwrapError {
    pub fn operation(&self) -> &'static str {
        use UnwrapError::*;
        match self {
            WrongVariant { operation, .. } | MissingPayload { operation, .. } => operation,
        }
    }

    /// Panic with this diagnostic.
    #[track_caller]
    pub fn abort(self) -> ! {
        panic!("{self}")
    }
}

impl Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use UnwrapError::*;
        match self {
            WrongVariant {
                operation, found, ..
            } => write!(f, "called `{operation}` on a `{found}` value"),
            MissingPayload { operation, tag } => {
                write!(f, "called `{operation}` on a `{tag}` value without payload")
            }
        }
    }
}

impl std::error::Error for UnwrapError {}
