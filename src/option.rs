// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use ustr::ustr;

use crate::{
    error::{UnwrapError, VariantError},
    value::VariantValue,
};

pub const SOME: &str = "Some";
pub const NONE: &str = "None";

pub(crate) const OPTION_TAGS: &[&str] = &[SOME, NONE];

impl<P> VariantValue<P> {
    pub fn some(payload: P) -> Self {
        Self::tuple_variant(ustr(SOME), payload)
    }

    /// The bare `None` tag.
    pub fn none() -> Self {
        Self::unit_variant(ustr(NONE))
    }

    pub fn is_some(&self) -> bool {
        self.is_variant(SOME)
    }

    pub fn is_none(&self) -> bool {
        self.is_variant(NONE)
    }

    pub fn try_unwrap(self) -> Result<P, UnwrapError> {
        self.take_payload("unwrap", SOME)
    }

    /// Returns the payload of a `Some`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a `Some` carrying a payload.
    #[track_caller]
    pub fn unwrap(self) -> P {
        match self.try_unwrap() {
            Ok(payload) => payload,
            Err(error) => error.abort(),
        }
    }

    /// Returns the payload of a `Some`, or `default` otherwise.
    pub fn unwrap_or(self, default: P) -> P {
        self.try_unwrap().unwrap_or(default)
    }

    /// Convert to a native option, failing on tags other than `Some` and `None`.
    pub fn into_option(self) -> Result<Option<P>, VariantError> {
        match self.tag.as_str() {
            SOME => self
                .payload
                .map(Some)
                .ok_or(VariantError::MissingPayload(self.tag)),
            NONE => match self.payload {
                None => Ok(None),
                Some(_) => Err(VariantError::UnexpectedPayload(self.tag)),
            },
            _ => Err(VariantError::UnexpectedTag {
                expected: OPTION_TAGS,
                got: self.tag,
            }),
        }
    }
}

impl<P> From<Option<P>> for VariantValue<P> {
    fn from(option: Option<P>) -> Self {
        match option {
            Some(payload) => Self::some(payload),
            None => Self::none(),
        }
    }
}
