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

pub const OK: &str = "Ok";
pub const ERR: &str = "Err";

pub(crate) const RESULT_TAGS: &[&str] = &[OK, ERR];

impl<P> VariantValue<P> {
    pub fn ok(payload: P) -> Self {
        Self::tuple_variant(ustr(OK), payload)
    }

    pub fn err(payload: P) -> Self {
        Self::tuple_variant(ustr(ERR), payload)
    }

    pub fn is_ok(&self) -> bool {
        self.is_variant(OK)
    }

    pub fn is_err(&self) -> bool {
        self.is_variant(ERR)
    }

    pub fn try_unwrap_ok(self) -> Result<P, UnwrapError> {
        self.take_payload("unwrap_ok", OK)
    }

    pub fn try_unwrap_err(self) -> Result<P, UnwrapError> {
        self.take_payload("unwrap_err", ERR)
    }

    /// Returns the payload of an `Ok`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an `Ok` carrying a payload.
    #[track_caller]
    pub fn unwrap_ok(self) -> P {
        match self.try_unwrap_ok() {
            Ok(payload) => payload,
            Err(error) => error.abort(),
        }
    }

    /// Returns the payload of an `Err`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an `Err` carrying a payload.
    #[track_caller]
    pub fn unwrap_err(self) -> P {
        match self.try_unwrap_err() {
            Ok(payload) => payload,
            Err(error) => error.abort(),
        }
    }

    /// Returns the payload of an `Ok`, or `default` otherwise.
    ///
    /// Unlike [`Result::unwrap_or_else`], `default` is an already computed value and
    /// not a closure. A callable `P` is returned as is, never invoked.
    pub fn unwrap_or_else(self, default: P) -> P {
        self.try_unwrap_ok().unwrap_or(default)
    }

    /// Convert to a native result, failing on tags other than `Ok` and `Err`.
    pub fn into_result(self) -> Result<Result<P, P>, VariantError> {
        let tag = self.tag;
        let payload = self.payload.ok_or(VariantError::MissingPayload(tag));
        match tag.as_str() {
            OK => payload.map(Ok),
            ERR => payload.map(Err),
            _ => Err(VariantError::UnexpectedTag {
                expected: RESULT_TAGS,
                got: tag,
            }),
        }
    }
}

impl<P> From<Result<P, P>> for VariantValue<P> {
    fn from(result: Result<P, P>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(payload) => Self::err(payload),
        }
    }
}
