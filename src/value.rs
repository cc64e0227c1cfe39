// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt;

use ustr::{ustr, Ustr};

use crate::error::UnwrapError;

/// A variant value: a tag naming the active alternative, and at most one payload.
///
/// This is the in-memory form of the externally tagged encoding, where a variant is
/// either a single-key mapping (`{"Some": 1}`) or a bare tag for unit variants (`"None"`).
/// The tag is always present, so a value cannot have zero or several tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantValue<P = serde_json::Value> {
    pub tag: Ustr,
    pub payload: Option<P>,
}

impl<P> VariantValue<P> {
    /// A variant without payload, encoded as a bare tag.
    pub fn unit_variant(tag: Ustr) -> Self {
        Self { tag, payload: None }
    }

    /// A variant carrying a single payload.
    pub fn tuple_variant(tag: Ustr, payload: P) -> Self {
        Self {
            tag,
            payload: Some(payload),
        }
    }

    /// Rebuild a value from the parts returned by `into_parts`.
    pub fn from_parts(tag: &str, payload: Option<P>) -> Self {
        Self {
            tag: ustr(tag),
            payload,
        }
    }

    /// The active tag, whichever form the value has.
    pub fn variant_of(&self) -> Ustr {
        self.tag
    }

    /// The payload, or `None` for a unit variant.
    pub fn payload_of(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    pub fn into_parts(self) -> (Ustr, Option<P>) {
        (self.tag, self.payload)
    }

    pub fn is_unit(&self) -> bool {
        self.payload.is_none()
    }

    /// Borrow the payload, to inspect or match a value without consuming it.
    pub fn borrowed(&self) -> VariantValue<&P> {
        VariantValue {
            tag: self.tag,
            payload: self.payload.as_ref(),
        }
    }

    /// The payload of an `expected` variant, or the misuse diagnostic for `operation`.
    pub(crate) fn take_payload(
        self,
        operation: &'static str,
        expected: &'static str,
    ) -> Result<P, UnwrapError> {
        if self.tag.as_str() != expected {
            return Err(UnwrapError::WrongVariant {
                operation,
                expected,
                found: self.tag,
            });
        }
        self.payload.ok_or(UnwrapError::MissingPayload {
            operation,
            tag: self.tag,
        })
    }

    /// Transform the payload, keeping the tag.
    pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> VariantValue<Q> {
        VariantValue {
            tag: self.tag,
            payload: self.payload.map(f),
        }
    }
}

impl<P: fmt::Display> fmt::Display for VariantValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}({})", self.tag, payload),
            None => write!(f, "{}", self.tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn introspection() {
        let a = VariantValue::tuple_variant(ustr("Circle"), 2.5);
        assert_eq!(a.variant_of(), ustr("Circle"));
        assert_eq!(a.payload_of(), Some(&2.5));
        assert!(!a.is_unit());
        assert!(a.is_variant("Circle"));
        assert!(!a.is_variant("Square"));

        let b = VariantValue::<f64>::unit_variant(ustr("Empty"));
        assert_eq!(b.variant_of(), ustr("Empty"));
        assert_eq!(b.payload_of(), None);
        assert!(b.is_unit());
    }

    #[test]
    fn shareable_across_threads() {
        fn check<T: Send + Sync>() {}
        check::<VariantValue>();
        check::<VariantValue<String>>();
        check::<VariantValue<&str>>();
    }

    #[test]
    fn parts_round_trip() {
        let values = [
            VariantValue::tuple_variant(ustr("Some"), 3),
            VariantValue::unit_variant(ustr("None")),
            VariantValue::tuple_variant(ustr("Err"), -1),
        ];
        for value in values {
            let (tag, payload) = value.clone().into_parts();
            assert_eq!(VariantValue::from_parts(&tag, payload), value);
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            VariantValue::tuple_variant(ustr("Ok"), 7).to_string(),
            "Ok(7)"
        );
        assert_eq!(
            VariantValue::<i32>::unit_variant(ustr("None")).to_string(),
            "None"
        );
        assert_eq!(
            VariantValue::tuple_variant(ustr("Ok"), 7)
                .map_payload(|v| v * 2)
                .to_string(),
            "Ok(14)"
        );
    }
}
