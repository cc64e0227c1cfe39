// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use ustr::{ustr, Ustr};

use crate::{
    option::SOME,
    result::{ERR, OK},
    value::VariantValue,
};

/// One arm of `match_variant`: a tag and the callback receiving its payload.
pub struct Arm<'a, P, R> {
    tag: Ustr,
    callback: Box<dyn FnOnce(Option<P>) -> R + 'a>,
}

impl<'a, P, R> Arm<'a, P, R> {
    pub fn new(tag: &str, callback: impl FnOnce(Option<P>) -> R + 'a) -> Self {
        Self {
            tag: ustr(tag),
            callback: Box::new(callback),
        }
    }

    pub fn tag(&self) -> Ustr {
        self.tag
    }
}

/// Call the callback of the first arm whose tag is the tag of `value`, or `fallback` if none matches.
///
/// Arms are scanned in order, so if several arms share a tag, only the first one is reachable.
pub fn match_variant<'a, P, R>(
    value: VariantValue<P>,
    arms: impl IntoIterator<Item = Arm<'a, P, R>>,
    fallback: impl FnOnce() -> R,
) -> R {
    let (tag, payload) = value.into_parts();
    match arms.into_iter().find(|arm| arm.tag == tag) {
        Some(arm) => (arm.callback)(payload),
        None => {
            log::debug!("No arm for variant {tag}, using fallback");
            fallback()
        }
    }
}

impl<P> VariantValue<P> {
    /// Whether the active tag is `tag`.
    pub fn is_variant(&self, tag: &str) -> bool {
        self.tag.as_str() == tag
    }

    /// Call `on_some` with the payload of a `Some`, or `on_none` otherwise.
    ///
    /// # Panics
    ///
    /// Panics on a `Some` without payload.
    #[track_caller]
    pub fn match_option<R>(self, on_some: impl FnOnce(P) -> R, on_none: impl FnOnce() -> R) -> R {
        if !self.is_some() {
            return on_none();
        }
        match self.take_payload("match_option", SOME) {
            Ok(payload) => on_some(payload),
            Err(error) => error.abort(),
        }
    }

    /// Call `on_ok` with the payload of an `Ok`, or `on_err` with the payload of an `Err`.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `Ok` nor `Err`, or lacks its payload.
    #[track_caller]
    pub fn match_result<R>(self, on_ok: impl FnOnce(P) -> R, on_err: impl FnOnce(P) -> R) -> R {
        if self.is_ok() {
            match self.take_payload("match_result", OK) {
                Ok(payload) => on_ok(payload),
                Err(error) => error.abort(),
            }
        } else {
            match self.take_payload("match_result", ERR) {
                Ok(payload) => on_err(payload),
                Err(error) => error.abort(),
            }
        }
    }

    /// Start matching this value arm by arm, see [`Matcher`].
    pub fn matcher<R>(self) -> Matcher<P, R> {
        Matcher {
            state: MatchState::Pending(self),
        }
    }
}

enum MatchState<P, R> {
    Pending(VariantValue<P>),
    Matched(R),
}

/// Builder form of [`match_variant`].
///
/// Each arm is tried when it is added, and the first one matching the tag wins.
/// ```
/// # use tagvariant::{ustr, VariantValue};
/// use std::f64::consts::PI;
///
/// let shape = VariantValue::tuple_variant(ustr("Square"), 3.0);
/// let area = shape
///     .matcher()
///     .arm("Circle", |r: Option<f64>| PI * r.unwrap_or(0.0).powi(2))
///     .arm("Square", |s| s.unwrap_or(0.0).powi(2))
///     .otherwise(|| 0.0);
/// assert_eq!(area, 9.0);
/// ```
pub struct Matcher<P, R> {
    state: MatchState<P, R>,
}

impl<P, R> Matcher<P, R> {
    pub fn arm(self, tag: &str, callback: impl FnOnce(Option<P>) -> R) -> Self {
        let state = match self.state {
            MatchState::Pending(value) if value.is_variant(tag) => {
                MatchState::Matched(callback(value.into_payload()))
            }
            state => state,
        };
        Self { state }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.state, MatchState::Matched(_))
    }

    pub fn otherwise(self, fallback: impl FnOnce() -> R) -> R {
        match self.state {
            MatchState::Matched(result) => result,
            MatchState::Pending(value) => {
                log::debug!("No arm for variant {}, using fallback", value.tag);
                fallback()
            }
        }
    }
}
