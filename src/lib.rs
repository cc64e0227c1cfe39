// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Externally tagged variant values.
//!
//! A variant is encoded either as a single-key object whose key is the tag and whose
//! value is the payload (`{"Some": 42}`), or as a bare string for unit variants (`"None"`).
//! [`VariantValue`] holds such a value with an explicit tag, and provides the `Option`
//! and `Result` helpers, plus tag-based matching through [`match_variant`] and [`Matcher`].

pub mod config;
pub mod error;
mod json;
mod r#match;
pub mod option;
pub mod result;
pub mod value;

pub use config::{DecodeConfig, MultipleTagsPolicy};
pub use error::{UnwrapError, VariantError};
pub use r#match::{match_variant, Arm, Matcher};
pub use value::VariantValue;

pub use ustr::{ustr, Ustr};
