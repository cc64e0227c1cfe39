// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

/// What to do with an encoded variant object having more than one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultipleTagsPolicy {
    /// Fail with `VariantError::MultipleTags`
    #[default]
    Reject,
    /// Keep the first key in document order, drop the others
    FirstInOrder,
}

/// Decoding options for the externally tagged encoding.
///
/// The default is strict: only a bare tag or a single-key object is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub multiple_tags: MultipleTagsPolicy,
    /// Decode `{"Tag": null}` as the unit variant `"Tag"`.
    ///
    /// This is lossy for tags that carry a payload: `{"Some": null}` becomes a bare
    /// `Some`, which no longer unwraps to `null`.
    pub null_payload_as_unit: bool,
}

impl DecodeConfig {
    /// Keep the first tag of objects with several keys, in document order.
    ///
    /// Null payloads are kept, so every well-formed encoding decodes as in the strict mode.
    pub fn lenient() -> Self {
        Self {
            multiple_tags: MultipleTagsPolicy::FirstInOrder,
            null_payload_as_unit: false,
        }
    }

    pub fn with_multiple_tags(mut self, policy: MultipleTagsPolicy) -> Self {
        self.multiple_tags = policy;
        self
    }

    pub fn with_null_payload_as_unit(mut self, enabled: bool) -> Self {
        self.null_payload_as_unit = enabled;
        self
    }
}
