// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::{fmt, marker::PhantomData};

use itertools::Itertools;
use serde::{
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};
use smallvec::{smallvec, SmallVec};
use ustr::{ustr, Ustr};

use crate::{
    config::{DecodeConfig, MultipleTagsPolicy},
    error::VariantError,
    option::SOME,
    result::{ERR, OK},
    value::VariantValue,
};

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode_object(
    map: Map<String, Value>,
    config: &DecodeConfig,
) -> Result<VariantValue, VariantError> {
    if map.len() > 1 {
        let tags: SmallVec<[Ustr; 2]> = map.keys().map(|key| ustr(key)).collect();
        match config.multiple_tags {
            MultipleTagsPolicy::Reject => return Err(VariantError::MultipleTags(tags)),
            MultipleTagsPolicy::FirstInOrder => log::warn!(
                "Variant object has multiple tags, keeping {} and dropping {}",
                tags[0],
                tags[1..].iter().join(", ")
            ),
        }
    }
    let (tag, payload) = map.into_iter().next().ok_or(VariantError::NoTag)?;
    let tag = ustr(&tag);
    if payload.is_null() && config.null_payload_as_unit {
        Ok(VariantValue::unit_variant(tag))
    } else {
        Ok(VariantValue::tuple_variant(tag, payload))
    }
}

impl VariantValue {
    /// Decode the externally tagged encoding with the default, strict, configuration.
    pub fn from_json(json: Value) -> Result<Self, VariantError> {
        Self::from_json_with(json, &DecodeConfig::default())
    }

    pub fn from_json_with(json: Value, config: &DecodeConfig) -> Result<Self, VariantError> {
        let value = match json {
            Value::String(tag) => VariantValue::unit_variant(ustr(&tag)),
            Value::Object(map) => decode_object(map, config)?,
            other => return Err(VariantError::NotAVariant(json_kind(&other))),
        };
        log::debug!("Decoded variant {}", value.tag);
        Ok(value)
    }

    /// Encode as a bare tag if unit, as a single-key object otherwise.
    pub fn to_json(&self) -> Value {
        match &self.payload {
            None => Value::String(self.tag.to_string()),
            Some(payload) => {
                let mut map = Map::new();
                map.insert(self.tag.to_string(), payload.clone());
                Value::Object(map)
            }
        }
    }

    pub fn serialize_option<T: Serialize>(option: &Option<T>) -> Result<Self, VariantError> {
        Ok(match option {
            Some(payload) => Self::some(to_payload(SOME, payload)?),
            None => Self::none(),
        })
    }

    pub fn serialize_result<T: Serialize, E: Serialize>(
        result: &Result<T, E>,
    ) -> Result<Self, VariantError> {
        Ok(match result {
            Ok(payload) => Self::ok(to_payload(OK, payload)?),
            Err(payload) => Self::err(to_payload(ERR, payload)?),
        })
    }

    pub fn deserialize_option<T: DeserializeOwned>(self) -> Result<Option<T>, VariantError> {
        let tag = self.tag;
        self.into_option()?
            .map(|payload| from_payload(tag, payload))
            .transpose()
    }

    pub fn deserialize_result<T: DeserializeOwned, E: DeserializeOwned>(
        self,
    ) -> Result<Result<T, E>, VariantError> {
        let tag = self.tag;
        Ok(match self.into_result()? {
            Ok(payload) => Ok(from_payload(tag, payload)?),
            Err(payload) => Err(from_payload(tag, payload)?),
        })
    }
}

fn to_payload<T: Serialize>(tag: &str, payload: &T) -> Result<Value, VariantError> {
    serde_json::to_value(payload).map_err(|error| VariantError::InvalidPayload {
        tag: ustr(tag),
        reason: error.to_string(),
    })
}

fn from_payload<T: DeserializeOwned>(tag: Ustr, payload: Value) -> Result<T, VariantError> {
    serde_json::from_value(payload).map_err(|error| VariantError::InvalidPayload {
        tag,
        reason: error.to_string(),
    })
}

impl<P: Serialize> Serialize for VariantValue<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.payload {
            None => serializer.serialize_str(self.tag.as_str()),
            Some(payload) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.tag.as_str(), payload)?;
                map.end()
            }
        }
    }
}

struct VariantVisitor<P>(PhantomData<P>);

impl<'de, P: Deserialize<'de>> Visitor<'de> for VariantVisitor<P> {
    type Value = VariantValue<P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a variant tag or a single-entry map")
    }

    fn visit_str<E: de::Error>(self, tag: &str) -> Result<Self::Value, E> {
        Ok(VariantValue::unit_variant(ustr(tag)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let tag = match map.next_key::<String>()? {
            Some(tag) => ustr(&tag),
            None => return Err(de::Error::custom(VariantError::NoTag)),
        };
        // buffer the payload so that extra keys are reported before payload errors
        let payload = map.next_value::<Value>()?;
        let mut tags: SmallVec<[Ustr; 2]> = smallvec![tag];
        while let Some(other) = map.next_key::<String>()? {
            map.next_value::<IgnoredAny>()?;
            tags.push(ustr(&other));
        }
        if tags.len() > 1 {
            return Err(de::Error::custom(VariantError::MultipleTags(tags)));
        }
        let payload = P::deserialize(payload).map_err(<A::Error as de::Error>::custom)?;
        Ok(VariantValue::tuple_variant(tag, payload))
    }
}

/// Always strict: accepts a bare tag or a single-entry map.
///
/// The payload is buffered before being deserialized, so payloads borrowing from the input are not supported.
impl<'de, P: Deserialize<'de>> Deserialize<'de> for VariantValue<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VariantVisitor(PhantomData))
    }
}
