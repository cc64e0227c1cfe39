use serde_json::Value;
use tagvariant::{DecodeConfig, VariantError, VariantValue};

/// Parse the JSON source and decode it as a variant, with the strict configuration
pub fn decode(src: &str) -> VariantValue {
    decode_with(src, &DecodeConfig::default())
}

/// Parse the JSON source and decode it as a variant
pub fn decode_with(src: &str, config: &DecodeConfig) -> VariantValue {
    let json = parse(src);
    VariantValue::from_json_with(json, config)
        .unwrap_or_else(|error| panic!("Decoding error: {error}"))
}

/// Parse the JSON source and expect decoding to fail
pub fn fail_decode(src: &str) -> VariantError {
    match VariantValue::from_json(parse(src)) {
        Ok(value) => panic!("Expected decoding error, got variant: {value}"),
        Err(error) => error,
    }
}

pub fn parse(src: &str) -> Value {
    serde_json::from_str(src).unwrap_or_else(|error| panic!("Invalid JSON: {error}"))
}

// macros to construct variants easily to make tests more readable

/// A `Some` with a JSON payload
#[macro_export]
macro_rules! some {
    ($($payload:tt)+) => {
        tagvariant::VariantValue::some(serde_json::json!($($payload)+))
    };
}

/// An `Ok` with a JSON payload
#[macro_export]
macro_rules! ok {
    ($($payload:tt)+) => {
        tagvariant::VariantValue::ok(serde_json::json!($($payload)+))
    };
}

/// An `Err` with a JSON payload
#[macro_export]
macro_rules! err {
    ($($payload:tt)+) => {
        tagvariant::VariantValue::err(serde_json::json!($($payload)+))
    };
}

/// A `None` with JSON payload type
#[macro_export]
macro_rules! none {
    () => {
        tagvariant::VariantValue::<serde_json::Value>::none()
    };
}
