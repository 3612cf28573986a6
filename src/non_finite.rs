//! Serde helpers for f64 values that may overflow to infinity
//!
//! Percent change is unclamped, so a tiny baseline can push it to ±inf.
//! JSON has no literal for that and serde_json would write `null`, so
//! non-finite values are written as the strings `"inf"`, `"-inf"` and
//! `"NaN"`. Finite values stay plain numbers.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"inf\", \"-inf\" or \"NaN\"",
            )),
        },
    }
}
