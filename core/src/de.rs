//! Lenient field decoding shared by the payload types.
//!
//! Payloads follow the upstream client's JSON binding: unknown fields are
//! ignored, missing fields take the zero value and `null` counts as missing.
//! The top level must still be an object.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `T`, mapping `null` to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse `json` into `T`, rejecting anything but a top-level object.
pub(crate) fn object_from_str<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    let unexpected = match serde_json::from_str::<Value>(json)? {
        object @ Value::Object(_) => return serde_json::from_value(object),
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(_) => Unexpected::Other("string"),
        Value::Array(_) => Unexpected::Seq,
    };
    Err(serde_json::Error::invalid_type(unexpected, &"a JSON object"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn null_and_missing_fields_take_zero_values() {
        let p: Sample = object_from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(p.name, "");
        assert_eq!(p.count, 0);
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        for text in ["[]", "null", "3", "\"x\"", "true"] {
            assert!(object_from_str::<Sample>(text).is_err(), "{text}");
        }
    }

    #[test]
    fn truncated_text_is_rejected() {
        let err = object_from_str::<Sample>("{").unwrap_err();
        assert!(err.is_eof());
    }
}
