use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// The registry is inconsistent about its code fields, some records carry
/// them as strings and some as numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(value)) => Ok(Some(value)),
        Some(serde_json::Value::Number(value)) => Ok(Some(value.to_string())),
        Some(value) => Err(D::Error::custom(format!(
            "invalid value: {value}, expected a string or a number"
        ))),
    }
}
