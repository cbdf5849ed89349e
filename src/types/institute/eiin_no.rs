use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Educational Institute Identification Number.
///
/// The registry is inconsistent about the type of this field, so it is
/// deserialized from either a JSON string or a JSON number and always
/// serialized as a string. It is the dedup key for the search history
/// and the favorites.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Debug)]
#[serde(transparent)]
pub struct EiinNo(String);

impl EiinNo {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EiinNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EiinNo {
    fn from(eiin_no: &str) -> Self {
        EiinNo(eiin_no.to_owned())
    }
}

impl From<String> for EiinNo {
    fn from(eiin_no: String) -> Self {
        EiinNo(eiin_no)
    }
}

impl<'de> Deserialize<'de> for EiinNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EiinNoVisitor;

        impl<'de> Visitor<'de> for EiinNoVisitor {
            type Value = EiinNo;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(EiinNo(value.to_owned()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(EiinNo(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(EiinNo(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(EiinNo(value.to_string()))
            }
        }

        deserializer.deserialize_any(EiinNoVisitor)
    }
}
