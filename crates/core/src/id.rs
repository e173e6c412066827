//! Identifiers carried in the reserved `id` / `code` state fields.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use uuid::Uuid;

/// Identifier of a model (`id`) or entity (`code`).
///
/// Either text or a JSON number; whatever the producer chose is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(Number),
    Text(String),
}

/// Entity identifier.
pub type Code = Identifier;

impl Identifier {
    /// Read an identifier out of a state value.
    ///
    /// Only strings and numbers qualify; `null`, booleans, arrays and objects
    /// mean "no identifier".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    /// Empty text and numeric zero are not usable identifiers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            Self::Text(_) => None,
        }
    }
}

impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => core::fmt::Display::fmt(n, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Identifier {
                fn from(value: $t) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

impl From<Identifier> for Value {
    fn from(value: Identifier) -> Self {
        match value {
            Identifier::Number(n) => Value::Number(n),
            Identifier::Text(s) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_strings_and_numbers_are_identifiers() {
        assert_eq!(Identifier::from_value(&json!(10)), Some(Identifier::from(10)));
        assert_eq!(Identifier::from_value(&json!("abc")), Some(Identifier::from("abc")));
        assert_eq!(Identifier::from_value(&Value::Null), None);
        assert_eq!(Identifier::from_value(&json!(true)), None);
        assert_eq!(Identifier::from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn truthiness_rejects_empty_text_and_zero() {
        assert!(Identifier::from("x").is_truthy());
        assert!(Identifier::from(7).is_truthy());
        assert!(!Identifier::from("").is_truthy());
        assert!(!Identifier::from(0).is_truthy());
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Identifier::from(10)).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Identifier::from("a")).unwrap(), "\"a\"");

        let parsed: Identifier = serde_json::from_str("\"x-1\"").unwrap();
        assert_eq!(parsed, Identifier::from("x-1"));
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(Identifier::from(10).to_string(), "10");
        assert_eq!(Identifier::from("abc").to_string(), "abc");
    }
}
