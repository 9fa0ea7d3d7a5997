use crate::utils::error::Result;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A loosely-typed input as a caller hands it to the validators.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Arrays and objects. Opaque to the validators.
    Object,
}

/// Runtime type category, inspected before any coercion happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Textual,
    Numeric,
    Other,
}

impl InputValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            InputValue::Text(_) => ValueKind::Textual,
            InputValue::Number(_) => ValueKind::Numeric,
            InputValue::Bool(_) | InputValue::Null | InputValue::Undefined | InputValue::Object => {
                ValueKind::Other
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 解析 JSON 字面值 (例如 `6`, `"6"`, `null`)，
    /// `undefined`、`NaN`、`Infinity` 另外處理
    pub fn from_literal(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        match trimmed {
            "undefined" => return Ok(InputValue::Undefined),
            "NaN" => return Ok(InputValue::Number(f64::NAN)),
            "Infinity" => return Ok(InputValue::Number(f64::INFINITY)),
            "-Infinity" => return Ok(InputValue::Number(f64::NEG_INFINITY)),
            _ => {}
        }
        let value: serde_json::Value = serde_json::from_str(trimmed)?;
        Ok(value.into())
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Text(s) => {
                // serde_json 負責跳脫字元
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            InputValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            InputValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            InputValue::Number(n) => write!(f, "{}", n),
            InputValue::Bool(b) => write!(f, "{}", b),
            InputValue::Null => f.write_str("null"),
            InputValue::Undefined => f.write_str("undefined"),
            InputValue::Object => f.write_str("{}"),
        }
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => InputValue::Text(s),
            serde_json::Value::Number(n) => InputValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::Bool(b) => InputValue::Bool(b),
            serde_json::Value::Null => InputValue::Null,
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => InputValue::Object,
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Number(value as f64)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Number(f64::from(value))
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(InputValue::Null)
    }
}

// Case files carry values as literal strings so that `null` and
// `undefined` can be written in TOML.
impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        InputValue::from_literal(&literal).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(InputValue::from("6").kind(), ValueKind::Textual);
        assert_eq!(InputValue::from(6).kind(), ValueKind::Numeric);
        assert_eq!(InputValue::from(10.1).kind(), ValueKind::Numeric);
        assert_eq!(InputValue::from(false).kind(), ValueKind::Other);
        assert_eq!(InputValue::Null.kind(), ValueKind::Other);
        assert_eq!(InputValue::Undefined.kind(), ValueKind::Other);
        assert_eq!(InputValue::Object.kind(), ValueKind::Other);
    }

    #[test]
    fn test_from_literal() {
        assert_eq!(InputValue::from_literal("6").unwrap(), InputValue::Number(6.0));
        assert_eq!(
            InputValue::from_literal("\"6\"").unwrap(),
            InputValue::Text("6".to_string())
        );
        assert_eq!(InputValue::from_literal("null").unwrap(), InputValue::Null);
        assert_eq!(InputValue::from_literal("undefined").unwrap(), InputValue::Undefined);
        assert_eq!(InputValue::from_literal("true").unwrap(), InputValue::Bool(true));
        assert_eq!(InputValue::from_literal("[1, 2]").unwrap(), InputValue::Object);
        assert!(InputValue::from_literal("foo").is_err());
    }

    #[test]
    fn test_display_is_literal_form() {
        let values = vec![
            InputValue::from("  \t\n"),
            InputValue::from(10.1),
            InputValue::from(6),
            InputValue::Bool(false),
            InputValue::Null,
            InputValue::Undefined,
            InputValue::Number(f64::INFINITY),
            InputValue::Number(f64::NEG_INFINITY),
        ];
        for value in values {
            let rendered = value.to_string();
            assert_eq!(InputValue::from_literal(&rendered).unwrap(), value);
        }
    }

    #[test]
    fn test_non_finite_literals() {
        assert_eq!(InputValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(InputValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(InputValue::Number(f64::NEG_INFINITY).to_string(), "-Infinity");

        // NaN != NaN，只檢查型別
        match InputValue::from_literal("NaN").unwrap() {
            InputValue::Number(n) => assert!(n.is_nan()),
            other => panic!("unexpected value: {:?}", other),
        }
        assert_eq!(
            InputValue::from_literal(" -Infinity ").unwrap(),
            InputValue::Number(f64::NEG_INFINITY)
        );
        assert!(InputValue::from_literal("inf").is_err());
    }

    #[test]
    fn test_option_maps_none_to_null() {
        let none: Option<&str> = None;
        assert_eq!(InputValue::from(none), InputValue::Null);
        assert_eq!(InputValue::from(Some("Frank")), InputValue::from("Frank"));
    }
}
