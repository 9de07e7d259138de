use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Opaque timestamp as received from the source. It is never parsed;
/// it only serves as a display key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeToken {
    Text(String),
    Number(Number),
}

impl TimeToken {
    /// Accepts a JSON string or number, anything else is not a time token
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(TimeToken::Text(s.clone())),
            Value::Number(n) => Some(TimeToken::Number(n.clone())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            TimeToken::Text(s) => Value::String(s.clone()),
            TimeToken::Number(n) => Value::Number(n.clone()),
        }
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeToken::Text(s) => f.write_str(s),
            TimeToken::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TimeToken {
    fn from(s: &str) -> Self {
        TimeToken::Text(s.to_string())
    }
}

impl From<String> for TimeToken {
    fn from(s: String) -> Self {
        TimeToken::Text(s)
    }
}

impl From<i64> for TimeToken {
    fn from(n: i64) -> Self {
        TimeToken::Number(n.into())
    }
}
