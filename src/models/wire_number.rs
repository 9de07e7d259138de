use serde_json::{Number, Value};
use std::fmt;

/// A numeric field that remembers how the source wrote it.
///
/// `5` stays `5` on the way back out instead of turning into `5.0`.
/// Equality is numeric, so `5` and `5.0` compare equal.
#[derive(Debug, Clone)]
pub enum WireNumber {
    Json(Number),
    Float(f64),
}

impl WireNumber {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64().is_some() => Some(WireNumber::Json(n.clone())),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            WireNumber::Json(n) => n.as_f64().unwrap_or(f64::NAN),
            WireNumber::Float(f) => *f,
        }
    }

    /// Integers and finite floats become JSON numbers; non-finite floats
    /// have no JSON form and become `null`
    pub fn to_value(&self) -> Value {
        match self {
            WireNumber::Json(n) => Value::Number(n.clone()),
            WireNumber::Float(f) => Value::from(*f),
        }
    }
}

impl PartialEq for WireNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WireNumber::Json(a), WireNumber::Json(b)) if a.is_f64() == b.is_f64() => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<f64> for WireNumber {
    fn from(value: f64) -> Self {
        WireNumber::Float(value)
    }
}

impl From<i64> for WireNumber {
    fn from(value: i64) -> Self {
        WireNumber::Json(value.into())
    }
}

impl fmt::Display for WireNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireNumber::Json(n) => write!(f, "{}", n),
            WireNumber::Float(v) => write!(f, "{}", v),
        }
    }
}
