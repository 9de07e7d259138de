use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TelemetryError};
use crate::models::{Discriminant, DiscriminantKey, TimeToken, WireNumber};

/// An untyped record exactly as delivered by the source: a JSON object
/// of string keys to primitive or array values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(TelemetryError::InvalidFormat(format!(
                "Expected a JSON object record, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Field lookup. JSON `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// The category discriminant: `type`, falling back to `category`
    pub fn discriminant(&self) -> Result<&str> {
        self.discriminant_entry().map(|(_, name)| name)
    }

    /// The discriminant together with the key it was found under
    pub fn source_discriminant(&self) -> Result<Discriminant> {
        let (key, name) = self.discriminant_entry()?;
        Ok(Discriminant::new(key, name))
    }

    fn discriminant_entry(&self) -> Result<(DiscriminantKey, &str)> {
        let (key, value) = [DiscriminantKey::Type, DiscriminantKey::Category]
            .into_iter()
            .find_map(|key| self.get(key.as_str()).map(|v| (key, v)))
            .ok_or(TelemetryError::MissingDiscriminant)?;

        match value {
            Value::String(s) => Ok((key, s.as_str())),
            other => Err(TelemetryError::InvalidField {
                field: key.as_str(),
                reason: format!("expected a string, found {}", json_kind(other)),
            }),
        }
    }

    pub(crate) fn required_number(
        &self,
        field: &'static str,
        category: &str,
    ) -> Result<WireNumber> {
        let value = self.require(field, category)?;
        WireNumber::from_value(value).ok_or_else(|| TelemetryError::InvalidField {
            field,
            reason: format!("expected a number, found {}", json_kind(value)),
        })
    }

    pub(crate) fn optional_time(&self, field: &'static str) -> Result<Option<TimeToken>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => TimeToken::from_value(value).map(Some).ok_or_else(|| {
                TelemetryError::InvalidField {
                    field,
                    reason: format!("expected a string or number, found {}", json_kind(value)),
                }
            }),
        }
    }

    pub(crate) fn optional_str(&self, field: &'static str) -> Result<Option<String>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(TelemetryError::InvalidField {
                field,
                reason: format!("expected a string, found {}", json_kind(other)),
            }),
        }
    }

    pub(crate) fn optional_str_list(&self, field: &'static str) -> Result<Option<Vec<String>>> {
        let items = match self.get(field) {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(TelemetryError::InvalidField {
                    field,
                    reason: format!("expected an array of strings, found {}", json_kind(other)),
                })
            }
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| TelemetryError::InvalidField {
                        field,
                        reason: format!("expected string items, found {}", json_kind(item)),
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    fn require(&self, field: &'static str, category: &str) -> Result<&Value> {
        self.get(field).ok_or_else(|| TelemetryError::MissingField {
            category: category.to_string(),
            field,
        })
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Parse a JSON array of records. Blank input is an empty collection.
pub fn parse_collection(json: &str) -> Result<Vec<RawRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items.into_iter().map(RawRecord::from_value).collect(),
        other => Err(TelemetryError::InvalidFormat(format!(
            "Expected a JSON array of records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
