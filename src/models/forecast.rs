use serde::{Serialize, Serializer};

use crate::error::{Result, TelemetryError};
use crate::models::{Category, Discriminant, RawRecord, TimeToken, WireNumber};
use crate::utils::constants::{
    FIELD_DIRECTIONS, FIELD_FROM, FIELD_PLACE, FIELD_PRECIPITATION_TYPES, FIELD_TIME, FIELD_TO,
    FIELD_UNIT,
};

/// Forecast category. There is no open-world variant: forecasts for
/// unknown categories are rejected at dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastKind {
    Temperature,
    WindSpeed { expected_directions: Option<Vec<String>> },
    Precipitation { expected_types: Option<Vec<String>> },
    CloudCoverage,
}

impl ForecastKind {
    pub fn category(&self) -> Category {
        match self {
            ForecastKind::Temperature => Category::Temperature,
            ForecastKind::WindSpeed { .. } => Category::WindSpeed,
            ForecastKind::Precipitation { .. } => Category::Precipitation,
            ForecastKind::CloudCoverage => Category::CloudCoverage,
        }
    }
}

/// Predicted low/high band for a place and time window
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRange {
    source: Discriminant,
    kind: ForecastKind,
    time: Option<TimeToken>,
    place: Option<String>,
    unit: String,
    min: WireNumber,
    max: WireNumber,
}

impl ForecastRange {
    pub fn new(
        kind: ForecastKind,
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        min: f64,
        max: f64,
        unit: Option<String>,
    ) -> Self {
        Self::from_parts(
            Discriminant::wire(kind.category()),
            kind,
            Some(time.into()),
            Some(place.into()),
            WireNumber::from(min),
            WireNumber::from(max),
            unit,
        )
    }

    pub(crate) fn from_parts(
        source: Discriminant,
        kind: ForecastKind,
        time: Option<TimeToken>,
        place: Option<String>,
        min: WireNumber,
        max: WireNumber,
        unit: Option<String>,
    ) -> Self {
        let unit = unit.unwrap_or_else(|| kind.category().default_unit().to_string());

        Self {
            source,
            kind,
            time,
            place,
            unit,
            min,
            max,
        }
    }

    pub fn kind(&self) -> &ForecastKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Category name exactly as received
    pub fn category_name(&self) -> &str {
        self.source.name()
    }

    pub fn discriminant(&self) -> &Discriminant {
        &self.source
    }

    pub fn time(&self) -> Option<&TimeToken> {
        self.time.as_ref()
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn min(&self) -> f64 {
        self.min.as_f64()
    }

    pub fn max(&self) -> f64 {
        self.max.as_f64()
    }

    pub fn expected_types(&self) -> Option<&[String]> {
        match &self.kind {
            ForecastKind::Precipitation { expected_types } => expected_types.as_deref(),
            _ => None,
        }
    }

    pub fn expected_directions(&self) -> Option<&[String]> {
        match &self.kind {
            ForecastKind::WindSpeed {
                expected_directions,
            } => expected_directions.as_deref(),
            _ => None,
        }
    }

    /// Reject a range whose lower bound exceeds its upper bound
    pub fn validate_order(&self) -> Result<()> {
        let (min, max) = (self.min(), self.max());
        if min > max {
            return Err(TelemetryError::InvertedRange { min, max });
        }
        Ok(())
    }

    /// Project back to the wire shape (`min`/`max` as `from`/`to`)
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new().with(self.source.key().as_str(), self.source.name());

        if let Some(time) = &self.time {
            raw.insert(FIELD_TIME, time.to_value());
        }
        if let Some(place) = &self.place {
            raw.insert(FIELD_PLACE, place.as_str());
        }
        raw.insert(FIELD_FROM, self.min.to_value());
        raw.insert(FIELD_TO, self.max.to_value());
        raw.insert(FIELD_UNIT, self.unit.as_str());

        if let Some(types) = self.expected_types() {
            raw.insert(FIELD_PRECIPITATION_TYPES, types.to_vec());
        }
        if let Some(directions) = self.expected_directions() {
            raw.insert(FIELD_DIRECTIONS, directions.to_vec());
        }

        raw
    }
}

impl Serialize for ForecastRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}
