use serde::{Serialize, Serializer};

use crate::models::{Category, Discriminant, DiscriminantKey, RawRecord, TimeToken, WireNumber};
use crate::utils::constants::{
    CATEGORY_CLOUD_COVERAGE, CATEGORY_PRECIPITATION, CATEGORY_TEMPERATURE, CATEGORY_WIND_SPEED,
    FIELD_DIRECTION, FIELD_PLACE, FIELD_PRECIPITATION_TYPE, FIELD_TIME, FIELD_UNIT, FIELD_VALUE,
};

/// Category plus the category-specific extension fields.
///
/// `Other` keeps an unrecognized category verbatim; such observations
/// carry only the common fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationKind {
    Temperature,
    WindSpeed { direction: Option<String> },
    Precipitation { precipitation_type: Option<String> },
    CloudCoverage,
    Other(String),
}

impl ObservationKind {
    /// Kind for a category name, with no extension fields set.
    /// Known spellings resolve to their typed kind.
    pub fn from_name(name: &str) -> Self {
        match Category::parse(name) {
            Some(Category::Temperature) => ObservationKind::Temperature,
            Some(Category::WindSpeed) => ObservationKind::WindSpeed { direction: None },
            Some(Category::Precipitation) => ObservationKind::Precipitation {
                precipitation_type: None,
            },
            Some(Category::CloudCoverage) => ObservationKind::CloudCoverage,
            None => ObservationKind::Other(name.to_string()),
        }
    }

    /// Wire spelling for known kinds, the raw name for `Other`
    pub fn name(&self) -> &str {
        match self {
            ObservationKind::Temperature => CATEGORY_TEMPERATURE,
            ObservationKind::WindSpeed { .. } => CATEGORY_WIND_SPEED,
            ObservationKind::Precipitation { .. } => CATEGORY_PRECIPITATION,
            ObservationKind::CloudCoverage => CATEGORY_CLOUD_COVERAGE,
            ObservationKind::Other(name) => name.as_str(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            ObservationKind::Temperature => Some(Category::Temperature),
            ObservationKind::WindSpeed { .. } => Some(Category::WindSpeed),
            ObservationKind::Precipitation { .. } => Some(Category::Precipitation),
            ObservationKind::CloudCoverage => Some(Category::CloudCoverage),
            ObservationKind::Other(_) => None,
        }
    }
}

/// A single measured value, optionally tied to a place and time
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    source: Discriminant,
    kind: ObservationKind,
    time: Option<TimeToken>,
    place: Option<String>,
    value: WireNumber,
    unit: Option<String>,
}

impl Observation {
    /// Build an observation. For known categories an absent unit falls
    /// back to the category default; `Other` observations keep `None`.
    pub fn new(
        kind: ObservationKind,
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
    ) -> Self {
        let source = Discriminant::new(DiscriminantKey::Type, kind.name());

        Self::from_parts(
            source,
            kind,
            Some(time.into()),
            Some(place.into()),
            WireNumber::from(value),
            unit,
        )
    }

    /// Assemble from already-extracted record fields. An `Other` kind whose
    /// name is a known category is resolved to that category.
    pub(crate) fn from_parts(
        source: Discriminant,
        kind: ObservationKind,
        time: Option<TimeToken>,
        place: Option<String>,
        value: WireNumber,
        unit: Option<String>,
    ) -> Self {
        let kind = match kind {
            ObservationKind::Other(name) => ObservationKind::from_name(&name),
            kind => kind,
        };

        let unit = match kind.category() {
            Some(category) => Some(unit.unwrap_or_else(|| category.default_unit().to_string())),
            None => unit,
        };

        Self {
            source,
            kind,
            time,
            place,
            value,
            unit,
        }
    }

    pub fn temperature(
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
    ) -> Self {
        Self::new(ObservationKind::Temperature, time, place, value, unit)
    }

    pub fn wind_speed(
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
        direction: Option<String>,
    ) -> Self {
        Self::new(ObservationKind::WindSpeed { direction }, time, place, value, unit)
    }

    pub fn precipitation(
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
        precipitation_type: Option<String>,
    ) -> Self {
        Self::new(
            ObservationKind::Precipitation { precipitation_type },
            time,
            place,
            value,
            unit,
        )
    }

    pub fn cloud_coverage(
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
    ) -> Self {
        Self::new(ObservationKind::CloudCoverage, time, place, value, unit)
    }

    /// Observation for a category given by name. The name is kept as
    /// written; a known category still gets its typed kind and unit default.
    pub fn generic(
        category: impl Into<String>,
        time: impl Into<TimeToken>,
        place: impl Into<String>,
        value: f64,
        unit: Option<String>,
    ) -> Self {
        let category = category.into();
        Self::from_parts(
            Discriminant::new(DiscriminantKey::Type, category.as_str()),
            ObservationKind::Other(category),
            Some(time.into()),
            Some(place.into()),
            WireNumber::from(value),
            unit,
        )
    }

    pub fn kind(&self) -> &ObservationKind {
        &self.kind
    }

    /// Category name exactly as received
    pub fn category(&self) -> &str {
        self.source.name()
    }

    pub fn discriminant(&self) -> &Discriminant {
        &self.source
    }

    pub fn known_category(&self) -> Option<Category> {
        self.kind.category()
    }

    pub fn is_category(&self, category: Category) -> bool {
        self.kind.category() == Some(category)
    }

    pub fn time(&self) -> Option<&TimeToken> {
        self.time.as_ref()
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn value(&self) -> f64 {
        self.value.as_f64()
    }

    pub fn wire_value(&self) -> &WireNumber {
        &self.value
    }

    /// Always present for known categories
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn direction(&self) -> Option<&str> {
        match &self.kind {
            ObservationKind::WindSpeed { direction } => direction.as_deref(),
            _ => None,
        }
    }

    pub fn precipitation_type(&self) -> Option<&str> {
        match &self.kind {
            ObservationKind::Precipitation { precipitation_type } => precipitation_type.as_deref(),
            _ => None,
        }
    }

    /// Project back to the wire shape, under the discriminant key and
    /// spelling the record arrived with
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new().with(self.source.key().as_str(), self.source.name());

        if let Some(time) = &self.time {
            raw.insert(FIELD_TIME, time.to_value());
        }
        if let Some(place) = &self.place {
            raw.insert(FIELD_PLACE, place.as_str());
        }
        raw.insert(FIELD_VALUE, self.value.to_value());

        if let Some(unit) = &self.unit {
            raw.insert(FIELD_UNIT, unit.as_str());
        }
        if let Some(direction) = self.direction() {
            raw.insert(FIELD_DIRECTION, direction);
        }
        if let Some(precipitation_type) = self.precipitation_type() {
            raw.insert(FIELD_PRECIPITATION_TYPE, precipitation_type);
        }

        raw
    }
}

impl Serialize for Observation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_defaults_only_when_absent() {
        let default_unit = Observation::temperature("t1", "Horsens", 5.0, None);
        assert_eq!(default_unit.unit(), Some("C"));

        let explicit = Observation::temperature("t1", "Horsens", 41.0, Some("F".to_string()));
        assert_eq!(explicit.unit(), Some("F"));

        let empty = Observation::cloud_coverage("t1", "Horsens", 40.0, Some(String::new()));
        assert_eq!(empty.unit(), Some(""));
    }

    #[test]
    fn test_generic_keeps_category_and_absent_unit() {
        let obs = Observation::generic("uv-index", "t1", "Horsens", 3.0, None);
        assert_eq!(obs.category(), "uv-index");
        assert_eq!(obs.known_category(), None);
        assert_eq!(obs.unit(), None);
        assert_eq!(obs.direction(), None);
    }

    #[test]
    fn test_generic_with_known_name_is_typed() {
        let obs = Observation::generic("temperature", "t1", "Horsens", 3.0, None);
        assert_eq!(obs.category(), "temperature");
        assert_eq!(obs.known_category(), Some(Category::Temperature));
        assert_eq!(obs.kind(), &ObservationKind::Temperature);
        assert_eq!(obs.unit(), Some("C"));

        let camel = Observation::generic("cloudCoverage", "t1", "Horsens", 60.0, None);
        assert_eq!(camel.category(), "cloudCoverage");
        assert!(camel.is_category(Category::CloudCoverage));
        assert_eq!(camel.unit(), Some("%"));

        let via_new = Observation::new(
            ObservationKind::Other("precipitation".to_string()),
            "t1",
            "Horsens",
            1.0,
            None,
        );
        assert!(via_new.is_category(Category::Precipitation));
        assert_eq!(via_new.unit(), Some("mm"));
    }

    #[test]
    fn test_extension_presence_is_distinct_from_empty() {
        let absent = Observation::wind_speed("t1", "Aarhus", 4.0, None, None);
        assert_eq!(absent.direction(), None);

        let empty = Observation::wind_speed("t1", "Aarhus", 4.0, None, Some(String::new()));
        assert_eq!(empty.direction(), Some(""));
    }

    #[test]
    fn test_serializes_to_wire_shape() {
        let obs = Observation::precipitation(
            "2024-03-01T12:00:00Z",
            "Horsens",
            1.5,
            None,
            Some("rain".to_string()),
        );

        let value = serde_json::to_value(&obs).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "precipitation",
                "time": "2024-03-01T12:00:00Z",
                "place": "Horsens",
                "value": 1.5,
                "unit": "mm",
                "precipitation_type": "rain"
            })
        );
    }

    #[test]
    fn test_absent_time_and_place_are_omitted() {
        let obs = Observation::from_parts(
            Discriminant::new(DiscriminantKey::Type, "uv-index"),
            ObservationKind::Other("uv-index".to_string()),
            None,
            None,
            WireNumber::from(3_i64),
            None,
        );
        assert_eq!(obs.time(), None);
        assert_eq!(obs.place(), None);
        assert_eq!(
            serde_json::to_value(&obs).unwrap(),
            json!({"type": "uv-index", "value": 3})
        );
    }
}
