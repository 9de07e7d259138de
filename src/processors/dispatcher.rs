use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Result, TelemetryError};
use crate::models::{
    Category, ForecastKind, ForecastRange, Observation, ObservationKind, RawRecord,
};
use crate::utils::constants::{
    FIELD_DIRECTION, FIELD_DIRECTIONS, FIELD_FROM, FIELD_PLACE, FIELD_PRECIPITATION_TYPE,
    FIELD_PRECIPITATION_TYPES, FIELD_TIME, FIELD_TO, FIELD_UNIT, FIELD_VALUE,
};

/// What a batch conversion does when one record fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionPolicy {
    /// Abort the whole batch on the first failing record
    #[default]
    FailFast,
    /// Convert what can be converted and report the rest
    SkipInvalid,
}

#[derive(Debug)]
pub struct RejectedRecord {
    pub index: usize,
    pub error: TelemetryError,
}

#[derive(Debug)]
pub struct ConversionOutcome<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RejectedRecord>,
}

impl<T> ConversionOutcome<T> {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Maps raw records to typed observations and forecast ranges.
///
/// Observations are open-world: an unrecognized category becomes a
/// generic observation. Forecasts are closed-world: an unrecognized
/// category fails with [`TelemetryError::UnknownForecastCategory`].
#[derive(Debug, Clone, Default)]
pub struct RecordDispatcher {
    policy: ConversionPolicy,
    enforce_range_order: bool,
}

impl RecordDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_range_order_enforced(mut self, enforce: bool) -> Self {
        self.enforce_range_order = enforce;
        self
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    /// Only the discriminant and `value` are required; `time` and `place`
    /// are carried when present.
    pub fn to_observation(&self, raw: &RawRecord) -> Result<Observation> {
        let source = raw.source_discriminant()?;
        let name = source.name();
        let value = raw.required_number(FIELD_VALUE, name)?;
        let time = raw.optional_time(FIELD_TIME)?;
        let place = raw.optional_str(FIELD_PLACE)?;
        let unit = raw.optional_str(FIELD_UNIT)?;

        let kind = match source.category() {
            Some(Category::Temperature) => ObservationKind::Temperature,
            Some(Category::WindSpeed) => ObservationKind::WindSpeed {
                direction: raw.optional_str(FIELD_DIRECTION)?,
            },
            Some(Category::Precipitation) => ObservationKind::Precipitation {
                precipitation_type: raw.optional_str(FIELD_PRECIPITATION_TYPE)?,
            },
            Some(Category::CloudCoverage) => ObservationKind::CloudCoverage,
            None => {
                warn!(category = name, "Unrecognized observation type kept as generic");
                ObservationKind::Other(name.to_string())
            }
        };

        debug!(category = name, place = place.as_deref(), "Dispatched observation");
        Ok(Observation::from_parts(source, kind, time, place, value, unit))
    }

    pub fn to_forecast(&self, raw: &RawRecord) -> Result<ForecastRange> {
        let source = raw.source_discriminant()?;
        let name = source.name();
        let category = source
            .category()
            .ok_or_else(|| TelemetryError::UnknownForecastCategory(name.to_string()))?;

        let min = raw.required_number(FIELD_FROM, name)?;
        let max = raw.required_number(FIELD_TO, name)?;
        let time = raw.optional_time(FIELD_TIME)?;
        let place = raw.optional_str(FIELD_PLACE)?;
        let unit = raw.optional_str(FIELD_UNIT)?;

        let kind = match category {
            Category::Temperature => ForecastKind::Temperature,
            Category::WindSpeed => ForecastKind::WindSpeed {
                expected_directions: raw.optional_str_list(FIELD_DIRECTIONS)?,
            },
            Category::Precipitation => ForecastKind::Precipitation {
                expected_types: raw.optional_str_list(FIELD_PRECIPITATION_TYPES)?,
            },
            Category::CloudCoverage => ForecastKind::CloudCoverage,
        };

        debug!(category = name, place = place.as_deref(), "Dispatched forecast");
        let range = ForecastRange::from_parts(source, kind, time, place, min, max, unit);
        if self.enforce_range_order {
            range.validate_order()?;
        }

        Ok(range)
    }

    pub fn convert_observations(
        &self,
        raws: &[RawRecord],
    ) -> Result<ConversionOutcome<Observation>> {
        self.convert_batch(raws, "observation", |raw| self.to_observation(raw))
    }

    pub fn convert_forecasts(
        &self,
        raws: &[RawRecord],
    ) -> Result<ConversionOutcome<ForecastRange>> {
        self.convert_batch(raws, "forecast", |raw| self.to_forecast(raw))
    }

    fn convert_batch<T, F>(
        &self,
        raws: &[RawRecord],
        label: &str,
        convert: F,
    ) -> Result<ConversionOutcome<T>>
    where
        F: Fn(&RawRecord) -> Result<T>,
    {
        let mut records = Vec::with_capacity(raws.len());
        let mut rejected = Vec::new();

        for (index, raw) in raws.iter().enumerate() {
            match convert(raw) {
                Ok(record) => records.push(record),
                Err(error) => match self.policy {
                    ConversionPolicy::FailFast => {
                        warn!(index, %error, "Aborting {} batch", label);
                        return Err(error);
                    }
                    ConversionPolicy::SkipInvalid => {
                        warn!(index, %error, "Skipping invalid {} record", label);
                        rejected.push(RejectedRecord { index, error });
                    }
                },
            }
        }

        info!(
            converted = records.len(),
            rejected = rejected.len(),
            "Converted {} batch",
            label
        );

        Ok(ConversionOutcome { records, rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_collection, DiscriminantKey};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn observation_raw(kind: &str, value: f64) -> RawRecord {
        RawRecord::new()
            .with("type", kind)
            .with("time", "2024-03-01T12:00:00Z")
            .with("place", "Horsens")
            .with("value", value)
    }

    fn forecast_raw(kind: &str) -> RawRecord {
        RawRecord::new()
            .with("type", kind)
            .with("time", "2024-03-02T00:00:00Z")
            .with("place", "Horsens")
            .with("from", 1.0)
            .with("to", 4.0)
    }

    #[test]
    fn test_temperature_unit_default() {
        let dispatcher = RecordDispatcher::new();

        let obs = dispatcher
            .to_observation(&observation_raw("temperature", 5.0))
            .unwrap();
        assert_eq!(obs.unit(), Some("C"));
        assert_eq!(obs.value(), 5.0);

        let obs = dispatcher
            .to_observation(&observation_raw("temperature", 41.0).with("unit", "F"))
            .unwrap();
        assert_eq!(obs.unit(), Some("F"));
    }

    #[test]
    fn test_empty_unit_is_not_defaulted() {
        let obs = RecordDispatcher::new()
            .to_observation(&observation_raw("wind speed", 3.0).with("unit", ""))
            .unwrap();
        assert_eq!(obs.unit(), Some(""));
    }

    #[test]
    fn test_extension_fields() {
        let dispatcher = RecordDispatcher::new();

        let wind = dispatcher
            .to_observation(&observation_raw("windSpeed", 6.0).with("direction", "NE"))
            .unwrap();
        assert_eq!(wind.known_category(), Some(Category::WindSpeed));
        assert_eq!(wind.direction(), Some("NE"));
        assert_eq!(wind.unit(), Some("m/s"));

        let rain = dispatcher
            .to_observation(
                &observation_raw("precipitation", 2.5).with("precipitation_type", "snow"),
            )
            .unwrap();
        assert_eq!(rain.precipitation_type(), Some("snow"));
        assert_eq!(rain.direction(), None);

        let cloud = dispatcher
            .to_observation(&observation_raw("cloud coverage", 75.0))
            .unwrap();
        assert_eq!(cloud.unit(), Some("%"));
    }

    #[test]
    fn test_unknown_observation_category_is_generic() {
        let raws = parse_collection(r#"[{"type": "uv-index", "value": 3}]"#).unwrap();

        let obs = RecordDispatcher::new().to_observation(&raws[0]).unwrap();
        assert_eq!(obs.category(), "uv-index");
        assert_eq!(obs.kind(), &ObservationKind::Other("uv-index".to_string()));
        assert_eq!(obs.value(), 3.0);
        assert_eq!(obs.unit(), None);
        assert_eq!(obs.time(), None);
        assert_eq!(obs.place(), None);
        assert_eq!(obs.to_raw(), raws[0]);
    }

    #[test]
    fn test_batch_without_time_or_place() {
        let raws = parse_collection(
            r#"[{"type": "temperature", "value": 5}, {"type": "uv-index", "value": 3}]"#,
        )
        .unwrap();

        let outcome = RecordDispatcher::new().convert_observations(&raws).unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.records[0].unit(), Some("C"));
        assert_eq!(outcome.records[1].category(), "uv-index");
    }

    #[test]
    fn test_unknown_forecast_category_fails() {
        let err = RecordDispatcher::new()
            .to_forecast(&forecast_raw("uv-index"))
            .unwrap_err();
        assert!(matches!(err, TelemetryError::UnknownForecastCategory(ref c) if c == "uv-index"));
        assert_eq!(err.to_string(), "Unknown forecast type: uv-index");
    }

    #[test]
    fn test_forecast_extensions() {
        let dispatcher = RecordDispatcher::new();

        let rain = dispatcher
            .to_forecast(
                &forecast_raw("precipitation")
                    .with("precipitation_types", json!(["rain", "sleet"])),
            )
            .unwrap();
        assert_eq!(
            rain.expected_types(),
            Some(&["rain".to_string(), "sleet".to_string()][..])
        );
        assert_eq!(rain.min(), 1.0);
        assert_eq!(rain.max(), 4.0);

        let wind = dispatcher.to_forecast(&forecast_raw("wind speed")).unwrap();
        assert_eq!(wind.expected_directions(), None);
        assert_eq!(wind.unit(), "m/s");
    }

    #[test]
    fn test_range_order_is_opt_in() {
        let inverted = forecast_raw("temperature").with("from", 9.0).with("to", 2.0);

        assert!(RecordDispatcher::new().to_forecast(&inverted).is_ok());

        let strict = RecordDispatcher::new().with_range_order_enforced(true);
        assert!(matches!(
            strict.to_forecast(&inverted),
            Err(TelemetryError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        let raw = RawRecord::new()
            .with("type", "temperature")
            .with("time", "t1")
            .with("place", "Horsens");

        let err = RecordDispatcher::new().to_observation(&raw).unwrap_err();
        assert!(matches!(err, TelemetryError::MissingField { field: "value", .. }));

        let err = RecordDispatcher::new()
            .to_observation(&RawRecord::new().with("value", 1.0))
            .unwrap_err();
        assert!(matches!(err, TelemetryError::MissingDiscriminant));

        let err = RecordDispatcher::new()
            .to_forecast(&RawRecord::new().with("type", "temperature").with("from", 1))
            .unwrap_err();
        assert!(matches!(err, TelemetryError::MissingField { field: "to", .. }));

        let err = RecordDispatcher::new()
            .to_observation(&raw.clone().with("value", 1).with("time", json!({"h": 1})))
            .unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidField { field: "time", .. }));
    }

    #[test]
    fn test_forecast_batch_fails_fast() {
        let raws = vec![
            forecast_raw("temperature"),
            forecast_raw("pollen"),
            forecast_raw("cloud coverage"),
        ];

        let err = RecordDispatcher::new().convert_forecasts(&raws).unwrap_err();
        assert!(matches!(err, TelemetryError::UnknownForecastCategory(ref c) if c == "pollen"));
    }

    #[test]
    fn test_forecast_batch_skip_invalid() {
        let raws = vec![
            forecast_raw("temperature"),
            forecast_raw("pollen"),
            forecast_raw("cloud coverage"),
        ];

        let outcome = RecordDispatcher::new()
            .with_policy(ConversionPolicy::SkipInvalid)
            .convert_forecasts(&raws)
            .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 1);
    }

    #[test]
    fn test_observation_batch_keeps_order() {
        let raws = vec![
            observation_raw("temperature", 5.0),
            observation_raw("uv-index", 2.0),
            observation_raw("temperature", 9.0),
        ];

        let outcome = RecordDispatcher::new().convert_observations(&raws).unwrap();
        assert!(outcome.is_complete());

        let values: Vec<f64> = outcome.records.iter().map(Observation::value).collect();
        assert_eq!(values, vec![5.0, 2.0, 9.0]);
    }

    #[test]
    fn test_round_trip_projection() {
        let raw = observation_raw("wind speed", 7.5)
            .with("unit", "km/h")
            .with("direction", "W");

        let obs = RecordDispatcher::new().to_observation(&raw).unwrap();
        assert_eq!(obs.to_raw(), raw);

        let forecast = forecast_raw("precipitation")
            .with("unit", "mm")
            .with("precipitation_types", json!(["rain"]));
        let range = RecordDispatcher::new().to_forecast(&forecast).unwrap();
        assert_eq!(range.to_raw(), forecast);
    }

    #[test]
    fn test_round_trip_keeps_received_spelling_and_key() {
        let raws = parse_collection(
            r#"[
                {"type": "windSpeed", "time": "t1", "place": "Horsens", "value": 4, "unit": "m/s"},
                {"category": "cloudCoverage", "time": "t1", "value": 80, "unit": "%"},
                {"category": "temperature", "value": 5, "unit": "C"}
            ]"#,
        )
        .unwrap();

        let observations = RecordDispatcher::new()
            .convert_observations(&raws)
            .unwrap()
            .into_records();

        assert_eq!(observations[0].category(), "windSpeed");
        assert!(observations[0].is_category(Category::WindSpeed));
        assert_eq!(observations[1].category(), "cloudCoverage");
        assert_eq!(observations[1].discriminant().key(), DiscriminantKey::Category);

        for (obs, raw) in observations.iter().zip(&raws) {
            assert_eq!(&obs.to_raw(), raw);
        }

        let forecasts = parse_collection(
            r#"[{"category": "windSpeed", "time": "t2", "from": 2, "to": 8, "unit": "m/s"}]"#,
        )
        .unwrap();
        let range = RecordDispatcher::new().to_forecast(&forecasts[0]).unwrap();
        assert_eq!(range.category_name(), "windSpeed");
        assert_eq!(range.category(), Category::WindSpeed);
        assert_eq!(range.to_raw(), forecasts[0]);
    }

    #[test]
    fn test_round_trip_keeps_integer_numbers() {
        let raws = parse_collection(
            r#"[{"type": "temperature", "time": 1709294400, "value": 5, "unit": "C"}]"#,
        )
        .unwrap();
        let obs = RecordDispatcher::new().to_observation(&raws[0]).unwrap();
        assert_eq!(obs.value(), 5.0);
        assert_eq!(obs.to_raw(), raws[0]);
        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.contains(r#""value":5"#));
        assert!(!json.contains("5.0"));

        let forecasts = parse_collection(
            r#"[{"type": "precipitation", "place": "Horsens", "from": 1, "to": 4, "unit": "mm"}]"#,
        )
        .unwrap();
        let range = RecordDispatcher::new().to_forecast(&forecasts[0]).unwrap();
        assert_eq!((range.min(), range.max()), (1.0, 4.0));
        assert_eq!(range.to_raw(), forecasts[0]);
    }
}
