use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, TelemetryError};
use crate::models::Observation;

/// Value and unit entered for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub value: f64,
    pub unit: Option<String>,
}

impl FieldGroup {
    pub fn new(value: f64, unit: Option<String>) -> Self {
        Self { value, unit }
    }
}

/// One submission: a reading for every category at the same place and time
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmissionForm {
    #[validate(length(min = 1))]
    pub time: String,

    #[validate(length(min = 1))]
    pub place: String,

    pub temperature: FieldGroup,
    pub precipitation: FieldGroup,
    pub precipitation_type: String,
    pub wind: FieldGroup,
    pub direction: String,
    pub cloud_coverage: FieldGroup,
}

impl SubmissionForm {
    /// Produce the four observations in submission order:
    /// temperature, precipitation, wind speed, cloud coverage.
    pub fn build(&self) -> Result<Vec<Observation>> {
        self.validate()?;

        for (field, group) in [
            ("temperature", &self.temperature),
            ("precipitation", &self.precipitation),
            ("wind", &self.wind),
            ("cloud_coverage", &self.cloud_coverage),
        ] {
            if !group.value.is_finite() {
                return Err(TelemetryError::NonFiniteValue { field });
            }
        }

        Ok(vec![
            Observation::temperature(
                self.time.as_str(),
                self.place.as_str(),
                self.temperature.value,
                self.temperature.unit.clone(),
            ),
            Observation::precipitation(
                self.time.as_str(),
                self.place.as_str(),
                self.precipitation.value,
                self.precipitation.unit.clone(),
                Some(self.precipitation_type.clone()),
            ),
            Observation::wind_speed(
                self.time.as_str(),
                self.place.as_str(),
                self.wind.value,
                self.wind.unit.clone(),
                Some(self.direction.clone()),
            ),
            Observation::cloud_coverage(
                self.time.as_str(),
                self.place.as_str(),
                self.cloud_coverage.value,
                self.cloud_coverage.unit.clone(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::processors::RecordDispatcher;

    fn sample_form() -> SubmissionForm {
        SubmissionForm {
            time: "2024-03-01T12:00".to_string(),
            place: "Aarhus".to_string(),
            temperature: FieldGroup::new(4.5, Some("C".to_string())),
            precipitation: FieldGroup::new(1.2, None),
            precipitation_type: "rain".to_string(),
            wind: FieldGroup::new(6.0, Some("m/s".to_string())),
            direction: "SW".to_string(),
            cloud_coverage: FieldGroup::new(80.0, Some("%".to_string())),
        }
    }

    #[test]
    fn test_build_order_and_fields() {
        let observations = sample_form().build().unwrap();

        let categories: Vec<Option<Category>> =
            observations.iter().map(Observation::known_category).collect();
        assert_eq!(
            categories,
            vec![
                Some(Category::Temperature),
                Some(Category::Precipitation),
                Some(Category::WindSpeed),
                Some(Category::CloudCoverage),
            ]
        );

        assert!(observations.iter().all(|o| o.place() == Some("Aarhus")));
        assert_eq!(observations[1].unit(), Some("mm"));
        assert_eq!(observations[1].precipitation_type(), Some("rain"));
        assert_eq!(observations[2].direction(), Some("SW"));
    }

    #[test]
    fn test_rejects_blank_place() {
        let mut form = sample_form();
        form.place = String::new();
        assert!(matches!(form.build(), Err(TelemetryError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_finite_value() {
        let mut form = sample_form();
        form.wind.value = f64::NAN;
        assert!(matches!(
            form.build(),
            Err(TelemetryError::NonFiniteValue { field: "wind" })
        ));
    }

    #[test]
    fn test_payload_dispatches_back() {
        let observations = sample_form().build().unwrap();
        let raws: Vec<_> = observations.iter().map(Observation::to_raw).collect();

        let outcome = RecordDispatcher::new().convert_observations(&raws).unwrap();
        assert_eq!(outcome.records, observations);
    }
}
