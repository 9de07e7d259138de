use crate::analyzers::{LatestMeasurements, WeatherSummary};
use crate::models::{ForecastRange, WeatherEntity};
use crate::utils::constants::{
    DEFAULT_DECIMALS, NO_DATA, NO_RECENT_MEASUREMENT, UNIT_CLOUD_COVERAGE, UNIT_PRECIPITATION,
    UNIT_TEMPERATURE, UNIT_WIND_SPEED,
};

/// Plain-text rendering of summaries, latest values and forecasts
pub struct TextReport {
    decimals: usize,
}

impl TextReport {
    pub fn new() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Decimal places for averaged values
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn render_summary(&self, place: &str, summary: &WeatherSummary) -> String {
        let mut out = String::new();

        out.push_str(&format!("=== Weather Summary: {} ===\n", place));
        out.push_str(&format!(
            "Minimum Temperature: {}\n",
            plain(summary.min_temperature(), UNIT_TEMPERATURE)
        ));
        out.push_str(&format!(
            "Maximum Temperature: {}\n",
            plain(summary.max_temperature(), UNIT_TEMPERATURE)
        ));
        out.push_str(&format!(
            "Precipitation: {}\n",
            plain(summary.total_precipitation(), UNIT_PRECIPITATION)
        ));
        out.push_str(&format!(
            "Wind speed: {}\n",
            self.fixed(summary.average_wind_speed(), UNIT_WIND_SPEED)
        ));
        out.push_str(&format!(
            "Cloud coverage: {}\n",
            self.fixed(summary.average_cloud_coverage(), UNIT_CLOUD_COVERAGE)
        ));

        if summary.unrecognized_observations > 0 {
            out.push_str(&format!(
                "Unrecognized observations: {}\n",
                summary.unrecognized_observations
            ));
        }

        out
    }

    pub fn render_latest(&self, latest: &LatestMeasurements<'_>) -> String {
        let mut out = String::from("=== Latest Measurements ===\n");

        for (category, observation) in latest.entries() {
            let line = match observation {
                Some(obs) => {
                    let mut line = with_unit(obs.value().to_string(), obs.unit().unwrap_or(""));
                    let details = render_details(obs);
                    if !details.is_empty() {
                        line.push_str(&format!(" ({})", details.join(", ")));
                    }
                    line
                }
                None => NO_RECENT_MEASUREMENT.to_string(),
            };
            out.push_str(&format!("{}: {}\n", category.label(), line));
        }

        out
    }

    pub fn render_forecast(&self, forecast: &[ForecastRange]) -> String {
        if forecast.is_empty() {
            return "No forecast available\n".to_string();
        }

        let mut out = String::new();
        for range in forecast {
            let unit = range.unit();
            out.push_str(&format!("Type: {}\n", range.category_name()));
            if let Some(time) = range.time() {
                out.push_str(&format!("Time: {}\n", time));
            }
            out.push_str(&format!("From: {}\n", with_unit(range.min().to_string(), unit)));
            out.push_str(&format!("To: {}\n", with_unit(range.max().to_string(), unit)));
            for detail in render_details(range) {
                out.push_str(&format!("{}\n", detail));
            }
            out.push_str("---\n");
        }

        out
    }

    fn fixed(&self, value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => with_unit(format!("{:.*}", self.decimals, v), unit),
            None => NO_DATA.to_string(),
        }
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension lines for whatever optional fields the entity carries.
/// Driven purely by which optional fields are present, never by category name.
pub fn render_details<E: WeatherEntity + ?Sized>(entity: &E) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(direction) = entity.direction() {
        details.push(format!("Direction: {}", direction));
    }
    if let Some(kind) = entity.precipitation_type() {
        details.push(format!("Precipitation Type: {}", kind));
    }
    if let Some(types) = entity.expected_types() {
        details.push(format!("Expected Types: {}", types.join(", ")));
    }
    if let Some(directions) = entity.expected_directions() {
        details.push(format!("Expected Directions: {}", directions.join(", ")));
    }

    details
}

fn plain(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => with_unit(v.to_string(), unit),
        None => NO_DATA.to_string(),
    }
}

fn with_unit(value: String, unit: &str) -> String {
    match unit {
        "" => value,
        "C" | "F" => format!("{}°{}", value, unit),
        _ => format!("{} {}", value, unit),
    }
}
