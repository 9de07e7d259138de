use tracing::debug;

use crate::analyzers::LatestMeasurements;
use crate::models::{Category, Observation};

/// Running statistics over the observations of one category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryStats {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl CategoryStats {
    fn record(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }

    /// Sum of all values, absent when nothing was observed
    pub fn total(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum)
        } else {
            None
        }
    }
}

/// Derived statistics for one display context.
///
/// Every accessor returns `None` when the category had no observations,
/// so "no data" can never be mistaken for a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherSummary {
    pub temperature: CategoryStats,
    pub precipitation: CategoryStats,
    pub wind_speed: CategoryStats,
    pub cloud_coverage: CategoryStats,
    pub total_observations: usize,
    pub unrecognized_observations: usize,
}

impl WeatherSummary {
    pub fn min_temperature(&self) -> Option<f64> {
        self.temperature.min
    }

    pub fn max_temperature(&self) -> Option<f64> {
        self.temperature.max
    }

    pub fn total_precipitation(&self) -> Option<f64> {
        self.precipitation.total()
    }

    pub fn average_wind_speed(&self) -> Option<f64> {
        self.wind_speed.mean()
    }

    pub fn average_cloud_coverage(&self) -> Option<f64> {
        self.cloud_coverage.mean()
    }

    pub fn stats(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Temperature => &self.temperature,
            Category::Precipitation => &self.precipitation,
            Category::WindSpeed => &self.wind_speed,
            Category::CloudCoverage => &self.cloud_coverage,
        }
    }

    fn stats_mut(&mut self, category: Category) -> &mut CategoryStats {
        match category {
            Category::Temperature => &mut self.temperature,
            Category::Precipitation => &mut self.precipitation,
            Category::WindSpeed => &mut self.wind_speed,
            Category::CloudCoverage => &mut self.cloud_coverage,
        }
    }

    pub fn has_data(&self) -> bool {
        Category::ALL.iter().any(|c| !self.stats(*c).is_empty())
    }
}

pub struct WeatherAnalyzer;

impl WeatherAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a collection of observations to per-category statistics.
    /// No place or time filtering happens here; the collection is
    /// assumed to already be scoped to one display context.
    pub fn summarize(&self, observations: &[Observation]) -> WeatherSummary {
        let mut summary = WeatherSummary {
            total_observations: observations.len(),
            ..WeatherSummary::default()
        };

        for observation in observations {
            match observation.known_category() {
                Some(category) => summary.stats_mut(category).record(observation.value()),
                None => summary.unrecognized_observations += 1,
            }
        }

        debug!(
            total = summary.total_observations,
            unrecognized = summary.unrecognized_observations,
            "Summarized observations"
        );

        summary
    }

    pub fn latest<'a>(&self, observations: &'a [Observation]) -> LatestMeasurements<'a> {
        LatestMeasurements::select(observations)
    }
}

impl Default for WeatherAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
