use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{
    CATEGORY_CLOUD_COVERAGE, CATEGORY_PRECIPITATION, CATEGORY_TEMPERATURE, CATEGORY_WIND_SPEED,
    UNIT_CLOUD_COVERAGE, UNIT_PRECIPITATION, UNIT_TEMPERATURE, UNIT_WIND_SPEED,
};

/// The four weather categories the service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "wind speed", alias = "windSpeed")]
    WindSpeed,
    #[serde(rename = "precipitation")]
    Precipitation,
    #[serde(rename = "cloud coverage", alias = "cloudCoverage")]
    CloudCoverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Precipitation,
        Category::WindSpeed,
        Category::CloudCoverage,
    ];

    /// Parse a discriminant string. Accepts the wire spelling
    /// (`wind speed`) as well as camelCase (`windSpeed`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            CATEGORY_TEMPERATURE => Some(Category::Temperature),
            CATEGORY_WIND_SPEED | "windSpeed" => Some(Category::WindSpeed),
            CATEGORY_PRECIPITATION => Some(Category::Precipitation),
            CATEGORY_CLOUD_COVERAGE | "cloudCoverage" => Some(Category::CloudCoverage),
            _ => None,
        }
    }

    /// Wire name used when records are written back out
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Temperature => CATEGORY_TEMPERATURE,
            Category::WindSpeed => CATEGORY_WIND_SPEED,
            Category::Precipitation => CATEGORY_PRECIPITATION,
            Category::CloudCoverage => CATEGORY_CLOUD_COVERAGE,
        }
    }

    pub fn default_unit(&self) -> &'static str {
        match self {
            Category::Temperature => UNIT_TEMPERATURE,
            Category::WindSpeed => UNIT_WIND_SPEED,
            Category::Precipitation => UNIT_PRECIPITATION,
            Category::CloudCoverage => UNIT_CLOUD_COVERAGE,
        }
    }

    /// Human readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::WindSpeed => "Wind speed",
            Category::Precipitation => "Precipitation",
            Category::CloudCoverage => "Cloud coverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
