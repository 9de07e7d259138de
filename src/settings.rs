use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::processors::{ConversionPolicy, RecordDispatcher};
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR, DEFAULT_DECIMALS, DEFAULT_PLACE, ENV_PREFIX,
};

/// Runtime settings, layered as: built-in defaults, then the config file,
/// then `WEATHER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub default_place: String,
    pub forecast_policy: ConversionPolicy,
    pub enforce_range_order: bool,
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_place: DEFAULT_PLACE.to_string(),
            forecast_policy: ConversionPolicy::FailFast,
            enforce_range_order: false,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Settings {
    /// Load settings. An explicit path must exist; otherwise
    /// `weather-telemetry.{toml,json,...}` in the working directory is
    /// used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("default_place", DEFAULT_PLACE)?
            .set_default("forecast_policy", "fail_fast")?
            .set_default("enforce_range_order", false)?
            .set_default("decimals", DEFAULT_DECIMALS as i64)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn dispatcher(&self) -> RecordDispatcher {
        RecordDispatcher::new()
            .with_policy(self.forecast_policy)
            .with_range_order_enforced(self.enforce_range_order)
    }
}
