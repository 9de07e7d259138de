/// Wire discriminant keys, in lookup order
pub const FIELD_TYPE: &str = "type";
pub const FIELD_CATEGORY: &str = "category";

/// Common wire fields
pub const FIELD_TIME: &str = "time";
pub const FIELD_PLACE: &str = "place";
pub const FIELD_VALUE: &str = "value";
pub const FIELD_UNIT: &str = "unit";

/// Category extension fields
pub const FIELD_DIRECTION: &str = "direction";
pub const FIELD_PRECIPITATION_TYPE: &str = "precipitation_type";

/// Forecast wire fields (`from`/`to` map to min/max)
pub const FIELD_FROM: &str = "from";
pub const FIELD_TO: &str = "to";
pub const FIELD_DIRECTIONS: &str = "directions";
pub const FIELD_PRECIPITATION_TYPES: &str = "precipitation_types";

/// Wire category names
pub const CATEGORY_TEMPERATURE: &str = "temperature";
pub const CATEGORY_WIND_SPEED: &str = "wind speed";
pub const CATEGORY_PRECIPITATION: &str = "precipitation";
pub const CATEGORY_CLOUD_COVERAGE: &str = "cloud coverage";

/// Default units per category
pub const UNIT_TEMPERATURE: &str = "C";
pub const UNIT_WIND_SPEED: &str = "m/s";
pub const UNIT_PRECIPITATION: &str = "mm";
pub const UNIT_CLOUD_COVERAGE: &str = "%";

/// Source layout
pub const DEFAULT_DATA_DIR: &str = "data";
pub const OBSERVATIONS_DIR: &str = "observations";
pub const FORECAST_DIR: &str = "forecast";
pub const DEFAULT_PLACE: &str = "Horsens";
pub const DEFAULT_CONFIG_FILE: &str = "weather-telemetry";
pub const ENV_PREFIX: &str = "WEATHER";

/// Display defaults
pub const DEFAULT_DECIMALS: usize = 2;
pub const NO_DATA: &str = "No data";
pub const NO_RECENT_MEASUREMENT: &str = "No recent measurement";
