pub mod latest;
pub mod weather_analyzer;

pub use latest::{latest_of, LatestMeasurements};
pub use weather_analyzer::{CategoryStats, WeatherAnalyzer, WeatherSummary};
