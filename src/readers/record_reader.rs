use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, TelemetryError};
use crate::models::{parse_collection, RawRecord};
use crate::utils::constants::{FORECAST_DIR, OBSERVATIONS_DIR};

/// Local stand-in for the retrieval endpoints.
///
/// Collections live under `{root}/observations/{place}.json` and
/// `{root}/forecast/{place}.json`, each a JSON array of raw records.
#[derive(Debug, Clone)]
pub struct RecordSource {
    root: PathBuf,
}

impl RecordSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn observations_path(&self, place: &str) -> Result<PathBuf> {
        Ok(self.root.join(OBSERVATIONS_DIR).join(place_file(place)?))
    }

    pub fn forecast_path(&self, place: &str) -> Result<PathBuf> {
        Ok(self.root.join(FORECAST_DIR).join(place_file(place)?))
    }

    pub async fn load_observations(&self, place: &str) -> Result<Vec<RawRecord>> {
        read_collection(&self.observations_path(place)?).await
    }

    pub async fn load_forecast(&self, place: &str) -> Result<Vec<RawRecord>> {
        read_collection(&self.forecast_path(place)?).await
    }
}

/// Read a JSON array of raw records from disk. An empty file is an
/// empty collection, a missing file is an I/O error.
pub async fn read_collection(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = tokio::fs::read_to_string(path).await?;
    let records = parse_collection(&contents)?;

    info!(path = %path.display(), records = records.len(), "Loaded raw records");
    Ok(records)
}

fn place_file(place: &str) -> Result<String> {
    let trimmed = place.trim();
    if trimmed.is_empty()
        || trimmed.contains(['/', '\\'])
        || trimmed == "."
        || trimmed == ".."
    {
        return Err(TelemetryError::InvalidFormat(format!(
            "Invalid place name: '{}'",
            place
        )));
    }
    Ok(format!("{}.json", trimmed))
}
