use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Serializes typed records back to their JSON wire shape
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn to_json<T: Serialize>(&self, records: &[T]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(json)
    }

    /// Write records as a JSON array, creating parent directories
    pub fn write_records<T: Serialize>(&self, records: &[T], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_json(records)?)?;

        info!(path = %path.display(), records = records.len(), "Wrote JSON records");
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
