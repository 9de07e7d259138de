use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default submission filename with format: submission-{YYMMDD}.json
pub fn generate_default_submission_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("submission-{:02}{:02}{:02}.json", year, month, day);
    PathBuf::from("output").join(filename)
}
