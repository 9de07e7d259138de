use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-telemetry")]
#[command(about = "Normalize weather observations and forecasts and summarize them per place")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Configuration file path")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary statistics and latest measurements for a place
    Summary {
        #[arg(short, long, help = "Place to report on [default: configured default place]")]
        place: Option<String>,

        #[arg(short, long, help = "Read observations from this file instead of the data directory")]
        input: Option<PathBuf>,
    },

    /// Forecast ranges for a place
    Forecast {
        #[arg(short, long, help = "Place to report on [default: configured default place]")]
        place: Option<String>,

        #[arg(short, long, help = "Read forecasts from this file instead of the data directory")]
        input: Option<PathBuf>,

        #[arg(long, help = "Skip forecasts that cannot be converted instead of failing")]
        skip_invalid: bool,
    },

    /// Build a submission payload with one reading per category
    Submit {
        #[arg(long)]
        time: String,

        #[arg(long)]
        place: String,

        #[arg(long, allow_hyphen_values = true)]
        temp_value: f64,

        #[arg(long)]
        temp_unit: Option<String>,

        #[arg(long)]
        precip_value: f64,

        #[arg(long)]
        precip_unit: Option<String>,

        #[arg(long, default_value = "")]
        precipitation_type: String,

        #[arg(long)]
        wind_value: f64,

        #[arg(long)]
        wind_unit: Option<String>,

        #[arg(long, default_value = "")]
        direction: String,

        #[arg(long)]
        cloud_value: f64,

        #[arg(long)]
        cloud_unit: Option<String>,

        #[arg(
            short,
            long,
            help = "Output JSON file path [default: output/submission-{YYMMDD}.json]"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Print the payload instead of writing a file")]
        stdout: bool,
    },
}
