use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};

use crate::analyzers::WeatherAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::models::RawRecord;
use crate::processors::{ConversionPolicy, FieldGroup, SubmissionForm};
use crate::readers::{read_collection, RecordSource};
use crate::settings::Settings;
use crate::utils::generate_default_submission_filename;
use crate::writers::{JsonWriter, TextReport};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let source = RecordSource::new(&settings.data_dir);
    let report = TextReport::new().with_decimals(settings.decimals);

    match cli.command {
        Commands::Summary { place, input } => {
            let place = place.unwrap_or_else(|| settings.default_place.clone());
            let raws = load(&source, input.as_deref(), &place, Collection::Observations).await?;

            // Observations only fail on malformed records; always fail fast
            let dispatcher = settings.dispatcher().with_policy(ConversionPolicy::FailFast);
            let observations = dispatcher
                .convert_observations(&raws)
                .with_context(|| format!("Failed to convert observations for {}", place))?
                .into_records();

            let analyzer = WeatherAnalyzer::new();
            let summary = analyzer.summarize(&observations);
            let latest = analyzer.latest(&observations);

            println!("{}", report.render_summary(&place, &summary));
            println!("{}", report.render_latest(&latest));
        }

        Commands::Forecast {
            place,
            input,
            skip_invalid,
        } => {
            let place = place.unwrap_or_else(|| settings.default_place.clone());
            let raws = load(&source, input.as_deref(), &place, Collection::Forecast).await?;

            let mut dispatcher = settings.dispatcher();
            if skip_invalid {
                dispatcher = dispatcher.with_policy(ConversionPolicy::SkipInvalid);
            }

            let outcome = dispatcher
                .convert_forecasts(&raws)
                .with_context(|| format!("Failed to convert forecast for {}", place))?;

            for rejected in &outcome.rejected {
                warn!(index = rejected.index, error = %rejected.error, "Forecast record skipped");
            }

            println!("=== Forecast: {} ===", place);
            print!("{}", report.render_forecast(&outcome.records));
        }

        Commands::Submit {
            time,
            place,
            temp_value,
            temp_unit,
            precip_value,
            precip_unit,
            precipitation_type,
            wind_value,
            wind_unit,
            direction,
            cloud_value,
            cloud_unit,
            output,
            stdout,
        } => {
            let form = SubmissionForm {
                time,
                place,
                temperature: FieldGroup::new(temp_value, temp_unit),
                precipitation: FieldGroup::new(precip_value, precip_unit),
                precipitation_type,
                wind: FieldGroup::new(wind_value, wind_unit),
                direction,
                cloud_coverage: FieldGroup::new(cloud_value, cloud_unit),
            };

            let observations = form.build().context("Invalid submission")?;
            let writer = JsonWriter::new();

            if stdout {
                println!("{}", writer.to_json(&observations)?);
            } else {
                let output = output.unwrap_or_else(generate_default_submission_filename);
                writer
                    .write_records(&observations, &output)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                println!(
                    "Wrote {} observations to {}",
                    observations.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Collection {
    Observations,
    Forecast,
}

async fn load(
    source: &RecordSource,
    input: Option<&Path>,
    place: &str,
    collection: Collection,
) -> anyhow::Result<Vec<RawRecord>> {
    let path = match input {
        Some(path) => path.to_path_buf(),
        None => match collection {
            Collection::Observations => source.observations_path(place)?,
            Collection::Forecast => source.forecast_path(place)?,
        },
    };

    info!(place, path = %path.display(), "Loading {:?}", collection);
    read_collection(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
