use std::path::Path;

use eyre::Result;
use gasoscan_cli::config::{self, GasoscanConfig};
use gasoscan_cli::{input, render};
use gasoscan_core::models::blood_gas::BloodGasInput;
use gasoscan_core::models::extraction::ExtractedValues;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: gasoscan <command>

commands:
  analyze <file.json>             analyze a blood gas input file
  scan <report.txt>               read values from OCR text, then analyze
  parse-response <response.txt>   read values from a vision model answer, then analyze
  values key=value ...            analyze inline values (ph, pco2, hco3, na, cl, albumin)
  config show | init              print or write the configuration";

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var_os("GASOSCAN_LOG_JSON").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return Err(eyre::eyre!("missing command\n\n{USAGE}"));
    };

    match command.as_str() {
        "analyze" => {
            let config = config::load_config()?;
            let input = input::read_input_file(single_path(rest)?)?;
            run(input, &config)
        }
        "scan" => {
            let config = config::load_config()?;
            let text = read_text(single_path(rest)?)?;
            run_extracted(gasoscan_extract::parse_report_text(&text), &config)
        }
        "parse-response" => {
            let config = config::load_config()?;
            let text = read_text(single_path(rest)?)?;
            run_extracted(gasoscan_extract::parse_model_response(&text)?, &config)
        }
        "values" => {
            let config = config::load_config()?;
            run(input::parse_assignments(rest)?, &config)
        }
        "config" => match rest.first().map(String::as_str) {
            Some("show") | None => {
                let config = config::load_config()?;
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            Some("init") => {
                let path = config::save_config(&GasoscanConfig::default())?;
                println!("{}", path.display());
                Ok(())
            }
            Some(other) => Err(eyre::eyre!("unknown config command: {other}\n\n{USAGE}")),
        },
        other => Err(eyre::eyre!("unknown command: {other}\n\n{USAGE}")),
    }
}

fn run_extracted(extracted: ExtractedValues, config: &GasoscanConfig) -> Result<()> {
    let missing = extracted.missing_required();
    if !missing.is_empty() {
        tracing::warn!(?missing, "extraction did not recover every required value");
    }
    run(extracted.into_input(), config)
}

fn run(mut input: BloodGasInput, config: &GasoscanConfig) -> Result<()> {
    let filled = input::apply_defaults(&mut input, config);
    if !filled.is_empty() {
        tracing::info!(?filled, "filled missing values from manual defaults");
    }

    let record = input
        .validate()
        .map_err(|e| eyre::eyre!("input rejected: {e}"))?;
    let diagnosis = gasoscan_analyzer::analyze(record);
    println!("{}", render::render(&diagnosis, config.output)?);
    Ok(())
}

fn single_path(rest: &[String]) -> Result<&Path> {
    match rest {
        [path] => Ok(Path::new(path)),
        _ => Err(eyre::eyre!("expected exactly one file argument\n\n{USAGE}")),
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}
