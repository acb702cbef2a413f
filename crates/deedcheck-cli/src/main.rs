use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use deedcheck_core::{ValidationConfig, extract};
use deedcheck_match::JurisdictionMatcher;
use deedcheck_pipeline::Pipeline;

mod cli;
mod display;

use cli::{Cli, Commands, Format, ThresholdArgs};

/// Exit status for a deed that failed validation.
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("deedcheck error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing()?;
    tracing::debug!("deedcheck v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Extract { input } => {
            let record = extract(&read_input(&input)?);
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match { name } => {
            let config = load_config(cli.reference.config.as_deref(), &cli.thresholds)?;
            let table = deedcheck_store::load_jurisdictions(&cli.reference.jurisdictions)
                .context("failed to load jurisdiction table")?;
            let matcher =
                JurisdictionMatcher::new(Arc::new(table)).with_min_ratio(config.min_fuzzy_ratio);
            let (m, tax_rate) = matcher.resolve(&name)?;
            display::print_match(&m, tax_rate);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { input, format } => {
            let config = load_config(cli.reference.config.as_deref(), &cli.thresholds)?;
            let table = deedcheck_store::load_jurisdictions(&cli.reference.jurisdictions)
                .context("failed to load jurisdiction table")?;
            let pipeline = Pipeline::new(Arc::new(table), config);

            let report = pipeline.process_and_report(&read_input(&input)?);
            match format {
                Format::Json => println!("{}", report.to_json_pretty()?),
                Format::Card => display::print_report_card(&report)?,
            }

            if report.is_approved() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_REJECTED))
            }
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// File thresholds first, then flag/env overrides on top.
fn load_config(path: Option<&Path>, overrides: &ThresholdArgs) -> anyhow::Result<ValidationConfig> {
    let mut config = match path {
        Some(path) => deedcheck_store::load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ValidationConfig::default(),
    };

    if let Some(v) = overrides.amount_tolerance {
        config.amount_tolerance = v;
    }
    if let Some(v) = overrides.min_fuzzy_ratio {
        config.min_fuzzy_ratio = v;
    }
    if let Some(v) = overrides.low_confidence_threshold {
        config.low_confidence_threshold = v;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read deed text from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
