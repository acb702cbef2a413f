use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Validate OCR-scanned deed recordings.
#[derive(Debug, Parser)]
#[command(name = "deedcheck", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub reference: ReferenceArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract, validate, and print a report. Exits 2 when rejected.
    Validate {
        /// Deed text file, or `-` for stdin.
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Resolve a county name against the reference table.
    Match { name: String },
    /// Print the extracted record without validating it.
    Extract {
        /// Deed text file, or `-` for stdin.
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Card,
}

/// Reference data locations.
#[derive(Debug, Args)]
pub struct ReferenceArgs {
    /// JSON array of `{"name", "tax_rate"}` entries.
    #[arg(
        long,
        global = true,
        env = "DEEDCHECK_JURISDICTIONS",
        default_value = "data/counties.json"
    )]
    pub jurisdictions: PathBuf,

    /// JSON file with validation thresholds. Flags below override it.
    #[arg(long, global = true, env = "DEEDCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Per-field threshold overrides.
#[derive(Debug, Args)]
pub struct ThresholdArgs {
    #[arg(long, global = true, env = "DEEDCHECK_AMOUNT_TOLERANCE")]
    pub amount_tolerance: Option<f64>,

    #[arg(long, global = true, env = "DEEDCHECK_MIN_FUZZY_RATIO")]
    pub min_fuzzy_ratio: Option<f64>,

    #[arg(long, global = true, env = "DEEDCHECK_LOW_CONFIDENCE_THRESHOLD")]
    pub low_confidence_threshold: Option<f64>,
}
