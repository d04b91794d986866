//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`SheetFormat`] - Spreadsheet format options
//!
//! ```rust
//! use chatroster::cli::SheetFormat;
//! use chatroster::format::OutputFormat;
//!
//! let format: OutputFormat = SheetFormat::Json.into();
//! assert_eq!(format.extension(), "json");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_FILES, QueueConfig};

/// Build a participant roster from Telegram chat exports (JSON or HTML).
///
/// Rosters shorter than 50 people are printed; longer ones are written
/// to a spreadsheet file.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatroster")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatroster result.json
    chatroster messages.html messages2.html messages3.html
    chatroster result.json -o members.csv
    chatroster result.json messages.html -f json")]
pub struct Args {
    /// Export files of one batch, processed in order
    #[arg(required = true, value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Spreadsheet path for large rosters [default: participants_<unix time>.<ext>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Spreadsheet format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: SheetFormat,

    /// Maximum number of files in one batch
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_FILES)]
    pub max_files: usize,

    /// Include the identity key column in spreadsheets
    #[arg(short = 'k', long)]
    pub keys: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "chatroster=trace")
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Queue configuration derived from the arguments.
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig::new().with_max_files(self.max_files)
    }
}

/// Spreadsheet format options.
///
/// - [`Csv`](SheetFormat::Csv) - semicolon-separated rows, opens in any spreadsheet app
/// - [`Json`](SheetFormat::Json) - array of row objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of rows
    Json,
}

impl std::fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetFormat::Csv => write!(f, "CSV"),
            SheetFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<SheetFormat> for crate::format::OutputFormat {
    fn from(format: SheetFormat) -> crate::format::OutputFormat {
        match format {
            SheetFormat::Csv => crate::format::OutputFormat::Csv,
            SheetFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
