//! Spreadsheet file formats.
//!
//! Large rosters are delivered as a file. [`OutputFormat`] names the file
//! format and [`write_to_format`] dispatches to the matching writer.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatroster::Result<()> {
//! use chatroster::format::{OutputFormat, write_to_format};
//! use chatroster::core::models::OutputConfig;
//! use chatroster::Participant;
//!
//! let roster = vec![Participant::new("user1", "John", "Doe")];
//! write_to_format(&roster, "participants.csv", OutputFormat::Csv, &OutputConfig::new())?;
//!
//! let format = OutputFormat::from_path("participants.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::RosterError;
use crate::participant::Participant;

/// Spreadsheet file format.
///
/// ```rust
/// use chatroster::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV rows, opens directly in spreadsheet applications
    #[default]
    Csv,

    /// JSON array of rows
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, RosterError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RosterError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: csv, json", ext),
            )),
        }
    }

    /// Default spreadsheet file name for a roster exported at `unix_time`.
    ///
    /// ```rust
    /// use chatroster::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.default_file_name(1705314600), "participants_1705314600.csv");
    /// ```
    pub fn default_file_name(&self, unix_time: i64) -> String {
        format!("participants_{}.{}", unix_time, self.extension())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a roster to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    participants: &[Participant],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), RosterError> {
    tracing::debug!(path, %format, rows = participants.len(), "writing spreadsheet");
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(participants, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(participants, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a roster to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    participants: &[Participant],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, RosterError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(participants, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(participants, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> RosterError {
    RosterError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json => "json-output",
            }
        ),
    )
}
