//! Output configuration for roster renderers.

use chrono::{DateTime, Local};

/// Configuration for spreadsheet output.
/// Controls delimiter, export date stamp and optional columns.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// CSV field delimiter (default `;`)
    pub delimiter: u8,
    /// Export date written on every row; `None` means "now" at write time
    pub export_date: Option<DateTime<Local>>,
    /// Include the identity key column
    pub include_keys: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            export_date: None,
            include_keys: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_export_date(mut self, date: DateTime<Local>) -> Self {
        self.export_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_keys(mut self) -> Self {
        self.include_keys = true;
        self
    }

    /// Returns the export date formatted as `YYYY-MM-DD HH:MM:SS`.
    pub fn export_date_string(&self) -> String {
        self.export_date
            .unwrap_or_else(Local::now)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
