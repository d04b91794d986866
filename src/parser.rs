//! Export format detection and the unified extractor trait.
//!
//! Telegram Desktop exports chat history either as a JSON record set or as
//! an HTML archive. [`detect_format`] classifies raw bytes by a cheap
//! heuristic and [`create_extractor`] returns the matching [`Extractor`].
//!
//! # Example
//!
//! ```rust
//! use chatroster::parser::{ExportFormat, create_extractor, detect_format};
//!
//! let bytes = br#"{"messages": [{"from": "Alice Liddell", "from_id": "user1"}]}"#;
//! let format = detect_format(bytes);
//! assert_eq!(format, ExportFormat::Json);
//!
//! let candidates = create_extractor(format).extract(bytes)?;
//! assert_eq!(candidates.len(), 1);
//! # Ok::<(), chatroster::RosterError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::participant::RawCandidate;

/// Supported chat export formats.
///
/// # Example
///
/// ```rust
/// use chatroster::parser::ExportFormat;
/// use std::str::FromStr;
///
/// assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
/// assert_eq!(ExportFormat::from_str("htm").unwrap(), ExportFormat::Html);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Telegram Desktop "Machine-readable JSON" export (`result.json`)
    Json,

    /// Telegram Desktop HTML export (`messages.html`, `messages2.html`, ...)
    #[serde(alias = "htm")]
    Html,
}

impl ExportFormat {
    /// Returns the file extensions exports in this format use.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Json => &["json"],
            ExportFormat::Html => &["html", "htm"],
        }
    }

    /// Returns all names accepted by [`FromStr`](std::str::FromStr).
    pub fn all_names() -> &'static [&'static str] {
        &["json", "html", "htm"]
    }

    /// Returns all supported formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Json, ExportFormat::Html]
    }

    /// Guesses the format from a file name's extension (case-insensitive).
    ///
    /// Returns `None` when the extension is missing or not an export one.
    /// Used for admission checks only; ingestion always sniffs the bytes.
    ///
    /// ```rust
    /// use chatroster::parser::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_file_name("result.JSON"), Some(ExportFormat::Json));
    /// assert_eq!(ExportFormat::from_file_name("messages2.html"), Some(ExportFormat::Html));
    /// assert_eq!(ExportFormat::from_file_name("notes.txt"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        ExportFormat::all()
            .iter()
            .copied()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "Telegram JSON"),
            ExportFormat::Html => write!(f, "Telegram HTML"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(format!(
                "Unknown export format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Classifies raw export bytes.
///
/// Leading whitespace is skipped; a buffer whose first remaining byte is
/// `{` or `[` is JSON, anything else (including an empty buffer) is HTML.
/// This never fails and does not validate: the extractor rejects
/// malformed input.
///
/// ```rust
/// use chatroster::parser::{ExportFormat, detect_format};
///
/// assert_eq!(detect_format(b"  \n{\"messages\": []}"), ExportFormat::Json);
/// assert_eq!(detect_format(b"[1, 2]"), ExportFormat::Json);
/// assert_eq!(detect_format(b"<!DOCTYPE html>"), ExportFormat::Html);
/// assert_eq!(detect_format(b""), ExportFormat::Html);
/// ```
pub fn detect_format(bytes: &[u8]) -> ExportFormat {
    let first = bytes
        .iter()
        .copied()
        .find(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c'));

    match first {
        Some(b'{' | b'[') => ExportFormat::Json,
        _ => ExportFormat::Html,
    }
}

/// Extracts author candidates from one export buffer.
///
/// Implementations emit one [`RawCandidate`] per qualifying message, in
/// document order, and leave deduplication to the aggregator. Empty names
/// and the deleted-account sentinel are filtered here.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl Extractor for MyExtractor {
///     fn name(&self) -> &'static str { "Mine" }
///     fn format(&self) -> ExportFormat { ExportFormat::Json }
///
///     fn extract(&self, bytes: &[u8]) -> Result<Vec<RawCandidate>> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// Returns the human-readable name of this extractor.
    fn name(&self) -> &'static str;

    /// Returns the format this extractor decodes.
    fn format(&self) -> ExportFormat;

    /// Extracts candidates from an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Decode`](crate::RosterError::Decode) if the buffer is not well-formed for
    /// this format. Nothing is extracted from a buffer that fails to decode.
    fn extract(&self, bytes: &[u8]) -> Result<Vec<RawCandidate>>;
}

/// Creates an extractor for the specified format.
///
/// ```rust
/// use chatroster::parser::{ExportFormat, create_extractor};
///
/// let extractor = create_extractor(ExportFormat::Html);
/// assert_eq!(extractor.name(), "Telegram HTML");
/// ```
pub fn create_extractor(format: ExportFormat) -> Box<dyn Extractor> {
    match format {
        ExportFormat::Json => Box::new(crate::parsers::TelegramJsonExtractor::new()),
        ExportFormat::Html => Box::new(crate::parsers::TelegramHtmlExtractor::new()),
    }
}
