//! Unified error types for chatroster.
//!
//! This module provides a single [`RosterError`] enum that covers every
//! failure in the library: decoding an export, fetching its bytes,
//! admitting a file into a pending queue, and writing the roster out.
//!
//! # Batch semantics
//!
//! [`RosterError::Decode`] and [`RosterError::Transport`] both abort the
//! whole batch they occur in. The ingestion driver never returns a partial
//! roster next to an error.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatroster operations.
///
/// # Example
///
/// ```rust
/// use chatroster::error::Result;
/// use chatroster::Participant;
///
/// fn my_function() -> Result<Vec<Participant>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, RosterError>;

/// The error type for all chatroster operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterError {
    /// An export buffer is not well-formed for the schema it was detected as.
    ///
    /// Contains the format being decoded, the underlying decode error and,
    /// when known, the label of the input (usually its file name).
    #[error("Failed to decode {format} export{}: {source}", label.as_ref().map(|l| format!(" ({l})")).unwrap_or_default())]
    Decode {
        /// The format being decoded (e.g., "Telegram JSON")
        format: &'static str,
        /// The underlying decode error
        #[source]
        source: DecodeErrorKind,
        /// Input label, if available
        label: Option<String>,
    },

    /// The bytes of an input could not be fetched.
    ///
    /// Raised before the bytes ever reach an extractor. Treated exactly
    /// like [`RosterError::Decode`] by the ingestion driver.
    #[error("Failed to fetch '{label}': {source}")]
    Transport {
        /// Label of the input that could not be fetched
        label: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pending queue already holds the maximum number of files.
    #[error("File limit reached ({limit}). Clear the queue or process the queued files first")]
    QueueFull {
        /// Maximum number of files per batch
        limit: usize,
    },

    /// The file name does not have an accepted export extension.
    #[error("Unsupported file '{name}'. Expected a JSON or HTML chat export")]
    UnsupportedFile {
        /// Name of the rejected file
        name: String,
    },

    /// A batch was requested but nothing is queued.
    #[error("No files queued. Send chat export files first")]
    EmptyQueue,

    /// An unknown output format or extension was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

/// Kinds of decode errors that can occur.
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// JSON syntax or schema error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Markup buffer is not valid UTF-8 text
    #[error("{0}")]
    Utf8(#[from] std::str::Utf8Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl RosterError {
    /// Creates a decode error for the Telegram JSON format.
    pub fn json_decode(source: serde_json::Error, label: Option<String>) -> Self {
        RosterError::Decode {
            format: "Telegram JSON",
            source: DecodeErrorKind::Json(source),
            label,
        }
    }

    /// Creates a decode error for the Telegram HTML format.
    pub fn html_decode(source: std::str::Utf8Error, label: Option<String>) -> Self {
        RosterError::Decode {
            format: "Telegram HTML",
            source: DecodeErrorKind::Utf8(source),
            label,
        }
    }

    /// Creates a transport error for the input with the given label.
    pub fn transport(label: impl Into<String>, source: io::Error) -> Self {
        RosterError::Transport {
            label: label.into(),
            source,
        }
    }

    /// Creates an unsupported file error.
    pub fn unsupported_file(name: impl Into<String>) -> Self {
        RosterError::UnsupportedFile { name: name.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        RosterError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches an input label to a decode error that has none.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_label(self, input: &str) -> Self {
        match self {
            RosterError::Decode {
                format,
                source,
                label: None,
            } => RosterError::Decode {
                format,
                source,
                label: Some(input.to_string()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, RosterError::Decode { .. })
    }

    /// Returns `true` if this is a transport error.
    pub fn is_transport(&self) -> bool {
        matches!(self, RosterError::Transport { .. })
    }

    /// Returns `true` if this error aborts an ingestion batch.
    pub fn aborts_batch(&self) -> bool {
        self.is_decode() || self.is_transport()
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, RosterError::Io(_))
    }

    /// Returns `true` if this is a queue admission error.
    pub fn is_admission(&self) -> bool {
        matches!(
            self,
            RosterError::QueueFull { .. }
                | RosterError::UnsupportedFile { .. }
                | RosterError::EmptyQueue
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
