//! # Chatroster
//!
//! A Rust library for building a participant roster from Telegram Desktop
//! chat exports.
//!
//! ## Overview
//!
//! Telegram Desktop exports a chat either as one machine-readable JSON file
//! (`result.json`) or as a series of HTML pages (`messages.html`,
//! `messages2.html`, ...). Chatroster reads any mix of both, finds every
//! message author, and reduces them to a deduplicated list of
//! [`Participant`]s:
//!
//! 1. **Detect** - [`parser::detect_format`] sniffs each buffer
//! 2. **Extract** - an [`Extractor`](parser::Extractor) pulls author candidates
//! 3. **Normalize** - [`participant::normalize`] splits names and picks the identity key
//! 4. **Aggregate** - [`core::ParticipantAggregator`] deduplicates (later inputs win)
//! 5. **Shape** - [`core::select_shape`] decides between an inline list and a spreadsheet
//!
//! ## Quick Start
//!
//! ```rust
//! use chatroster::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = br#"{"messages": [
//!         {"type": "message", "from": "John Doe", "from_id": "user1001"},
//!         {"type": "message", "from": "John Doe", "from_id": "user1001"},
//!         {"type": "message", "from": "Deleted Account", "from_id": "user0"}
//!     ]}"#;
//!
//!     let roster = ingest_batch(&[("result.json", &json[..])])?;
//!     assert_eq!(roster.len(), 1);
//!
//!     match select_shape(roster.len()) {
//!         OutputShape::InlineList => println!("{}", to_listing(&roster)),
//!         OutputShape::Spreadsheet => { /* write_to_format(...) */ }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportFormat`](parser::ExportFormat), [`detect_format`](parser::detect_format), the [`Extractor`](parser::Extractor) trait
//! - [`parsers`] - [`TelegramJsonExtractor`](parsers::TelegramJsonExtractor), [`TelegramHtmlExtractor`](parsers::TelegramHtmlExtractor)
//! - [`participant`] - [`Participant`], [`RawCandidate`](participant::RawCandidate), name normalization
//! - [`core`] - aggregation, batch ingestion, output shape and renderers
//! - [`format`] - spreadsheet file formats and [`write_to_format`](format::write_to_format)
//! - [`session`] - per-user pending-file queues
//! - [`config`] - [`QueueConfig`](config::QueueConfig)
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - [`RosterError`], [`Result`]
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `csv-output` | CSV spreadsheets | `csv` |
//! | `json-output` | JSON spreadsheets | - |
//! | `cli` | Command-line binary | `clap`, `tracing-subscriber` |
//! | `full` | All of the above (default) | |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsers;
pub mod participant;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{Result, RosterError};
pub use participant::Participant;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatroster::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::Participant;
    pub use crate::participant::{RawCandidate, normalize};

    // Error types
    pub use crate::error::{Result, RosterError};

    // Detection and extraction
    pub use crate::parser::{ExportFormat, Extractor, create_extractor, detect_format};
    pub use crate::parsers::{TelegramHtmlExtractor, TelegramJsonExtractor};

    // Aggregation and ingestion
    pub use crate::core::{
        BatchIngestor, OutputShape, ParticipantAggregator, SPREADSHEET_THRESHOLD, ingest_batch,
        ingest_files, select_shape,
    };

    // Output
    pub use crate::core::models::OutputConfig;
    pub use crate::core::output::to_listing;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    // Queues
    pub use crate::config::QueueConfig;
    pub use crate::session::{PendingFile, PendingQueue};
}
