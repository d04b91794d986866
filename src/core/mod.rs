//! Core aggregation logic for chatroster.
//!
//! This module contains:
//! - [`aggregator`] - Cross-file deduplication by identity key
//! - [`ingest`] - Batch driver: detect, extract, normalize, merge
//! - [`shape`] - Inline listing vs. spreadsheet decision
//! - [`models`] - Output configuration
//! - [`output`] - Renderers (listing, CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatroster::core::{OutputShape, ingest_batch, select_shape};
//!
//! let json = br#"{"messages": [{"from": "John Doe", "from_id": "user1001"}]}"#;
//! let roster = ingest_batch(&[("result.json", &json[..])])?;
//! assert_eq!(select_shape(roster.len()), OutputShape::InlineList);
//! # Ok::<(), chatroster::RosterError>(())
//! ```

pub mod aggregator;
pub mod ingest;
pub mod models;
pub mod output;
pub mod shape;

// Re-export main types for convenience
pub use aggregator::ParticipantAggregator;
pub use ingest::{BatchIngestor, ingest_batch, ingest_files};
pub use models::OutputConfig;
pub use shape::{OutputShape, SPREADSHEET_THRESHOLD, select_shape};

pub use output::to_listing;
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
