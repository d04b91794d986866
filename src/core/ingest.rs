//! Batch ingestion: detect, extract, normalize, merge.
//!
//! A batch is an ordered list of export buffers that produce one roster.
//! Inputs are processed strictly in order because later files win when two
//! of them disagree on a participant's name. The first failing input aborts
//! the whole batch and nothing aggregated so far is returned.
//!
//! # Example
//!
//! ```rust
//! use chatroster::core::ingest_batch;
//!
//! let json = br#"{"messages": [{"from": "John Doe", "from_id": "user1001"}]}"#;
//! let html = br#"<div class="message"><div class="from_name">Jane Smith</div></div>"#;
//!
//! let roster = ingest_batch(&[("result.json", &json[..]), ("messages.html", &html[..])])?;
//! assert_eq!(roster.len(), 2);
//! # Ok::<(), chatroster::RosterError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::core::aggregator::ParticipantAggregator;
use crate::error::{Result, RosterError};
use crate::parser::{create_extractor, detect_format};
use crate::participant::{Participant, normalize};

/// Stateful driver for one batch.
///
/// Owns the batch's [`ParticipantAggregator`]; each batch gets its own
/// ingestor, so independent batches share no state.
#[derive(Debug, Default)]
pub struct BatchIngestor {
    aggregator: ParticipantAggregator,
    files: usize,
}

impl BatchIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detects the format of one buffer and merges its authors.
    ///
    /// On error nothing from this buffer has been merged; callers are
    /// expected to drop the ingestor, discarding the rest of the batch.
    pub fn feed(&mut self, label: &str, bytes: &[u8]) -> Result<()> {
        let format = detect_format(bytes);
        let extractor = create_extractor(format);
        tracing::debug!(label, %format, bytes = bytes.len(), "ingesting export");

        let candidates = extractor
            .extract(bytes)
            .map_err(|e| e.with_label(label))?;
        let admitted = candidates.len();

        self.aggregator
            .merge_all(candidates.into_iter().map(normalize));
        self.files += 1;

        tracing::debug!(
            label,
            admitted,
            unique = self.aggregator.len(),
            "merged export"
        );
        Ok(())
    }

    /// Reads a file and feeds it. A read failure is a transport error.
    pub fn feed_file(&mut self, path: &Path) -> Result<()> {
        let label = path.display().to_string();
        let bytes = fs::read(path).map_err(|e| RosterError::transport(&label, e))?;
        self.feed(&label, &bytes)
    }

    /// Number of inputs merged so far.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Number of distinct participants merged so far.
    pub fn participants(&self) -> usize {
        self.aggregator.len()
    }

    /// Ends the batch and returns its roster in unspecified order.
    pub fn finish(self) -> Vec<Participant> {
        tracing::info!(
            files = self.files,
            participants = self.aggregator.len(),
            "batch complete"
        );
        self.aggregator.finalize()
    }
}

/// Ingests an ordered batch of `(label, bytes)` inputs into one roster.
///
/// # Errors
///
/// Returns the first [`RosterError::Decode`] raised by any input. The
/// batch is abandoned: no participants are returned.
pub fn ingest_batch<L, B>(inputs: &[(L, B)]) -> Result<Vec<Participant>>
where
    L: AsRef<str>,
    B: AsRef<[u8]>,
{
    let mut ingestor = BatchIngestor::new();
    for (label, bytes) in inputs {
        ingestor.feed(label.as_ref(), bytes.as_ref())?;
    }
    Ok(ingestor.finish())
}

/// Reads and ingests an ordered batch of files into one roster.
///
/// # Errors
///
/// Returns [`RosterError::Transport`] for the first file that cannot be
/// read, or [`RosterError::Decode`] for the first that cannot be decoded.
/// Either way the batch is abandoned.
pub fn ingest_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Participant>> {
    let mut ingestor = BatchIngestor::new();
    for path in paths {
        ingestor.feed_file(path.as_ref())?;
    }
    Ok(ingestor.finish())
}
