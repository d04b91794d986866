//! Configuration types.
//!
//! Plain structs with builder methods and serde derives, usable without
//! any CLI framework.
//!
//! # Example
//!
//! ```rust
//! use chatroster::config::QueueConfig;
//! use chatroster::session::PendingQueue;
//!
//! let config = QueueConfig::new().with_max_files(5);
//! let queue = PendingQueue::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::parser::ExportFormat;

/// Default number of files one batch may hold.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Configuration for per-user pending-file queues.
///
/// # Example
///
/// ```rust
/// use chatroster::config::QueueConfig;
///
/// let config = QueueConfig::new();
/// assert_eq!(config.max_files, 10);
/// assert!(config.accepts("result.json"));
/// assert!(config.accepts("MESSAGES.HTML"));
/// assert!(!config.accepts("photo.jpg"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum files queued per user before a batch must run (default: 10)
    pub max_files: usize,

    /// Accepted export formats, checked by file extension (default: JSON and HTML)
    pub accepted_formats: Vec<ExportFormat>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            accepted_formats: ExportFormat::all().to_vec(),
        }
    }
}

impl QueueConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-user file quota.
    #[must_use]
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Restricts accepted exports to the given formats.
    #[must_use]
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        self.accepted_formats = formats.into_iter().collect();
        self
    }

    /// Returns `true` if a file with this name may be queued.
    pub fn accepts(&self, file_name: &str) -> bool {
        ExportFormat::from_file_name(file_name)
            .is_some_and(|format| self.accepted_formats.contains(&format))
    }
}
