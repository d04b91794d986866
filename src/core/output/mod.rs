//! Roster renderers.
//!
//! - [`to_listing`] - numbered text listing for short rosters
//! - [`write_csv`] / [`to_csv`] - spreadsheet rows (requires `csv-output` feature)
//! - [`write_json`] / [`to_json`] - JSON array of rows (requires `json-output` feature)
//!
//! Which one a caller uses is decided by [`select_shape`](crate::core::select_shape).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatroster::Result<()> {
//! use chatroster::core::output::{to_listing, write_csv};
//! use chatroster::core::models::OutputConfig;
//! use chatroster::Participant;
//!
//! let roster = vec![
//!     Participant::new("user1", "John", "Doe"),
//!     Participant::new("user2", "Madonna", ""),
//! ];
//!
//! println!("{}", to_listing(&roster));
//! write_csv(&roster, "participants.csv", &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod listing;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use listing::{NO_PARTICIPANTS, to_listing};

/// Spreadsheet column headers, in order. The key column is optional.
#[cfg(feature = "csv-output")]
pub(crate) const HEADER: [&str; 5] = ["#", "Export date", "First name", "Last name", "Bio"];
#[cfg(feature = "csv-output")]
pub(crate) const KEY_HEADER: &str = "Key";
