//! Output shape selection.

use serde::{Deserialize, Serialize};

/// Participant count at which the roster is delivered as a spreadsheet.
pub const SPREADSHEET_THRESHOLD: usize = 50;

/// How a finished roster should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    /// Short roster, rendered as a numbered text listing.
    InlineList,
    /// Large roster, rendered as a tabular file.
    Spreadsheet,
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputShape::InlineList => write!(f, "inline list"),
            OutputShape::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// Picks the output shape for a roster of `count` participants.
///
/// Fewer than [`SPREADSHEET_THRESHOLD`] participants (zero included) give
/// [`OutputShape::InlineList`]; anything else gives [`OutputShape::Spreadsheet`].
///
/// ```rust
/// use chatroster::core::{OutputShape, select_shape};
///
/// assert_eq!(select_shape(0), OutputShape::InlineList);
/// assert_eq!(select_shape(49), OutputShape::InlineList);
/// assert_eq!(select_shape(50), OutputShape::Spreadsheet);
/// ```
pub fn select_shape(count: usize) -> OutputShape {
    if count < SPREADSHEET_THRESHOLD {
        OutputShape::InlineList
    } else {
        OutputShape::Spreadsheet
    }
}
