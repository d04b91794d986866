//! Participant model and display-name normalization.
//!
//! Both export formats produce [`RawCandidate`]s: a display name plus, for
//! JSON exports, the author's stable `from_id`. [`normalize`] turns a
//! candidate into a [`Participant`], the one entity the rest of the crate
//! deals in.
//!
//! # Examples
//!
//! ```
//! use chatroster::participant::{RawCandidate, normalize};
//!
//! let p = normalize(RawCandidate::identified("John Doe", "user1001"));
//! assert_eq!(p.identity_key(), "user1001");
//! assert_eq!(p.first_name(), "John");
//! assert_eq!(p.last_name(), "Doe");
//!
//! // HTML exports carry no author id, so the name is the key
//! let p = normalize(RawCandidate::anonymous("Madonna"));
//! assert_eq!(p.identity_key(), "Madonna");
//! assert_eq!(p.last_name(), "");
//! ```

use serde::{Deserialize, Serialize};

/// Display name Telegram substitutes for removed accounts.
///
/// Candidates with this name never become participants.
pub const DELETED_ACCOUNT: &str = "Deleted Account";

/// Returns `true` if a display name may become a participant.
///
/// Empty names, names starting with a space (they would split into an
/// empty first name) and the [`DELETED_ACCOUNT`] sentinel are rejected.
pub fn is_admissible(display_name: &str) -> bool {
    !display_name.is_empty() && !display_name.starts_with(' ') && display_name != DELETED_ACCOUNT
}

/// An author candidate produced by an extractor, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Author display name exactly as found in the export.
    pub display_name: String,

    /// Stable author identifier (`from_id`), present for JSON exports only.
    pub stable_id: Option<String>,
}

impl RawCandidate {
    /// Creates a candidate that carries a stable author identifier.
    pub fn identified(display_name: impl Into<String>, stable_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            stable_id: Some(stable_id.into()),
        }
    }

    /// Creates a candidate known only by its display name.
    pub fn anonymous(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            stable_id: None,
        }
    }

    /// Returns the key this candidate deduplicates under.
    pub fn identity_key(&self) -> &str {
        self.stable_id.as_deref().unwrap_or(&self.display_name)
    }
}

/// A chat participant, deduplicated by [`identity_key`](Participant::identity_key).
///
/// Two participants with the same key are the same person for the duration
/// of one aggregation run. For HTML exports the key is the display name, so
/// two different people sharing a name collapse into one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Deduplication key: `from_id` for JSON exports, display name for HTML.
    pub identity_key: String,

    /// Part of the display name before the first space. Never empty for
    /// an admitted candidate.
    pub first_name: String,

    /// Remainder of the display name after the first space, or empty.
    #[serde(default)]
    pub last_name: String,

    /// Free-text annotation. Neither extractor fills it in.
    #[serde(default)]
    pub bio: String,
}

impl Participant {
    /// Creates a participant from its parts with an empty bio.
    pub fn new(
        identity_key: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            identity_key: identity_key.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: String::new(),
        }
    }

    /// Builder method to set the bio.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Returns the deduplication key.
    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name (empty if the display name was a single word).
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the bio.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Returns `"First Last"`, or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Splits a display name on its first space into `(first, last)`.
///
/// Only the first space separates; anything after it, further spaces
/// included, is the last name.
///
/// ```
/// use chatroster::participant::split_display_name;
///
/// assert_eq!(split_display_name("John Doe"), ("John".into(), "Doe".into()));
/// assert_eq!(split_display_name("Madonna"), ("Madonna".into(), String::new()));
/// assert_eq!(
///     split_display_name("Mary Jane Watson"),
///     ("Mary".into(), "Jane Watson".into())
/// );
/// ```
pub fn split_display_name(display_name: &str) -> (String, String) {
    match display_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (display_name.to_string(), String::new()),
    }
}

/// Converts an admitted candidate into a participant.
///
/// The identity key is the stable id when present, otherwise the display
/// name. Callers filter candidates with [`is_admissible`] first.
pub fn normalize(candidate: RawCandidate) -> Participant {
    let (first_name, last_name) = split_display_name(&candidate.display_name);
    let identity_key = match candidate.stable_id {
        Some(id) => id,
        None => candidate.display_name,
    };

    Participant {
        identity_key,
        first_name,
        last_name,
        bio: String::new(),
    }
}
