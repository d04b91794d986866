//! Inline text listing.

use crate::participant::Participant;

/// Message shown for an empty roster.
pub const NO_PARTICIPANTS: &str = "No participants found.";

/// Renders a roster as a numbered listing.
///
/// ```rust
/// use chatroster::Participant;
/// use chatroster::core::output::to_listing;
///
/// let roster = vec![
///     Participant::new("user1", "John", "Doe"),
///     Participant::new("user2", "Madonna", ""),
/// ];
/// assert_eq!(
///     to_listing(&roster),
///     "Participants found: 2\n\n1. John Doe\n2. Madonna\n"
/// );
/// ```
pub fn to_listing(participants: &[Participant]) -> String {
    if participants.is_empty() {
        return NO_PARTICIPANTS.to_string();
    }

    let mut listing = format!("Participants found: {}\n\n", participants.len());
    for (i, p) in participants.iter().enumerate() {
        listing.push_str(&format!("{}. {}\n", i + 1, p.full_name()));
    }
    listing
}
