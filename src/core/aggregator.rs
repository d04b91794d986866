//! Cross-file participant deduplication.

use std::collections::HashMap;

use crate::participant::Participant;

/// Accumulates participants for one batch, keyed by identity.
///
/// Merging is last-write-wins: a later participant with an existing
/// identity key replaces the earlier one. The final order is unspecified.
///
/// # Example
///
/// ```rust
/// use chatroster::Participant;
/// use chatroster::core::ParticipantAggregator;
///
/// let mut aggregator = ParticipantAggregator::new();
/// aggregator.merge(Participant::new("user1", "Jon", "Doe"));
/// aggregator.merge(Participant::new("user1", "John", "Doe"));
/// aggregator.merge(Participant::new("user2", "Jane", ""));
///
/// assert_eq!(aggregator.len(), 2);
/// assert_eq!(aggregator.get("user1").unwrap().first_name(), "John");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ParticipantAggregator {
    participants: HashMap<String, Participant>,
}

impl ParticipantAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a participant, replacing any entry with the same key.
    pub fn merge(&mut self, participant: Participant) {
        self.participants
            .insert(participant.identity_key.clone(), participant);
    }

    /// Merges every participant from an iterator, in order.
    pub fn merge_all(&mut self, participants: impl IntoIterator<Item = Participant>) {
        for participant in participants {
            self.merge(participant);
        }
    }

    /// Returns the participant stored under `identity_key`.
    pub fn get(&self, identity_key: &str) -> Option<&Participant> {
        self.participants.get(identity_key)
    }

    pub fn contains(&self, identity_key: &str) -> bool {
        self.participants.contains_key(identity_key)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Consumes the aggregator and returns its participants in unspecified order.
    pub fn finalize(self) -> Vec<Participant> {
        self.participants.into_values().collect()
    }
}

impl Extend<Participant> for ParticipantAggregator {
    fn extend<T: IntoIterator<Item = Participant>>(&mut self, iter: T) {
        self.merge_all(iter);
    }
}

impl FromIterator<Participant> for ParticipantAggregator {
    fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
        let mut aggregator = Self::new();
        aggregator.merge_all(iter);
        aggregator
    }
}
