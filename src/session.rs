//! Per-user pending-file queues.
//!
//! Uploads accumulate in a user's queue until a batch is triggered. The
//! store is keyed by user: the outer map lock is held only long enough to
//! look up (or create) a user's slot, and each slot has its own lock, so
//! users never contend with each other.
//!
//! [`PendingQueue::drain`] and [`PendingQueue::clear`] remove the user's
//! slot from the store and retire it in one critical section, so the store
//! only holds users with something queued. An upload racing with a drain
//! either makes it into the drained batch or, finding its slot retired,
//! lands in a fresh queue: it is neither lost nor counted twice.
//!
//! # Example
//!
//! ```rust
//! use chatroster::session::{PendingFile, PendingQueue};
//!
//! let queue = PendingQueue::new();
//! queue.add(42, PendingFile::new("result.json", "file-id-1"))?;
//! queue.add(42, PendingFile::new("messages.html", "file-id-2"))?;
//!
//! let batch = queue.drain(42)?;
//! assert_eq!(batch.len(), 2);
//! assert_eq!(queue.len(42), 0);
//! # Ok::<(), chatroster::RosterError>(())
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::config::QueueConfig;
use crate::error::{Result, RosterError};

/// Identifier of the user (or chat) a queue belongs to.
pub type UserId = i64;

/// A queued upload: its display name and a handle to fetch its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFile {
    /// File name as uploaded; used for admission and error labels.
    pub name: String,
    /// Opaque handle the byte-retrieval collaborator resolves (remote file id, local path).
    pub handle: String,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
        }
    }
}

/// One user's queue. A retired slot has been removed from the store and
/// accepts no more files.
#[derive(Debug, Default)]
struct Slot {
    files: Vec<PendingFile>,
    retired: bool,
}

type SlotRef = Arc<Mutex<Slot>>;

/// Keyed store of pending uploads, one independently locked queue per user.
#[derive(Debug, Default)]
pub struct PendingQueue {
    slots: Mutex<HashMap<UserId, SlotRef>>,
    config: QueueConfig,
}

impl PendingQueue {
    /// Creates a store with the default quota of 10 files per user.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            slots: Mutex::default(),
            config,
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Queues a file for `user` and returns the new queue length.
    ///
    /// # Errors
    ///
    /// - [`RosterError::UnsupportedFile`] if the name is not a JSON/HTML export
    /// - [`RosterError::QueueFull`] if the user's quota is already used up
    pub fn add(&self, user: UserId, file: PendingFile) -> Result<usize> {
        if !self.config.accepts(&file.name) {
            return Err(RosterError::unsupported_file(file.name));
        }

        loop {
            let slot = self.slot(user);
            let mut state = lock(&slot);
            if state.retired {
                // drained or cleared after we looked it up; use the new slot
                continue;
            }
            if state.files.len() >= self.config.max_files {
                return Err(RosterError::QueueFull {
                    limit: self.config.max_files,
                });
            }
            tracing::debug!(
                user,
                file = %file.name,
                queued = state.files.len() + 1,
                "queued upload"
            );
            state.files.push(file);
            return Ok(state.files.len());
        }
    }

    /// Discards everything queued for `user`.
    pub fn clear(&self, user: UserId) {
        let discarded = self.retire(user);
        if !discarded.is_empty() {
            tracing::debug!(user, files = discarded.len(), "cleared queue");
        }
    }

    /// Takes everything queued for `user`, leaving the queue empty.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyQueue`] if nothing is queued.
    pub fn drain(&self, user: UserId) -> Result<Vec<PendingFile>> {
        let files = self.retire(user);
        if files.is_empty() {
            return Err(RosterError::EmptyQueue);
        }
        tracing::debug!(user, files = files.len(), "drained queue");
        Ok(files)
    }

    /// Number of files queued for `user`.
    pub fn len(&self, user: UserId) -> usize {
        let slot = lock(&self.slots).get(&user).cloned();
        slot.map_or(0, |slot| lock(&slot).files.len())
    }

    /// Returns `true` if nothing is queued for `user`.
    pub fn is_empty(&self, user: UserId) -> bool {
        self.len(user) == 0
    }

    /// Number of users with a live slot.
    #[cfg(test)]
    fn users(&self) -> usize {
        lock(&self.slots).len()
    }

    fn slot(&self, user: UserId) -> SlotRef {
        Arc::clone(lock(&self.slots).entry(user).or_default())
    }

    /// Removes the user's slot and takes its files. The slot is retired
    /// while the store lock is held, so no `add` can still push into it.
    fn retire(&self, user: UserId) -> Vec<PendingFile> {
        let mut slots = lock(&self.slots);
        let Some(slot) = slots.remove(&user) else {
            return Vec::new();
        };
        let mut state = lock(&slot);
        state.retired = true;
        std::mem::take(&mut state.files)
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn file(name: &str) -> PendingFile {
        PendingFile::new(name, format!("handle-{name}"))
    }

    #[test]
    fn test_add_and_drain() {
        let queue = PendingQueue::new();
        assert_eq!(queue.add(1, file("a.json")).unwrap(), 1);
        assert_eq!(queue.add(1, file("b.html")).unwrap(), 2);

        let batch = queue.drain(1).unwrap();
        assert_eq!(batch, vec![file("a.json"), file("b.html")]);
        assert!(queue.is_empty(1));
    }

    #[test]
    fn test_drain_empty_queue() {
        let queue = PendingQueue::new();
        assert!(matches!(queue.drain(7), Err(RosterError::EmptyQueue)));

        queue.add(7, file("a.json")).unwrap();
        queue.drain(7).unwrap();
        assert!(matches!(queue.drain(7), Err(RosterError::EmptyQueue)));
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let queue = PendingQueue::new();
        let err = queue.add(1, file("photo.jpg")).unwrap_err();
        assert!(matches!(err, RosterError::UnsupportedFile { .. }));
        assert_eq!(queue.len(1), 0);
    }

    #[test]
    fn test_quota() {
        let queue = PendingQueue::with_config(QueueConfig::new().with_max_files(2));
        queue.add(1, file("a.json")).unwrap();
        queue.add(1, file("b.json")).unwrap();

        let err = queue.add(1, file("c.json")).unwrap_err();
        assert!(matches!(err, RosterError::QueueFull { limit: 2 }));
        assert_eq!(queue.len(1), 2);

        // quota is per user
        queue.add(2, file("c.json")).unwrap();
    }

    #[test]
    fn test_default_quota_is_ten() {
        let queue = PendingQueue::new();
        for i in 0..10 {
            queue.add(1, file(&format!("part{i}.html"))).unwrap();
        }
        assert!(queue.add(1, file("part10.html")).is_err());
    }

    #[test]
    fn test_clear() {
        let queue = PendingQueue::new();
        queue.add(1, file("a.json")).unwrap();
        queue.add(2, file("b.json")).unwrap();
        queue.clear(1);
        assert_eq!(queue.len(1), 0);
        assert_eq!(queue.len(2), 1);

        // clearing an unknown user is a no-op
        queue.clear(99);
    }

    #[test]
    fn test_drain_and_clear_release_user_slots() {
        let queue = PendingQueue::new();
        for user in 0..100 {
            queue.add(user, file("a.json")).unwrap();
        }
        assert_eq!(queue.users(), 100);

        for user in 0..50 {
            queue.drain(user).unwrap();
        }
        for user in 50..100 {
            queue.clear(user);
        }
        assert_eq!(queue.users(), 0);

        // looking at an unknown user does not create a slot
        assert_eq!(queue.len(7), 0);
        assert!(queue.drain(7).is_err());
        assert_eq!(queue.users(), 0);
    }

    #[test]
    fn test_add_into_retired_slot_moves_to_fresh_queue() {
        let queue = PendingQueue::new();
        queue.add(1, file("a.json")).unwrap();

        // an add that looked the slot up before the drain retired it
        let stale = queue.slot(1);
        queue.drain(1).unwrap();
        assert!(lock(&stale).retired);

        assert_eq!(queue.add(1, file("b.json")).unwrap(), 1);
        assert_eq!(queue.drain(1).unwrap(), vec![file("b.json")]);
        assert!(lock(&stale).files.is_empty());
    }

    #[test]
    fn test_upload_after_drain_starts_new_batch() {
        let queue = PendingQueue::new();
        queue.add(1, file("a.json")).unwrap();
        let first = queue.drain(1).unwrap();

        queue.add(1, file("b.json")).unwrap();
        let second = queue.drain(1).unwrap();

        assert_eq!(first, vec![file("a.json")]);
        assert_eq!(second, vec![file("b.json")]);
    }

    #[test]
    fn test_concurrent_uploads_are_not_lost_or_duplicated() {
        let queue = Arc::new(PendingQueue::with_config(
            QueueConfig::new().with_max_files(1000),
        ));

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..50 {
                        queue.add(1, file(&format!("t{t}-{i}.json"))).unwrap();
                    }
                })
            })
            .collect();

        let mut drained = Vec::new();
        while writers.iter().any(|w| !w.is_finished()) {
            if let Ok(batch) = queue.drain(1) {
                drained.extend(batch);
            }
        }
        for writer in writers {
            writer.join().unwrap();
        }
        if let Ok(batch) = queue.drain(1) {
            drained.extend(batch);
        }

        assert_eq!(drained.len(), 200);
        let mut names: Vec<_> = drained.into_iter().map(|f| f.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 200);
    }
}
