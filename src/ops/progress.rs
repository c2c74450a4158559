use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::io::backend::{COMPLETED_KEY, KvBackend, NOTES_KEY};
use crate::io::journal;

/// Nominal total used for the progress percentage. One global counter across
/// all three plans — a single discipleship metric, not a per-plan one.
pub const NOMINAL_TOTAL: usize = 365;

/// Single source of truth for completion and notes state. The only component
/// that reads or writes the persistence backend.
///
/// Loading never fails: malformed or missing stored data degrades to empty
/// collections, because a corrupted local cache must never prevent startup.
/// Writes that fail keep the in-memory state and journal the loss.
#[derive(Debug)]
pub struct ProgressStore<B: KvBackend> {
    backend: B,
    completed: BTreeSet<String>,
    notes: IndexMap<String, String>,
}

impl<B: KvBackend> ProgressStore<B> {
    /// Load persisted state from the backend.
    pub fn load(backend: B) -> Self {
        let completed = match backend.get(COMPLETED_KEY) {
            Some(raw) => match serde_json::from_str::<BTreeSet<String>>(&raw) {
                Ok(set) => set,
                Err(e) => {
                    if let Some(dir) = backend.journal_dir() {
                        journal::log_failure(dir, "load completedReadings", &e.to_string());
                    }
                    BTreeSet::new()
                }
            },
            None => BTreeSet::new(),
        };
        let notes = match backend.get(NOTES_KEY) {
            Some(raw) => match serde_json::from_str::<IndexMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    if let Some(dir) = backend.journal_dir() {
                        journal::log_failure(dir, "load readingNotes", &e.to_string());
                    }
                    IndexMap::new()
                }
            },
            None => IndexMap::new(),
        };

        ProgressStore {
            backend,
            completed,
            notes,
        }
    }

    /// Serialize both collections and write them to the backend. On failure
    /// the in-memory state stays intact; durability is lost for this change.
    fn save(&mut self) {
        let completed = serde_json::to_string(&self.completed).unwrap_or_else(|_| "[]".into());
        let notes = serde_json::to_string(&self.notes).unwrap_or_else(|_| "{}".into());

        for (key, value) in [(COMPLETED_KEY, completed), (NOTES_KEY, notes)] {
            if let Err(e) = self.backend.set(key, &value)
                && let Some(dir) = self.backend.journal_dir()
            {
                journal::log_failure(dir, &format!("save {}", key), &e.to_string());
            }
        }
    }

    /// Flip completion membership for an identifier; returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_completed = if self.completed.contains(id) {
            self.completed.remove(id);
            false
        } else {
            self.completed.insert(id.to_string());
            true
        };
        self.save();
        now_completed
    }

    /// Set the note for an identifier. A note that trims to empty removes
    /// the entry instead of storing an empty string.
    pub fn set_note(&mut self, id: &str, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.notes.shift_remove(id);
        } else {
            self.notes.insert(id.to_string(), trimmed.to_string());
        }
        self.save();
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn note(&self, id: &str) -> Option<&str> {
        self.notes.get(id).map(|s| s.as_str())
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Completed identifiers, sorted
    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(|s| s.as_str())
    }

    /// Global progress percentage, rounded to the nearest integer
    pub fn percent(&self) -> u32 {
        (self.completed.len() as f64 / NOMINAL_TOTAL as f64 * 100.0).round() as u32
    }
}
