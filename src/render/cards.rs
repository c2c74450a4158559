//! Pure projection from catalog entries + progress state to display cards.
//!
//! Nothing here touches the backend or mutates anything; both frontends (CLI
//! and TUI) consume the same cards, so their output can never disagree.

use crate::io::backend::KvBackend;
use crate::model::ReadingEntry;
use crate::ops::progress::ProgressStore;

/// Everything a frontend needs to display one reading entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub id: String,
    pub heading: String,
    pub title: String,
    pub body: Vec<String>,
    pub completed: bool,
    pub has_note: bool,
}

/// Project one entry against the live store.
pub fn render_entry<B: KvBackend>(entry: &ReadingEntry, store: &ProgressStore<B>) -> EntryCard {
    let id = entry.id();
    EntryCard {
        heading: entry.heading(),
        title: entry.title(),
        body: entry.body(),
        completed: store.is_completed(&id),
        has_note: store.note(&id).is_some(),
        id,
    }
}

/// Project a sequence of entries, preserving their order.
pub fn render_entries<B: KvBackend>(
    entries: &[ReadingEntry],
    store: &ProgressStore<B>,
) -> Vec<EntryCard> {
    entries.iter().map(|e| render_entry(e, store)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::io::backend::MemoryBackend;
    use pretty_assertions::assert_eq;

    #[test]
    fn cards_reflect_store_state() {
        let mut store = ProgressStore::load(MemoryBackend::new());
        store.toggle("meskerem-3");
        store.set_note("meskerem-1", "note");

        let cards = render_entries(&catalog::calendar_entries("meskerem"), &store);
        assert_eq!(cards.len(), 30);
        assert!(cards[2].completed);
        assert!(!cards[2].has_note);
        assert!(cards[0].has_note);
        assert!(!cards[0].completed);
    }

    #[test]
    fn rendering_is_deterministic() {
        let store = ProgressStore::load(MemoryBackend::new());
        let entries = catalog::chronological_entries();
        let first = render_entries(&entries, &store);
        let second = render_entries(&entries, &store);
        assert_eq!(first, second);
    }

    #[test]
    fn rendering_does_not_mutate() {
        let mut store = ProgressStore::load(MemoryBackend::new());
        store.toggle("nt90-5");
        let before = store.completed_count();
        let _ = render_entries(&catalog::nt90_entries(), &store);
        assert_eq!(store.completed_count(), before);
    }
}
