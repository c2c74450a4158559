use crate::catalog::{self, MONTHS, StudyDetail};
use crate::io::backend::KvBackend;
use crate::model::{Month, PlanKind, ReadingEntry, id};
use crate::ops::progress::{NOMINAL_TOTAL, ProgressStore};
use crate::render::{EntryCard, render_entries};

/// What the user is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSelection {
    /// Calendar plan, scoped to one month (index into `MONTHS`)
    Calendar(usize),
    Chronological,
    Nt90,
}

impl ViewSelection {
    pub fn plan(&self) -> PlanKind {
        match self {
            ViewSelection::Calendar(_) => PlanKind::Calendar,
            ViewSelection::Chronological => PlanKind::Chronological,
            ViewSelection::Nt90 => PlanKind::Nt90,
        }
    }
}

/// Aggregate progress numbers for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Mediator between user intent and the store/catalog/renderer.
///
/// Both frontends drive one of these; all mutation goes through it, so a
/// completion toggled here is immediately visible in the next render.
#[derive(Debug)]
pub struct Session<B: KvBackend> {
    store: ProgressStore<B>,
    view: ViewSelection,
    /// Identifier the notes editor is open for, if any
    notes_target: Option<String>,
}

impl<B: KvBackend> Session<B> {
    pub fn new(store: ProgressStore<B>, initial_plan: PlanKind) -> Self {
        let view = match initial_plan {
            PlanKind::Calendar => ViewSelection::Calendar(0),
            PlanKind::Chronological => ViewSelection::Chronological,
            PlanKind::Nt90 => ViewSelection::Nt90,
        };
        Session {
            store,
            view,
            notes_target: None,
        }
    }

    pub fn view(&self) -> ViewSelection {
        self.view
    }

    /// Switch plans. Returning to the calendar lands on its first month.
    pub fn select_plan(&mut self, plan: PlanKind) {
        if self.view.plan() == plan {
            return;
        }
        self.view = match plan {
            PlanKind::Calendar => ViewSelection::Calendar(0),
            PlanKind::Chronological => ViewSelection::Chronological,
            PlanKind::Nt90 => ViewSelection::Nt90,
        };
    }

    /// Select a calendar month by index; switches to the calendar view.
    /// Out-of-range indexes clamp to the last month.
    pub fn select_month(&mut self, index: usize) {
        self.view = ViewSelection::Calendar(index.min(MONTHS.len() - 1));
    }

    /// The month currently scoping the calendar view, if that view is active
    pub fn current_month(&self) -> Option<&'static Month> {
        match self.view {
            ViewSelection::Calendar(index) => Some(&MONTHS[index]),
            _ => None,
        }
    }

    /// Entries for the current view, catalog order
    pub fn visible_entries(&self) -> Vec<ReadingEntry> {
        match self.view {
            ViewSelection::Calendar(index) => catalog::calendar_entries(MONTHS[index].slug),
            ViewSelection::Chronological => catalog::chronological_entries(),
            ViewSelection::Nt90 => catalog::nt90_entries(),
        }
    }

    /// Cards for the current view, rendered against the live store
    pub fn cards(&self) -> Vec<EntryCard> {
        render_entries(&self.visible_entries(), &self.store)
    }

    /// Toggle a completion mark; returns the new state.
    pub fn toggle_reading(&mut self, entry_id: &str) -> bool {
        self.store.toggle(entry_id)
    }

    /// Open the notes editor for an entry; returns the prefill text.
    pub fn open_notes(&mut self, entry_id: &str) -> String {
        self.notes_target = Some(entry_id.to_string());
        self.store.note(entry_id).unwrap_or("").to_string()
    }

    /// Close the notes editor without saving.
    pub fn cancel_notes(&mut self) {
        self.notes_target = None;
    }

    pub fn notes_target(&self) -> Option<&str> {
        self.notes_target.as_deref()
    }

    /// Save the notes editor content to its target. A save with no editor
    /// open is a no-op.
    pub fn save_notes(&mut self, text: &str) {
        if let Some(target) = self.notes_target.take() {
            self.store.set_note(&target, text);
        }
    }

    /// Study details for an entry. Total: every identifier resolves to a
    /// record, falling back to its plan family's default.
    pub fn study_details(&self, entry_id: &str) -> &'static StudyDetail {
        let parsed = id::parse_id(entry_id);
        catalog::study_detail(parsed.plan, parsed.key)
    }

    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary {
            completed: self.store.completed_count(),
            total: NOMINAL_TOTAL,
            percent: self.store.percent(),
        }
    }

    pub fn store(&self) -> &ProgressStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::backend::MemoryBackend;
    use pretty_assertions::assert_eq;

    fn session() -> Session<MemoryBackend> {
        Session::new(
            ProgressStore::load(MemoryBackend::new()),
            PlanKind::Calendar,
        )
    }

    #[test]
    fn starts_on_first_month_of_calendar() {
        let s = session();
        assert_eq!(s.view(), ViewSelection::Calendar(0));
        assert_eq!(s.current_month().unwrap().slug, "meskerem");
        assert_eq!(s.visible_entries().len(), 30);
    }

    #[test]
    fn plan_switching_resets_month() {
        let mut s = session();
        s.select_month(4);
        s.select_plan(PlanKind::Nt90);
        assert_eq!(s.view(), ViewSelection::Nt90);
        assert_eq!(s.visible_entries().len(), 90);

        s.select_plan(PlanKind::Calendar);
        assert_eq!(s.view(), ViewSelection::Calendar(0));
    }

    #[test]
    fn reselecting_current_plan_keeps_month() {
        let mut s = session();
        s.select_month(4);
        s.select_plan(PlanKind::Calendar);
        assert_eq!(s.view(), ViewSelection::Calendar(4));
    }

    #[test]
    fn month_index_clamps() {
        let mut s = session();
        s.select_month(99);
        assert_eq!(s.current_month().unwrap().slug, "pagume");
        assert_eq!(s.visible_entries().len(), 5);
    }

    #[test]
    fn toggle_flows_to_cards() {
        let mut s = session();
        assert!(s.toggle_reading("meskerem-3"));
        let cards = s.cards();
        assert!(cards[2].completed);
        assert!(!s.toggle_reading("meskerem-3"));
        assert!(!s.cards()[2].completed);
    }

    #[test]
    fn notes_editor_lifecycle() {
        let mut s = session();
        assert_eq!(s.open_notes("meskerem-1"), "");
        s.save_notes("first note");
        assert_eq!(s.notes_target(), None);
        assert_eq!(s.store().note("meskerem-1"), Some("first note"));

        // Prefill shows the existing note
        assert_eq!(s.open_notes("meskerem-1"), "first note");
        s.cancel_notes();
        assert_eq!(s.store().note("meskerem-1"), Some("first note"));
    }

    #[test]
    fn save_without_open_editor_is_noop() {
        let mut s = session();
        s.save_notes("orphaned text");
        assert_eq!(s.store().note_count(), 0);
    }

    #[test]
    fn study_details_are_total() {
        let s = session();
        assert_eq!(s.study_details("chrono-1").theme, "Creation & The Fall");
        // Calendar ids fall back to the Old Testament default
        assert_eq!(
            s.study_details("meskerem-3").theme,
            "God's Faithfulness in Scripture"
        );
        // Unknown keys still resolve
        assert_eq!(
            s.study_details("nt90-99").theme,
            "Following Jesus in Daily Life"
        );
    }

    #[test]
    fn progress_summary() {
        let mut s = session();
        s.toggle_reading("meskerem-1");
        s.toggle_reading("chrono-1");
        let p = s.progress();
        assert_eq!(p.completed, 2);
        assert_eq!(p.total, 365);
        assert_eq!(p.percent, 1);
    }
}
