use std::ops::Range;

use regex::Regex;

use crate::catalog;
use crate::model::{PlanKind, ReadingEntry};

/// Which field of a reading entry matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Passage,
    Theme,
    Focus,
    Book,
}

impl MatchField {
    pub fn label(&self) -> &'static str {
        match self {
            MatchField::Id => "id",
            MatchField::Passage => "passage",
            MatchField::Theme => "theme",
            MatchField::Focus => "focus",
            MatchField::Book => "book",
        }
    }
}

/// A search hit against the catalog
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub plan: PlanKind,
    pub id: String,
    pub field: MatchField,
    /// The matched text, in full
    pub text: String,
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search the catalog. If `plan_filter` is `Some`, only that plan's entries
/// are searched; otherwise all three plans, in catalog order.
pub fn search_catalog(re: &Regex, plan_filter: Option<PlanKind>) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for entry in catalog::all_entries() {
        let plan = match entry {
            ReadingEntry::Calendar { .. } => PlanKind::Calendar,
            ReadingEntry::Chronological(_) => PlanKind::Chronological,
            ReadingEntry::Nt90(_) => PlanKind::Nt90,
        };
        if let Some(filter) = plan_filter
            && plan != filter
        {
            continue;
        }
        search_entry(re, &entry, plan, &mut hits);
    }
    hits
}

fn push_hit(
    re: &Regex,
    text: &str,
    plan: PlanKind,
    id: &str,
    field: MatchField,
    hits: &mut Vec<SearchHit>,
) {
    let spans = find_matches(re, text);
    if !spans.is_empty() {
        hits.push(SearchHit {
            plan,
            id: id.to_string(),
            field,
            text: text.to_string(),
            spans,
        });
    }
}

fn search_entry(re: &Regex, entry: &ReadingEntry, plan: PlanKind, hits: &mut Vec<SearchHit>) {
    let id = entry.id();
    push_hit(re, &id, plan, &id, MatchField::Id, hits);

    match entry {
        ReadingEntry::Calendar { day, .. } => {
            for passage in day.passages {
                push_hit(re, passage, plan, &id, MatchField::Passage, hits);
            }
            push_hit(re, day.focus, plan, &id, MatchField::Focus, hits);
        }
        ReadingEntry::Chronological(week) => {
            push_hit(re, week.theme, plan, &id, MatchField::Theme, hits);
            push_hit(re, week.passages, plan, &id, MatchField::Passage, hits);
        }
        ReadingEntry::Nt90(day) => {
            push_hit(re, day.book, plan, &id, MatchField::Book, hits);
            push_hit(re, day.chapters, plan, &id, MatchField::Passage, hits);
            push_hit(re, day.focus, plan, &id, MatchField::Focus, hits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_passage_across_plans() {
        let re = Regex::new("Genesis").unwrap();
        let hits = search_catalog(&re, None);
        assert!(!hits.is_empty());
        assert!(hits.iter().any(|h| h.plan == PlanKind::Calendar));
        assert!(hits.iter().any(|h| h.plan == PlanKind::Chronological));
        // Genesis is Old Testament; the NT plan must not match
        assert!(hits.iter().all(|h| h.plan != PlanKind::Nt90));
    }

    #[test]
    fn plan_filter_restricts_results() {
        let re = Regex::new("(?i)john").unwrap();
        let hits = search_catalog(&re, Some(PlanKind::Nt90));
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.plan == PlanKind::Nt90));
        assert!(hits.iter().all(|h| h.id.starts_with("nt90-")));
    }

    #[test]
    fn id_field_matches() {
        let re = Regex::new("^meskerem-3$").unwrap();
        let hits = search_catalog(&re, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].field, MatchField::Id);
        assert_eq!(hits[0].id, "meskerem-3");
    }

    #[test]
    fn no_matches_yields_empty() {
        let re = Regex::new("zzzznotfound").unwrap();
        assert!(search_catalog(&re, None).is_empty());
    }

    #[test]
    fn spans_cover_matched_text() {
        let re = Regex::new("Revelation").unwrap();
        let hits = search_catalog(&re, Some(PlanKind::Nt90));
        let hit = hits
            .iter()
            .find(|h| h.field == MatchField::Book)
            .expect("Revelation appears as a book in the 90-day plan");
        for span in &hit.spans {
            assert_eq!(&hit.text[span.clone()], "Revelation");
        }
    }
}
