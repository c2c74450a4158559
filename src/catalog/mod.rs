pub mod calendar;
pub mod chronological;
pub mod nt90;
pub mod study;

pub use calendar::{MONTHS, daily_readings, month_by_slug};
pub use study::{MemoryVerse, StudyDetail, default_detail, study_detail};

use crate::model::{PlanKind, ReadingEntry};

/// Ordered entries for one calendar month; empty for an unknown slug
pub fn calendar_entries(slug: &str) -> Vec<ReadingEntry> {
    let Some(month) = month_by_slug(slug) else {
        return Vec::new();
    };
    daily_readings(slug)
        .iter()
        .map(|day| ReadingEntry::Calendar { month, day })
        .collect()
}

/// Ordered entries for the chronological plan
pub fn chronological_entries() -> Vec<ReadingEntry> {
    chronological::WEEKS
        .iter()
        .map(ReadingEntry::Chronological)
        .collect()
}

/// Ordered entries for the 90-day plan
pub fn nt90_entries() -> Vec<ReadingEntry> {
    nt90::DAYS.iter().map(ReadingEntry::Nt90).collect()
}

/// Every entry across all three plans, catalog order
pub fn all_entries() -> Vec<ReadingEntry> {
    let mut entries = Vec::new();
    for month in &MONTHS {
        entries.extend(calendar_entries(month.slug));
    }
    entries.extend(chronological_entries());
    entries.extend(nt90_entries());
    entries
}

/// Find one entry by its identifier
pub fn entry_by_id(id: &str) -> Option<ReadingEntry> {
    let parsed = crate::model::id::parse_id(id);
    match parsed.plan {
        PlanKind::Chronological => {
            let week: u32 = parsed.key.parse().ok()?;
            chronological::WEEKS
                .iter()
                .find(|w| w.week == week)
                .map(ReadingEntry::Chronological)
        }
        PlanKind::Nt90 => {
            let day: u32 = parsed.key.parse().ok()?;
            nt90::DAYS.iter().find(|d| d.day == day).map(ReadingEntry::Nt90)
        }
        PlanKind::Calendar => {
            // `{slug}-{day}` — the slug itself contains no further dashes
            let (slug, day) = parsed.key.rsplit_once('-')?;
            let day: u32 = day.parse().ok()?;
            let month = month_by_slug(slug)?;
            daily_readings(slug)
                .iter()
                .find(|d| d.day == day)
                .map(|d| ReadingEntry::Calendar { month, day: d })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique_across_all_plans() {
        let entries = all_entries();
        assert_eq!(entries.len(), 365 + 48 + 90);
        let ids: HashSet<String> = entries.iter().map(|e| e.id()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn entry_lookup_by_id() {
        let entry = entry_by_id("meskerem-3").unwrap();
        assert_eq!(entry.heading(), "Day 3");
        let entry = entry_by_id("chrono-48").unwrap();
        assert_eq!(entry.heading(), "Week 48");
        let entry = entry_by_id("nt90-90").unwrap();
        assert_eq!(entry.heading(), "Day 90");

        assert!(entry_by_id("meskerem-31").is_none());
        assert!(entry_by_id("chrono-49").is_none());
        assert!(entry_by_id("nowhere-1").is_none());
        assert!(entry_by_id("garbage").is_none());
    }

    #[test]
    fn unknown_month_yields_empty_sequence() {
        assert!(calendar_entries("atlantis").is_empty());
    }

    #[test]
    fn entries_keep_catalog_order() {
        let entries = calendar_entries("meskerem");
        let days: Vec<String> = entries.iter().map(|e| e.heading()).collect();
        assert_eq!(days[0], "Day 1");
        assert_eq!(days[29], "Day 30");
    }
}
