use super::id;

/// One month of the Ethiopian liturgical calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    /// Amharic name (display only)
    pub name: &'static str,
    /// English transliteration
    pub english: &'static str,
    /// Lowercase ASCII slug used in identifiers and CLI arguments
    pub slug: &'static str,
    /// Week range label, e.g. "Week 1-4"
    pub weeks: &'static str,
    /// Reading summary, e.g. "Genesis 1-50, Job 1-42"
    pub reading: &'static str,
    /// Month theme label
    pub theme: &'static str,
    /// Number of days (30, except Pagume with 5)
    pub days: u32,
}

/// One daily reading in the calendar plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    /// Ordered passage labels
    pub passages: &'static [&'static str],
    pub focus: &'static str,
}

/// One week of the 48-week chronological plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronologicalWeek {
    pub week: u32,
    pub theme: &'static str,
    pub passages: &'static str,
    pub days: u32,
}

/// One day of the 90-day New Testament plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nt90Day {
    pub day: u32,
    pub book: &'static str,
    pub chapters: &'static str,
    pub focus: &'static str,
}

/// An addressable reading unit from any of the three plans.
///
/// The three shapes carry different fields; this union plus the projection
/// methods below give the renderer a single display contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingEntry {
    Calendar {
        month: &'static Month,
        day: &'static CalendarDay,
    },
    Chronological(&'static ChronologicalWeek),
    Nt90(&'static Nt90Day),
}

impl ReadingEntry {
    /// The identifier addressing this entry in the progress store
    pub fn id(&self) -> String {
        match self {
            ReadingEntry::Calendar { month, day } => id::calendar_id(month.slug, day.day),
            ReadingEntry::Chronological(week) => id::chrono_id(week.week),
            ReadingEntry::Nt90(day) => id::nt90_id(day.day),
        }
    }

    /// Short heading, e.g. "Day 3" or "Week 12"
    pub fn heading(&self) -> String {
        match self {
            ReadingEntry::Calendar { day, .. } => format!("Day {}", day.day),
            ReadingEntry::Chronological(week) => format!("Week {}", week.week),
            ReadingEntry::Nt90(day) => format!("Day {}", day.day),
        }
    }

    /// Body lines for the card display, catalog order preserved
    pub fn body(&self) -> Vec<String> {
        match self {
            ReadingEntry::Calendar { day, .. } => {
                let mut lines: Vec<String> = day.passages.iter().map(|p| p.to_string()).collect();
                lines.push(format!("Focus: {}", day.focus));
                lines
            }
            ReadingEntry::Chronological(week) => vec![
                week.theme.to_string(),
                week.passages.to_string(),
                format!("{} days", week.days),
            ],
            ReadingEntry::Nt90(day) => vec![
                format!("{} {}", day.book, day.chapters),
                format!("Focus: {}", day.focus),
            ],
        }
    }

    /// Title used for the notes editor, e.g. "Day 3 — Meskerem"
    pub fn title(&self) -> String {
        match self {
            ReadingEntry::Calendar { month, day } => {
                format!("Day {} — {}", day.day, month.english)
            }
            ReadingEntry::Chronological(week) => format!("Week {} — {}", week.week, week.theme),
            ReadingEntry::Nt90(day) => format!("Day {} — {}", day.day, day.book),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH: Month = Month {
        name: "መስከረም",
        english: "Meskerem",
        slug: "meskerem",
        weeks: "Week 1-4",
        reading: "Genesis 1-50, Job 1-42",
        theme: "Creation to Patriarchs",
        days: 30,
    };
    const DAY: CalendarDay = CalendarDay {
        day: 3,
        passages: &["Genesis 8-11"],
        focus: "Noah's Ark, Tower of Babel",
    };

    #[test]
    fn calendar_projection() {
        let entry = ReadingEntry::Calendar {
            month: &MONTH,
            day: &DAY,
        };
        assert_eq!(entry.id(), "meskerem-3");
        assert_eq!(entry.heading(), "Day 3");
        assert_eq!(
            entry.body(),
            vec!["Genesis 8-11", "Focus: Noah's Ark, Tower of Babel"]
        );
        assert_eq!(entry.title(), "Day 3 — Meskerem");
    }

    #[test]
    fn chronological_projection() {
        const WEEK: ChronologicalWeek = ChronologicalWeek {
            week: 5,
            theme: "Exodus Begins",
            passages: "Exodus 1-18",
            days: 7,
        };
        let entry = ReadingEntry::Chronological(&WEEK);
        assert_eq!(entry.id(), "chrono-5");
        assert_eq!(entry.heading(), "Week 5");
        assert_eq!(entry.body(), vec!["Exodus Begins", "Exodus 1-18", "7 days"]);
    }

    #[test]
    fn nt90_projection() {
        const DAY90: Nt90Day = Nt90Day {
            day: 10,
            book: "Mark",
            chapters: "1-3",
            focus: "Authority",
        };
        let entry = ReadingEntry::Nt90(&DAY90);
        assert_eq!(entry.id(), "nt90-10");
        assert_eq!(entry.body(), vec!["Mark 1-3", "Focus: Authority"]);
        assert_eq!(entry.title(), "Day 10 — Mark");
    }
}
