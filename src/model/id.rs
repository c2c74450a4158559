use serde::{Deserialize, Serialize};

/// Which reading plan an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Calendar,
    Chronological,
    Nt90,
}

impl PlanKind {
    /// Parse a plan name as given on the command line
    pub fn parse_name(s: &str) -> Option<PlanKind> {
        match s {
            "calendar" => Some(PlanKind::Calendar),
            "chronological" | "chrono" => Some(PlanKind::Chronological),
            "nt90" => Some(PlanKind::Nt90),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanKind::Calendar => write!(f, "calendar"),
            PlanKind::Chronological => write!(f, "chronological"),
            PlanKind::Nt90 => write!(f, "nt90"),
        }
    }
}

/// A reading identifier split back into its plan namespace and entry key.
///
/// The key is the suffix after the namespace prefix: the week number for
/// `chrono-{week}`, the day number for `nt90-{day}`, and the whole
/// `{month-slug}-{day}` string for calendar identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedId<'a> {
    pub plan: PlanKind,
    pub key: &'a str,
}

/// Build a calendar identifier: `{month-slug}-{day}` (e.g. `meskerem-3`)
pub fn calendar_id(month_slug: &str, day: u32) -> String {
    format!("{}-{}", month_slug, day)
}

/// Build a chronological-plan identifier: `chrono-{week}`
pub fn chrono_id(week: u32) -> String {
    format!("chrono-{}", week)
}

/// Build a 90-day-plan identifier: `nt90-{day}`
pub fn nt90_id(day: u32) -> String {
    format!("nt90-{}", day)
}

/// Classify an identifier back into its plan namespace.
///
/// Known prefixes win; anything else is a calendar identifier. Month slugs
/// are fixed catalog content and never start with a plan prefix, so the
/// namespaces cannot collide.
pub fn parse_id(id: &str) -> ParsedId<'_> {
    if let Some(key) = id.strip_prefix("chrono-") {
        ParsedId {
            plan: PlanKind::Chronological,
            key,
        }
    } else if let Some(key) = id.strip_prefix("nt90-") {
        ParsedId {
            plan: PlanKind::Nt90,
            key,
        }
    } else {
        ParsedId {
            plan: PlanKind::Calendar,
            key: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_parse_round_trip() {
        assert_eq!(calendar_id("meskerem", 3), "meskerem-3");
        assert_eq!(chrono_id(12), "chrono-12");
        assert_eq!(nt90_id(90), "nt90-90");

        assert_eq!(
            parse_id("meskerem-3"),
            ParsedId {
                plan: PlanKind::Calendar,
                key: "meskerem-3"
            }
        );
        assert_eq!(
            parse_id("chrono-12"),
            ParsedId {
                plan: PlanKind::Chronological,
                key: "12"
            }
        );
        assert_eq!(
            parse_id("nt90-90"),
            ParsedId {
                plan: PlanKind::Nt90,
                key: "90"
            }
        );
    }

    #[test]
    fn unknown_prefix_is_calendar() {
        let parsed = parse_id("something-else-7");
        assert_eq!(parsed.plan, PlanKind::Calendar);
        assert_eq!(parsed.key, "something-else-7");
    }

    #[test]
    fn plan_name_parsing() {
        assert_eq!(PlanKind::parse_name("calendar"), Some(PlanKind::Calendar));
        assert_eq!(
            PlanKind::parse_name("chrono"),
            Some(PlanKind::Chronological)
        );
        assert_eq!(PlanKind::parse_name("nt90"), Some(PlanKind::Nt90));
        assert_eq!(PlanKind::parse_name("bogus"), None);
    }
}
