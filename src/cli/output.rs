use serde::Serialize;

use crate::catalog::StudyDetail;
use crate::model::Month;
use crate::ops::search::SearchHit;
use crate::render::EntryCard;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CardJson {
    pub id: String,
    pub heading: String,
    pub title: String,
    pub body: Vec<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct MonthJson {
    pub slug: String,
    pub name: String,
    pub english: String,
    pub weeks: String,
    pub reading: String,
    pub theme: String,
    pub days: u32,
}

#[derive(Serialize)]
pub struct ProgressJson {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
    pub calendar: usize,
    pub chronological: usize,
    pub nt90: usize,
}

#[derive(Serialize)]
pub struct StudyDetailJson {
    pub id: String,
    pub theme: String,
    pub questions: Vec<String>,
    pub memory_verse_reference: String,
    pub memory_verse_text: String,
    pub application: String,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    pub plan: String,
    pub id: String,
    pub field: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn card_to_json(card: &EntryCard, note: Option<&str>) -> CardJson {
    CardJson {
        id: card.id.clone(),
        heading: card.heading.clone(),
        title: card.title.clone(),
        body: card.body.clone(),
        completed: card.completed,
        note: note.map(|s| s.to_string()),
    }
}

pub fn month_to_json(month: &Month) -> MonthJson {
    MonthJson {
        slug: month.slug.to_string(),
        name: month.name.to_string(),
        english: month.english.to_string(),
        weeks: month.weeks.to_string(),
        reading: month.reading.to_string(),
        theme: month.theme.to_string(),
        days: month.days,
    }
}

pub fn detail_to_json(id: &str, detail: &StudyDetail) -> StudyDetailJson {
    StudyDetailJson {
        id: id.to_string(),
        theme: detail.theme.to_string(),
        questions: detail.questions.iter().map(|q| q.to_string()).collect(),
        memory_verse_reference: detail.memory_verse.reference.to_string(),
        memory_verse_text: detail.memory_verse.text.to_string(),
        application: detail.application.to_string(),
    }
}

pub fn hit_to_json(hit: &SearchHit) -> SearchHitJson {
    SearchHitJson {
        plan: hit.plan.to_string(),
        id: hit.id.clone(),
        field: hit.field.label().to_string(),
        text: hit.text.clone(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

fn checkbox(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// One-line listing form: `[x] meskerem-3    Genesis 8-11 *`
pub fn format_card_line(card: &EntryCard) -> String {
    let note_marker = if card.has_note { " *" } else { "" };
    let summary = card.body.first().map(|s| s.as_str()).unwrap_or("");
    format!(
        "[{}] {:<14} {}{}",
        checkbox(card.completed),
        card.id,
        summary,
        note_marker
    )
}

/// Multi-line detail form for `show`.
pub fn format_card_detail(card: &EntryCard, note: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("[{}] {}", checkbox(card.completed), card.title));
    lines.push(format!("    id: {}", card.id));
    for body_line in &card.body {
        lines.push(format!("    {}", body_line));
    }
    if let Some(note) = note {
        lines.push(String::new());
        lines.push("    Note:".to_string());
        for note_line in note.lines() {
            lines.push(format!("    {}", note_line));
        }
    }
    lines
}

/// Multi-line study-detail form for `details`.
pub fn format_study_detail(id: &str, detail: &StudyDetail) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{} — {}", id, detail.theme));
    lines.push(String::new());
    lines.push("Discussion questions:".to_string());
    for (i, question) in detail.questions.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, question));
    }
    lines.push(String::new());
    lines.push(format!("Memory verse ({}):", detail.memory_verse.reference));
    lines.push(format!("  {}", detail.memory_verse.text));
    lines.push(String::new());
    lines.push(format!("Application: {}", detail.application));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(completed: bool, has_note: bool) -> EntryCard {
        EntryCard {
            id: "meskerem-3".to_string(),
            heading: "Day 3".to_string(),
            title: "Day 3 — Meskerem".to_string(),
            body: vec![
                "Genesis 8-11".to_string(),
                "Focus: Noah's Ark, Tower of Babel".to_string(),
            ],
            completed,
            has_note,
        }
    }

    #[test]
    fn line_form_shows_state_and_note_marker() {
        assert_eq!(
            format_card_line(&card(true, true)),
            "[x] meskerem-3     Genesis 8-11 *"
        );
        assert_eq!(
            format_card_line(&card(false, false)),
            "[ ] meskerem-3     Genesis 8-11"
        );
    }

    #[test]
    fn detail_form_includes_note() {
        let lines = format_card_detail(&card(false, true), Some("remember this"));
        assert_eq!(lines[0], "[ ] Day 3 — Meskerem");
        assert!(lines.contains(&"    Note:".to_string()));
        assert!(lines.contains(&"    remember this".to_string()));
    }

    #[test]
    fn card_json_skips_missing_note() {
        let json = serde_json::to_string(&card_to_json(&card(true, false), None)).unwrap();
        assert!(!json.contains("note"));
        assert!(json.contains(r#""completed":true"#));
    }
}
