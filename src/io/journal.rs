//! Append-only failure journal.
//!
//! Storage failures are never surfaced as errors to the user; they land here
//! so a missing note or completion mark can be explained after the fact.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

/// Return the path to the journal file.
pub fn journal_path(dir: &Path) -> PathBuf {
    dir.join(".journal.log")
}

/// Append one timestamped line to the journal. Best-effort: a journal that
/// cannot be written is silently skipped (there is nowhere left to report to).
pub fn log_failure(dir: &Path, context: &str, detail: &str) {
    let line = format!(
        "{} {}: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        context,
        detail
    );
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(journal_path(dir))
        .and_then(|mut f| f.write_all(line.as_bytes()));
}
