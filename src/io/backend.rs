use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Storage key for the completed-identifier set (JSON array of strings)
pub const COMPLETED_KEY: &str = "completedReadings";
/// Storage key for the notes map (JSON object, identifier → note)
pub const NOTES_KEY: &str = "readingNotes";

/// A string key-value persistence backend.
///
/// The progress store is the only caller. Reads that fail for any reason
/// surface as `None`; only writes report errors.
pub trait KvBackend {
    /// Read the raw value for a key, or `None` if absent/unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Write the value for a key
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    /// Directory for the failure journal, if this backend has one
    fn journal_dir(&self) -> Option<&Path> {
        None
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// File-backed store: each key lives at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        atomic_write(&self.key_path(key), value.as_bytes())
    }

    fn journal_dir(&self) -> Option<&Path> {
        Some(&self.dir)
    }
}

/// In-memory store used by tests and by components that need a scratch state.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    /// When set, every write fails (simulates quota/disk errors)
    pub fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Seed a raw value, bypassing the store (for corruption tests)
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("simulated write failure"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_backend_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::new(dir.path());
        assert!(backend.get(COMPLETED_KEY).is_none());

        backend.set(COMPLETED_KEY, r#"["meskerem-1"]"#).unwrap();
        assert_eq!(
            backend.get(COMPLETED_KEY).unwrap(),
            r#"["meskerem-1"]"#
        );
        assert!(dir.path().join("completedReadings.json").exists());
    }

    #[test]
    fn memory_backend_write_failure() {
        let mut backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        backend.fail_writes = true;
        assert!(backend.set("k", "w").is_err());
        // Prior value untouched
        assert_eq!(backend.get("k").unwrap(), "v");
    }

    #[test]
    fn atomic_write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.json");
        atomic_write(&path, b"one").unwrap();
        atomic_write(&path, b"two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }
}
