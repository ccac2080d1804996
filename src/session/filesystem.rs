use super::storage::SessionStore;
use crate::models::Session;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSIONS_FILE: &str = "ivan_sessions.json";

/// Keeps the whole session list as one JSON file under the cache
/// directory. Last write wins; there is no partial-write guarantee.
pub struct FilesystemSessionStore {
    dir: PathBuf,
}

impl FilesystemSessionStore {
    pub fn new() -> Self {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            dir: Path::new(&home).join(".cache").join("ivan"),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self) -> PathBuf {
        self.dir.join(SESSIONS_FILE)
    }
}

impl SessionStore for FilesystemSessionStore {
    fn load(&self) -> Vec<Session> {
        let Ok(content) = fs::read_to_string(self.blob_path()) else {
            return Vec::new();
        };
        // A blob that no longer parses is treated as no prior history.
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&self, sessions: &[Session]) -> Result<(), Box<dyn std::error::Error>> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let content = serde_json::to_string_pretty(sessions)?;
        fs::write(self.blob_path(), content)?;
        Ok(())
    }
}

impl Default for FilesystemSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
