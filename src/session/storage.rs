use crate::models::Session;

/// Storage backend for the persisted session list.
pub trait SessionStore: Send + Sync {
    /// Read the persisted list. A missing or malformed blob yields an
    /// empty list; startup never fails on bad data.
    fn load(&self) -> Vec<Session>;

    /// Overwrite the persisted blob with the full current list.
    fn save(&self, sessions: &[Session]) -> Result<(), Box<dyn std::error::Error>>;
}
