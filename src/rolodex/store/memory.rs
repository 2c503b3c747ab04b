use super::{decode, encode, ContactMap, DataStore};
use crate::error::Result;

/// Keeps the serialized directory in memory. Goes through the same encoding as
/// [`super::fs::FileStore`], so format problems surface in unit tests too.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    saved: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `text`, as if a file with that content existed.
    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            saved: Some(text.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<ContactMap>> {
        self.saved.as_deref().map(decode).transpose()
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        self.saved = Some(encode(contacts)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---
