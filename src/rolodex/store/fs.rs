use super::{decode, encode, ContactMap, DataStore};
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON file backend. The path is fixed for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || parent.try_exists().map_err(RolodexError::Io)? {
            return Ok(());
        }
        fs::create_dir_all(parent).map_err(RolodexError::Io)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<ContactMap>> {
        if !self.path.try_exists().map_err(RolodexError::Io)? {
            log::debug!("{} does not exist yet, starting empty", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        let contacts = decode(&content)?;
        log::debug!(
            "loaded {} contact(s) from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(Some(contacts))
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = encode(contacts)?;
        fs::write(&self.path, content).map_err(RolodexError::Io)?;
        log::debug!(
            "saved {} contact(s) to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
