//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the [`Directory`] and dispatches each call to the matching
//! `commands::<name>::run`.
//!
//! The API does no printing and holds no business rules of its own: it returns
//! [`CmdResult`]s and leaves presentation to the caller.
//!
//! `RolodexApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`
//!
//! Nothing is persisted implicitly. Callers decide when to [`RolodexApi::save`].
//!
//! Configuration lives outside the directory, so [`config`] is a free function
//! over the config directory and needs no store.

use crate::commands;
use crate::directory::Directory;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::path::Path;

pub struct RolodexApi<S: DataStore> {
    directory: Directory<S>,
}

impl<S: DataStore> RolodexApi<S> {
    /// Wraps `store` without reading it. Call [`RolodexApi::load`] to hydrate.
    pub fn new(store: S) -> Self {
        Self {
            directory: Directory::new(store),
        }
    }

    pub fn directory(&self) -> &Directory<S> {
        &self.directory
    }

    pub fn load(&mut self) -> Result<()> {
        self.directory.load()
    }

    pub fn save(&mut self) -> Result<()> {
        self.directory.save()
    }

    pub fn count(&self) -> usize {
        self.directory.count()
    }

    pub fn add_contact(
        &mut self,
        last_name: &str,
        first_name: &str,
        phone: &str,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.directory, last_name, first_name, phone)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.directory, query)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.directory)
    }

    pub fn remove_contact(&mut self, last_name: &str, first_name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.directory, last_name, first_name)
    }

    pub fn update_contact(&mut self, update: &ContactUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.directory, update)
    }

    pub fn import_from<T: DataStore>(&mut self, source: &T) -> Result<CmdResult> {
        commands::import::run(&mut self.directory, source)
    }

    pub fn export_to<T: DataStore>(&self, target: &mut T) -> Result<CmdResult> {
        commands::export::run(&self.directory, target)
    }

    /// Imports from a JSON directory file.
    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        self.import_from(&FileStore::new(path))
    }

    /// Exports to a JSON directory file, overwriting it.
    pub fn export_file(&self, path: &Path) -> Result<CmdResult> {
        self.export_to(&mut FileStore::new(path))
    }
}

/// Shows or changes user configuration stored in `config_dir`.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> RolodexApi<InMemoryStore> {
        RolodexApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        api.add_contact("Dupont", "Jean", "0123456789").unwrap();
        let result = api.list_contacts().unwrap();
        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(api.count(), 1);
    }

    #[test]
    fn search_dispatches_query() {
        let mut api = api();
        api.add_contact("Dupont", "Jean", "0123456789").unwrap();
        let result = api.search_contacts("jean").unwrap();
        assert_eq!(result.listed_contacts[0].last_name, "Dupont");
    }

    #[test]
    fn update_and_remove_dispatch() {
        let mut api = api();
        api.add_contact("Dupont", "Jean", "0123456789").unwrap();
        let update = ContactUpdate::new("Dupont", "Jean", "Dupont", "Jean", "0000000000");
        api.update_contact(&update).unwrap();
        let phone = &api.directory().get("Dupont", "Jean").unwrap().phone;
        assert_eq!(phone, "0000000000");

        api.remove_contact("Dupont", "Jean").unwrap();
        assert_eq!(api.count(), 0);
    }

    #[test]
    fn mutations_are_not_persisted_until_save() {
        let mut api = api();
        api.add_contact("Dupont", "Jean", "0123456789").unwrap();
        assert!(api.directory().store().content().is_none());

        api.save().unwrap();
        assert!(api
            .directory()
            .store()
            .content()
            .unwrap()
            .contains("jean_dupont"));
    }

    #[test]
    fn import_then_export_round_trip() {
        let mut source = InMemoryStore::new();
        {
            let mut other = api();
            other.add_contact("Martin", "Pierre", "0987654321").unwrap();
            other.export_to(&mut source).unwrap();
        }

        let mut api = api();
        api.import_from(&source).unwrap();
        assert_eq!(api.count(), 1);

        let mut target = InMemoryStore::new();
        api.export_to(&mut target).unwrap();
        assert_eq!(target.content(), source.content());
    }

    #[test]
    fn config_dispatches_to_the_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let action = ConfigAction::Set("data-file".into(), "book.json".into());
        config(temp_dir.path(), action).unwrap();

        let result = config(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages[0].content, "data-file = book.json");
    }
}
