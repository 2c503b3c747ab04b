//! # Directory Store
//!
//! [`Directory`] owns every contact, keyed by [`derive_key`]. It is the only
//! place that enforces the one-contact-per-identity invariant.
//!
//! Mutations only touch memory. Persistence happens when the caller asks for
//! it through [`Directory::save`] / [`Directory::load`], which delegate to the
//! bound [`DataStore`].
//!
//! Results of [`Directory::list`] and [`Directory::search`] are sorted by
//! derived key. The underlying map has no iteration order, so sorting keeps
//! output stable across runs.

use crate::error::{Result, RolodexError};
use crate::model::{derive_key, Contact};
use crate::store::{ContactMap, DataStore};

pub struct Directory<S: DataStore> {
    contacts: ContactMap,
    store: S,
}

impl<S: DataStore> Directory<S> {
    /// An empty directory bound to `store`. Nothing is read until [`Directory::load`].
    pub fn new(store: S) -> Self {
        Self {
            contacts: ContactMap::new(),
            store,
        }
    }

    /// Shorthand for [`Directory::new`] followed by [`Directory::load`].
    pub fn open(store: S) -> Result<Self> {
        let mut directory = Self::new(store);
        directory.load()?;
        Ok(directory)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, last_name: &str, first_name: &str, phone: &str) -> Result<()> {
        let key = derive_key(first_name, last_name);
        if self.contacts.contains_key(&key) {
            return Err(duplicate(first_name, last_name));
        }

        let contact = Contact::new(last_name, first_name, phone);
        if !contact.is_valid() {
            return Err(RolodexError::InvalidRecord);
        }

        self.contacts.insert(key, contact);
        Ok(())
    }

    /// Case-insensitive substring search over the derived key, last name and first name.
    pub fn search(&self, query: &str) -> Result<Vec<Contact>> {
        let needle = query.to_lowercase();
        let mut matches: Vec<(&String, &Contact)> = self
            .contacts
            .iter()
            .filter(|(key, contact)| {
                key.contains(&needle)
                    || contact.last_name.to_lowercase().contains(&needle)
                    || contact.first_name.to_lowercase().contains(&needle)
            })
            .collect();

        if matches.is_empty() {
            return Err(RolodexError::NotFound(query.to_string()));
        }

        matches.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(matches.into_iter().map(|(_, c)| c.clone()).collect())
    }

    pub fn list(&self) -> Vec<Contact> {
        let mut entries: Vec<(&String, &Contact)> = self.contacts.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn get(&self, last_name: &str, first_name: &str) -> Option<&Contact> {
        self.contacts.get(&derive_key(first_name, last_name))
    }

    /// Removes a contact by identity and returns it.
    pub fn remove(&mut self, last_name: &str, first_name: &str) -> Result<Contact> {
        let key = derive_key(first_name, last_name);
        self.contacts
            .remove(&key)
            .ok_or_else(|| not_found(first_name, last_name))
    }

    /// Replaces the contact identified by the old names with a new record.
    ///
    /// All checks run before the old entry is touched: on any error the
    /// directory is left exactly as it was. Keeping the same identity (a phone
    /// change, or a rename that only changes case) is allowed.
    pub fn update(
        &mut self,
        old_last_name: &str,
        old_first_name: &str,
        new_last_name: &str,
        new_first_name: &str,
        new_phone: &str,
    ) -> Result<Contact> {
        let old_key = derive_key(old_first_name, old_last_name);
        if !self.contacts.contains_key(&old_key) {
            return Err(not_found(old_first_name, old_last_name));
        }

        let new_key = derive_key(new_first_name, new_last_name);
        if new_key != old_key && self.contacts.contains_key(&new_key) {
            return Err(duplicate(new_first_name, new_last_name));
        }

        let contact = Contact::new(new_last_name, new_first_name, new_phone);
        if !contact.is_valid() {
            return Err(RolodexError::InvalidRecord);
        }

        self.contacts.remove(&old_key);
        self.contacts.insert(new_key, contact.clone());
        Ok(contact)
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Writes the whole directory to the bound store, overwriting previous content.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.contacts)
    }

    /// Writes a full copy of the directory to another store. The bound store is untouched.
    pub fn save_to<T: DataStore>(&self, target: &mut T) -> Result<()> {
        target.save(&self.contacts)
    }

    /// Replaces the in-memory contents with what the store holds.
    ///
    /// A store with nothing persisted yet is not an error: the directory is
    /// simply emptied.
    pub fn load(&mut self) -> Result<()> {
        self.contacts = self.store.load()?.unwrap_or_default();
        Ok(())
    }
}

fn duplicate(first_name: &str, last_name: &str) -> RolodexError {
    RolodexError::Duplicate {
        first: first_name.trim().to_string(),
        last: last_name.trim().to_string(),
    }
}

fn not_found(first_name: &str, last_name: &str) -> RolodexError {
    RolodexError::NotFound(format!("{} {}", first_name.trim(), last_name.trim()))
}
