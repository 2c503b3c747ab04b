//! # Storage Layer
//!
//! The directory keeps its contacts in memory and only touches persistence on an
//! explicit `load` or `save`. Where that state lives is abstracted behind the
//! [`DataStore`] trait so the directory logic can be exercised without a
//! filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, bound at construction
//! - [`memory::InMemoryStore`]: keeps the serialized text in memory, for tests
//!
//! ## Storage Format
//!
//! Both backends share the same representation: a pretty-printed JSON object
//! mapping each derived key to its contact.
//!
//! ```text
//! {
//!   "jean_dupont": {
//!     "lastName": "Dupont",
//!     "firstName": "Jean",
//!     "phone": "0123456789"
//!   }
//! }
//! ```
//!
//! Keys are written in sorted order so that saving the same directory twice
//! produces byte-identical files.
//!
//! On read, every entry is normalized and filed under its own derived key,
//! whatever key the file used. Two entries that resolve to the same identity
//! make the content unreadable.

use crate::error::{Result, RolodexError};
use crate::model::Contact;
use serde::de;
use std::collections::{BTreeMap, HashMap};

pub mod fs;
pub mod memory;

/// In-memory shape of a directory: derived key to contact.
pub type ContactMap = HashMap<String, Contact>;

/// Abstract interface for directory persistence.
pub trait DataStore {
    /// Read the persisted directory. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<ContactMap>>;

    /// Replace the persisted directory with `contacts`.
    fn save(&mut self, contacts: &ContactMap) -> Result<()>;

    /// Human readable description of where the data lives (used in messages).
    fn location(&self) -> String;
}

pub(crate) fn encode(contacts: &ContactMap) -> Result<String> {
    let sorted: BTreeMap<&str, &Contact> =
        contacts.iter().map(|(k, c)| (k.as_str(), c)).collect();
    serde_json::to_string_pretty(&sorted).map_err(RolodexError::Parse)
}

pub(crate) fn decode(text: &str) -> Result<ContactMap> {
    let raw: BTreeMap<String, Contact> = serde_json::from_str(text)?;

    let mut contacts = ContactMap::with_capacity(raw.len());
    for (stored_key, entry) in raw {
        let contact = Contact::new(&entry.last_name, &entry.first_name, &entry.phone);
        let key = contact.key();
        if key != stored_key {
            log::warn!("entry '{}' filed under '{}'", stored_key, key);
        }
        if contacts.insert(key.clone(), contact).is_some() {
            let message = format!("more than one entry for '{}'", key);
            return Err(RolodexError::Parse(de::Error::custom(message)));
        }
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sorts_keys_and_indents() {
        let mut map = ContactMap::new();
        map.insert("zoe_adam".into(), Contact::new("Adam", "Zoe", "1"));
        map.insert("anna_bell".into(), Contact::new("Bell", "Anna", "2"));

        let text = encode(&map).unwrap();
        let anna = text.find("anna_bell").unwrap();
        let zoe = text.find("zoe_adam").unwrap();
        assert!(anna < zoe);
        assert!(text.contains("\n  \"anna_bell\": {\n    \"lastName\": \"Bell\""));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(matches!(decode("[]"), Err(RolodexError::Parse(_))));
        assert!(matches!(
            decode(r#"{"jean_dupont": "not a contact"}"#),
            Err(RolodexError::Parse(_))
        ));
        assert!(matches!(decode(""), Err(RolodexError::Parse(_))));
    }

    #[test]
    fn decode_files_entries_under_their_derived_key() {
        let text = r#"{"jd": {"lastName": " Dupont", "firstName": "Jean ", "phone": "1"}}"#;
        let map = decode(text).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["jean_dupont"], Contact::new("Dupont", "Jean", "1"));
    }

    #[test]
    fn decode_rejects_two_entries_for_one_identity() {
        let text = r#"{
  "jd": { "lastName": "Dupont", "firstName": "Jean", "phone": "1" },
  "jean_dupont": { "lastName": "Dupont", "firstName": "Jean", "phone": "2" }
}"#;
        let err = decode(text).unwrap_err();
        assert!(matches!(err, RolodexError::Parse(_)));
        assert!(err.to_string().contains("more than one entry for 'jean_dupont'"));
    }

    #[test]
    fn decode_reads_what_encode_writes() {
        let mut map = ContactMap::new();
        map.insert("jean_dupont".into(), Contact::new("Dupont", "Jean", "0123456789"));
        assert_eq!(decode(&encode(&map).unwrap()).unwrap(), map);
    }
}
