use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derives the identity key of a contact: `firstname_lastname`, trimmed and lowercased.
///
/// Every directory operation goes through this function, so two contacts whose
/// names only differ by case or surrounding whitespace share the same identity.
pub fn derive_key(first_name: &str, last_name: &str) -> String {
    format!("{}_{}", first_name.trim(), last_name.trim()).to_lowercase()
}

/// A single directory entry.
///
/// The serialized field names are `lastName`, `firstName` and `phone`. Files
/// written by older French-language versions of the tool (`nom`, `prenom`,
/// `telephone`) are accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "lastName", alias = "nom")]
    pub last_name: String,
    #[serde(rename = "firstName", alias = "prenom")]
    pub first_name: String,
    #[serde(alias = "telephone")]
    pub phone: String,
}

impl Contact {
    pub fn new(last_name: &str, first_name: &str, phone: &str) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn key(&self) -> String {
        derive_key(&self.first_name, &self.last_name)
    }

    pub fn is_valid(&self) -> bool {
        !self.last_name.is_empty() && !self.first_name.is_empty() && !self.phone.is_empty()
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(RolodexError::Parse)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(RolodexError::Parse)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.phone)
    }
}
