use crate::model::Contact;

pub mod add;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Replacement values for `update`. The old names select the contact, the
/// remaining fields describe the record that takes its place.
#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub old_last_name: String,
    pub old_first_name: String,
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
}

impl ContactUpdate {
    pub fn new(
        old_last_name: impl Into<String>,
        old_first_name: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            old_last_name: old_last_name.into(),
            old_first_name: old_first_name.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            phone: phone.into(),
        }
    }
}
