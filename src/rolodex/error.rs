use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("A contact named '{first} {last}' already exists")]
    Duplicate { first: String, last: String },

    #[error("Invalid contact: last name, first name and phone are all required")]
    InvalidRecord,

    #[error("No contact found for '{0}'")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RolodexError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RolodexError::Duplicate { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RolodexError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
