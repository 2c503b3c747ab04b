use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(directory: &Directory<S>, query: &str) -> Result<CmdResult> {
    let found = directory.search(query)?;
    let message = format!("{} contact(s) found for '{}'", found.len(), query);
    Ok(CmdResult::default()
        .with_listed_contacts(found)
        .with_message(CmdMessage::info(message)))
}
