use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(directory: &Directory<S>) -> Result<CmdResult> {
    let contacts = directory.list();
    let summary = if contacts.is_empty() {
        CmdMessage::info("The directory is empty.")
    } else {
        CmdMessage::info(format!("{} contact(s) in the directory", contacts.len()))
    };
    Ok(CmdResult::default()
        .with_listed_contacts(contacts)
        .with_message(summary))
}
