use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    directory: &mut Directory<S>,
    last_name: &str,
    first_name: &str,
) -> Result<CmdResult> {
    let removed = directory.remove(last_name, first_name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact removed: {}",
            removed.full_name()
        )))
        .with_affected_contacts(vec![removed]))
}
