use crate::commands::{CmdMessage, CmdResult, ContactUpdate};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    directory: &mut Directory<S>,
    update: &ContactUpdate,
) -> Result<CmdResult> {
    let updated = directory.update(
        &update.old_last_name,
        &update.old_first_name,
        &update.last_name,
        &update.first_name,
        &update.phone,
    )?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact updated: {} {} -> {}",
            update.old_first_name.trim(),
            update.old_last_name.trim(),
            updated
        )))
        .with_affected_contacts(vec![updated]))
}
