use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;

/// Writes a full copy of the directory to `target`, overwriting whatever it held.
pub fn run<S: DataStore, T: DataStore>(
    directory: &Directory<S>,
    target: &mut T,
) -> Result<CmdResult> {
    directory.save_to(target)?;

    let count = directory.count();
    let location = target.location();
    log::debug!("exported {} contact(s) to {}", count, location);

    let message = format!("Exported {} contact(s) to {}", count, location);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
