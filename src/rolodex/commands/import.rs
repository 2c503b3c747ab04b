//! Best-effort merge of another directory file into the current one.
//!
//! Every contact of the source goes through [`Directory::add`]. Identities that
//! already exist are skipped and counted, never overwritten. Invalid records
//! are skipped with a warning. Only an unreadable or malformed source fails
//! the whole import.

use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RolodexError};
use crate::store::DataStore;

pub fn run<S: DataStore, T: DataStore>(
    directory: &mut Directory<S>,
    source: &T,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(contacts) = source.load()? else {
        let message = format!("Nothing to import: {} not found", source.location());
        result.add_message(CmdMessage::warning(message));
        return Ok(result);
    };

    let mut entries: Vec<_> = contacts.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut skipped = 0;
    for (key, contact) in entries {
        match directory.add(&contact.last_name, &contact.first_name, &contact.phone) {
            Ok(()) => result.affected_contacts.push(contact),
            Err(e) if e.is_duplicate() => {
                log::debug!("import: {} already present, skipped", key);
                skipped += 1;
            }
            Err(RolodexError::InvalidRecord) => {
                log::warn!("import: entry '{}' has blank fields, skipped", key);
                let message = format!("Skipped invalid entry '{}'", key);
                result.add_message(CmdMessage::warning(message));
            }
            Err(e) => return Err(e),
        }
    }

    let imported = result.affected_contacts.len();
    let message = format!(
        "Imported {} contact(s) from {} ({} already present)",
        imported,
        source.location(),
        skipped
    );
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
