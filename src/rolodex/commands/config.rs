use crate::commands::{CmdMessage, CmdResult};
use crate::config::{RolodexConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RolodexConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => {
            let message = match config.get(&key) {
                Some(value) => CmdMessage::info(format!("{} = {}", key, value)),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            result.add_message(message);
        }
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(config_dir)?;
                log::debug!("saved config in {}", config_dir.display());
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            }
            Err(e) => result.add_message(CmdMessage::error(e)),
        },
    }

    Ok(result)
}
