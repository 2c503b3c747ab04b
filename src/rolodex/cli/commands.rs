use super::print::{print_contacts, print_messages};
use super::setup::{Cli, CliOptions, Commands, ContactCommand};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{self, CmdResult, ConfigAction, ContactUpdate, MessageLevel, RolodexApi};
use rolodex::config::{RolodexConfig, DATA_FILE_ENV};
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use std::path::{Path, PathBuf};

struct AppContext {
    api: RolodexApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.options.verbose);

    match cli.command {
        Commands::Config { key, value } => handle_config(key, value),
        Commands::Contact(command) => run_on_directory(&cli.options, command),
    }
}

/// load → import → command → save → export. An error anywhere skips the save.
fn run_on_directory(options: &CliOptions, command: ContactCommand) -> Result<()> {
    let mut ctx = init_context(options.file.as_deref())?;

    if let Some(path) = &options.import {
        let result = ctx.api.import_file(path)?;
        print_messages(&result.messages);
    }

    match command {
        ContactCommand::Add {
            last_name,
            first_name,
            phone,
        } => handle_add(&mut ctx, &last_name, &first_name, &phone),
        ContactCommand::Search { query } => handle_search(&ctx, &query),
        ContactCommand::List => handle_list(&ctx),
        ContactCommand::Remove {
            last_name,
            first_name,
        } => handle_remove(&mut ctx, &last_name, &first_name),
        ContactCommand::Update {
            old_last_name,
            old_first_name,
            last_name,
            first_name,
            phone,
        } => handle_update(
            &mut ctx,
            ContactUpdate::new(old_last_name, old_first_name, last_name, first_name, phone),
        ),
    }?;

    ctx.api.save()?;

    if let Some(path) = &options.export {
        let result = ctx.api.export_file(path)?;
        print_messages(&result.messages);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn init_context(file: Option<&Path>) -> Result<AppContext> {
    let config = load_config();
    let env_file = std::env::var(DATA_FILE_ENV).ok();
    let data_file = config.resolve_data_file(file, env_file.as_deref());
    log::debug!("using directory file {}", data_file.display());

    let mut api = RolodexApi::new(FileStore::new(data_file));
    api.load()?;

    Ok(AppContext { api })
}

fn config_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "rolodex", "rolodex")?;
    Some(dirs.config_dir().to_path_buf())
}

fn load_config() -> RolodexConfig {
    let Some(dir) = config_dir() else {
        return RolodexConfig::default();
    };
    RolodexConfig::load(dir).unwrap_or_else(|e| {
        log::warn!("ignoring config: {}", e);
        RolodexConfig::default()
    })
}

fn handle_add(ctx: &mut AppContext, last_name: &str, first_name: &str, phone: &str) -> Result<()> {
    let result = ctx.api.add_contact(last_name, first_name, phone)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_contacts(query)?;
    print_listing(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print_listing(&result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, last_name: &str, first_name: &str) -> Result<()> {
    let result = ctx.api.remove_contact(last_name, first_name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, update: ContactUpdate) -> Result<()> {
    let result = ctx.api.update_contact(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir()
        .ok_or_else(|| RolodexError::Config("no home directory for the config".to_string()))?;
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(&dir, action)?;
    let failure = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error);
    if let Some(message) = failure {
        return Err(RolodexError::Config(message.content.clone()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_listing(result: &CmdResult) {
    print_messages(&result.messages);
    print_contacts(&result.listed_contacts);
}
