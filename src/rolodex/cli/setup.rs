use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "A personal contact directory stored as plain JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: CliOptions,
}

/// Options accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct CliOptions {
    /// Directory file to use (default: $ROLODEX_FILE, then config, then ./contacts.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Merge contacts from another directory file before running the command
    #[arg(long, global = true, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Write a full copy of the directory to this file after the command
    #[arg(long, global = true, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Contact(ContactCommand),

    /// Show or set configuration (keys: data-file)
    Config {
        /// Configuration key
        key: Option<String>,

        /// New value (an empty string restores the default)
        value: Option<String>,
    },
}

/// Commands that run against the loaded directory.
#[derive(Subcommand, Debug)]
pub enum ContactCommand {
    /// Add a contact
    #[command(alias = "ajouter")]
    Add {
        /// Last name
        #[arg(short = 'n', long = "last")]
        last_name: String,

        /// First name
        #[arg(short = 'p', long = "first")]
        first_name: String,

        /// Phone number
        #[arg(short = 't', long)]
        phone: String,
    },

    /// Search contacts by name (case-insensitive, partial matches)
    #[command(alias = "rechercher")]
    Search { query: String },

    /// List every contact
    #[command(visible_alias = "ls", alias = "lister")]
    List,

    /// Remove a contact
    #[command(visible_alias = "rm", alias = "supprimer")]
    Remove {
        /// Last name
        #[arg(short = 'n', long = "last")]
        last_name: String,

        /// First name
        #[arg(short = 'p', long = "first")]
        first_name: String,
    },

    /// Replace a contact's names and phone number
    #[command(alias = "modifier")]
    Update {
        /// Current last name
        #[arg(long = "old-last")]
        old_last_name: String,

        /// Current first name
        #[arg(long = "old-first")]
        old_first_name: String,

        /// New last name
        #[arg(short = 'n', long = "last")]
        last_name: String,

        /// New first name
        #[arg(short = 'p', long = "first")]
        first_name: String,

        /// New phone number
        #[arg(short = 't', long)]
        phone: String,
    },
}
