//! # CLI Layer
//!
//! One client of the rolodex library, and the only place that knows about
//! terminal output, process exit codes and argument parsing.
//!
//! ## Flow
//!
//! Every invocation runs the same pipeline:
//!
//! 1. resolve the backing file (`--file`, `ROLODEX_FILE`, config, default)
//! 2. load it (a missing file is an empty directory)
//! 3. merge `--import` if given
//! 4. run the subcommand
//! 5. save the directory
//! 6. write `--export` if given
//!
//! Any error aborts the pipeline before the save, so a failed command never
//! persists a partial state.
//!
//! `config` is the exception: it reads and writes `config.json` in the
//! platform config directory and never opens the contact file.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
