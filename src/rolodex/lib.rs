//! # Rolodex Architecture
//!
//! Rolodex is a small personal contact directory. The library owns all of the
//! behavior; the `rolodex` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, maps errors to exit    │
//! │    codes                                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, search, list, remove, update, import, export,       │
//! │    config                                                   │
//! │  - Turns directory outcomes into user-facing messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directory (directory.rs) over a DataStore (store/)         │
//! │  - Keyed contacts, identity rules, explicit load/save       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! A contact is identified by [`model::derive_key`]: its first and last name,
//! trimmed, joined by `_` and lowercased. `Jean Dupont` and ` jean  DUPONT`
//! are the same contact; the directory holds at most one of them.
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! The only filesystem access is through [`store::DataStore`] implementations,
//! and only on an explicit load or save.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`directory`]: The keyed in-memory contact store
//! - [`store`]: Persistence backends
//! - [`model`]: The `Contact` record and key derivation
//! - [`config`]: Configuration and backing file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;
