//! # Modtrack Architecture
//!
//! Modtrack keeps track of university modules: their lectures and tutorials,
//! where and when they happen, who teaches them and what is due. The crate is
//! a library first; the `modtrack` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results, owns exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parse, execute, persist, commit                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser Layer (parser/)                                     │
//! │  - Tokenizes prefixed arguments, validates every field      │
//! │  - Produces a `Command` or a `ParseError`                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs against `TrackerState`, returns `CmdResult`         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (fields.rs, model.rs, tracker.rs, view.rs)           │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validated values only
//!
//! Every string attribute of a [`model::Module`] is a newtype from
//! [`fields`] that can only be built by passing its rule. Parsers and the
//! JSON store both go through the same [`fields::FieldRules`] table, so a
//! module in the tracker is always well-formed no matter where it came from.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward nothing prints or exits. Results come back as
//! [`commands::CmdResult`] values holding messages and listed modules, and
//! the binary decides how to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`parser`]: Tokenizer and per-command parsers
//! - [`commands`]: What each command does
//! - [`fields`]: Field newtypes and the rule table
//! - [`model`]: `Module` and `EditModuleDescriptor`
//! - [`tracker`]: The unique module collection
//! - [`view`]: Filtering and sorting of the displayed list
//! - [`state`]: Tracker plus view, as seen by commands
//! - [`index`]: One-based display indexes
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod parser;
pub mod state;
pub mod store;
pub mod tracker;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
