//! # Scorify Architecture
//!
//! Scorify is a small sales ledger: items are put up for sale, marked sold, refunded,
//! listed, saved to a JSON file and exported to flat formats. The library holds all of
//! that logic; the binary adds an interactive prompt on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prompts, prints colored feedback    │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Ledger, the DataStore and resolved paths        │
//! │  - Turns raw tokens into selectors and formats              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns Result<CmdResult>    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ledger (ledger.rs) · Storage (store/) · Formats (formats/) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to the terminal or exits the process; every
//! outcome is a `CmdResult` carrying leveled messages, or a [`error::ScorifyError`].
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI talks to
//! - [`commands`]: one module per ledger operation
//! - [`ledger`]: the in-memory record store and id/name lookup
//! - [`store`]: durable storage (`FileStore`, `InMemoryStore`)
//! - [`formats`]: JSON, CSV, TXT and Scorify Document writers
//! - [`model`]: `Sale` and `SaleDate`
//! - [`config`]: `scorify.json` and path resolution
//! - [`error`]: error type

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod formats;
pub mod ledger;
pub mod model;
pub mod store;
