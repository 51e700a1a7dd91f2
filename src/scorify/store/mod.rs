//! # Storage Layer
//!
//! The durable home of the ledger. The [`DataStore`] trait hides where the serialized
//! sales live so commands can be tested without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file (`sales.json` by default)
//! - [`memory::InMemoryStore`]: keeps the serialized document in memory, for tests
//!
//! ## Contract
//!
//! Stores move whole ledgers, never single records. Both implementations go through
//! [`crate::formats::json`] so they agree byte for byte on the document shape:
//!
//! ```text
//! [
//!     [false, 1, 1, [2024, 1, 15], [19.99, ["a", "b"], "Widget"]],
//!     ...
//! ]
//! ```
//!
//! `load_sales` distinguishes "nothing stored yet" (`Ok(None)`) from "stored but
//! unreadable" (`Err(ScorifyError::Serialization)`). A failed load never modifies what
//! is stored.

use crate::error::Result;
use crate::model::Sale;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the whole ledger. `Ok(None)` when nothing has been saved yet.
    fn load_sales(&self) -> Result<Option<Vec<Sale>>>;

    /// Overwrite the stored ledger with `sales`.
    fn save_sales(&mut self, sales: &[Sale]) -> Result<()>;

    /// Human readable location, used in feedback messages.
    fn location(&self) -> String;
}
