//! # API Facade
//!
//! The single entry point for ledger operations, whatever the UI. `ScorifyApi` owns the
//! in-memory [`Ledger`], the durable [`DataStore`] and the resolved [`ScorifyPaths`], and
//! hands the right pieces to each command.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (raw identifier strings become [`SaleSelector`]s, format names
//!   become [`ExportFormat`]s)
//! - **Returns structured types** (`Result<CmdResult>`) and never prints
//!
//! Generic over `DataStore`: `ScorifyApi<FileStore>` in production,
//! `ScorifyApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::ScorifyPaths;
use crate::error::Result;
use crate::formats::ExportFormat;
use crate::ledger::{Ledger, SaleSelector};
use crate::model::SaleDate;
use crate::store::DataStore;

pub struct ScorifyApi<S: DataStore> {
    ledger: Ledger,
    store: S,
    paths: ScorifyPaths,
}

impl<S: DataStore> ScorifyApi<S> {
    /// Starts with an empty ledger; call [`ScorifyApi::load`] to read the store.
    pub fn new(store: S, paths: ScorifyPaths) -> Self {
        Self {
            ledger: Ledger::new(),
            store,
            paths,
        }
    }

    pub fn sell(&mut self, price: f64, name: String, tags: &str) -> Result<CmdResult> {
        let tags = commands::sell::parse_tags(tags);
        commands::sell::run(&mut self.ledger, price, name, tags, SaleDate::today())
    }

    pub fn mark_sold(&mut self, identifier: &str) -> Result<CmdResult> {
        commands::sold::run(&mut self.ledger, &parse_selector(identifier))
    }

    pub fn refund(&mut self, identifier: &str) -> Result<CmdResult> {
        commands::refund::run(&mut self.ledger, &parse_selector(identifier))
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.ledger)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&mut self.ledger, &self.store)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&self.ledger, &mut self.store)
    }

    pub fn export(&self, format: &str) -> Result<CmdResult> {
        let format: ExportFormat = format.parse()?;
        let path = self.paths.export_path(format);
        commands::export::run(&self.ledger, format, &path)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_selector(identifier: &str) -> SaleSelector {
    match identifier.parse() {
        Ok(selector) => selector,
        Err(never) => match never {},
    }
}

pub use commands::sell::parse_price;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
