//! # CLI Layer
//!
//! One possible UI for scorify: an interactive prompt on stdin/stdout. This is the only
//! place that knows about the terminal. It builds the API from configuration, runs the
//! command loop, and renders every `CmdResult` or error as colored text.
//!
//! - `repl`: the command table, dispatch and the read-eval-print loop
//! - `print`: rendering of messages, sale lines and errors

mod print;
mod repl;

use repl::Repl;
use scorify::api::ScorifyApi;
use scorify::config::{ScorifyConfig, HOME_ENV};
use scorify::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

fn data_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

pub fn run() -> io::Result<()> {
    let data_dir = data_dir();
    let config = ScorifyConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        ScorifyConfig::default()
    });
    let paths = config.paths(&data_dir);
    debug!(sales_file = %paths.sales_file.display(), "starting");

    let store = FileStore::new(&paths.sales_file);
    let api = ScorifyApi::new(store, paths);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(api, stdin.lock(), stdout.lock()).run()
}
