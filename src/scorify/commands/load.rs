use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScorifyError};
use crate::ledger::Ledger;
use crate::store::DataStore;
use tracing::warn;

/// Replaces the ledger with what the store holds.
///
/// - nothing stored: the ledger is emptied and a warning is returned
/// - undecodable content: the ledger is emptied and the decode error is returned
/// - any other failure: the error is returned and the ledger is left as it was
pub fn run<S: DataStore>(ledger: &mut Ledger, store: &S) -> Result<CmdResult> {
    match store.load_sales() {
        Ok(Some(sales)) => {
            ledger.replace(sales);
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "Data loaded from {}",
                store.location()
            ))))
        }
        Ok(None) => {
            ledger.clear();
            Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "{} not found, starting new list.",
                store.location()
            ))))
        }
        Err(err @ ScorifyError::Serialization(_)) => {
            warn!(location = %store.location(), error = %err, "discarding undecodable ledger");
            ledger.clear();
            Err(err)
        }
        Err(err) => Err(err),
    }
}
