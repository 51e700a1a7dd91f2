use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::Ledger;

pub fn run(ledger: &Ledger) -> Result<CmdResult> {
    if ledger.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No sales yet.")));
    }
    Ok(CmdResult::default().with_listed_sales(ledger.iter().cloned().collect()))
}
