use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScorifyError};
use crate::ledger::{Ledger, SaleSelector};
use tracing::info;

pub fn run(ledger: &mut Ledger, selector: &SaleSelector) -> Result<CmdResult> {
    let sale = ledger
        .find_mut(selector)
        .ok_or_else(|| ScorifyError::SaleNotFound(selector.to_string()))?;

    if sale.sold {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Already marked as sold."))
            .with_affected_sales(vec![sale.clone()]));
    }

    sale.sold = true;
    info!(id = sale.id, "sale marked sold");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Marked as SOLD: {} (ID {})",
            sale.name, sale.id
        )))
        .with_affected_sales(vec![sale.clone()]))
}
