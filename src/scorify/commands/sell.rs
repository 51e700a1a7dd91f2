use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScorifyError};
use crate::ledger::Ledger;
use crate::model::{Sale, SaleDate};
use tracing::info;

/// Parses the price token given to `sell`.
///
/// Anything `f64` accepts is taken as is, sign included. Non-finite values are refused
/// because the JSON store cannot represent them.
pub fn parse_price(token: &str) -> Result<f64> {
    match token.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ScorifyError::input("Price must be numeric.")),
    }
}

/// Splits a comma separated tag line, trimming each tag and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

pub fn run(
    ledger: &mut Ledger,
    price: f64,
    name: String,
    tags: Vec<String>,
    date: SaleDate,
) -> Result<CmdResult> {
    let sale = Sale::new(ledger.next_id(), price, name, tags, date);
    info!(id = sale.id, name = %sale.name, "sale added");

    let message = CmdMessage::success(format!(
        "Added sale ID {} for '{}' at ${:.2}",
        sale.id, sale.name, sale.price
    ));
    ledger.push(sale.clone());

    Ok(CmdResult::default()
        .with_affected_sales(vec![sale])
        .with_message(message))
}
