use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScorifyError};
use crate::ledger::{Ledger, SaleSelector};
use tracing::info;

/// Removes the selected sale outright, whether or not it was sold.
pub fn run(ledger: &mut Ledger, selector: &SaleSelector) -> Result<CmdResult> {
    let sale = ledger
        .remove(selector)
        .ok_or_else(|| ScorifyError::SaleNotFound(selector.to_string()))?;
    info!(id = sale.id, "sale refunded");

    let message = CmdMessage::success(format!(
        "Refunded and removed ID {} ('{}')",
        sale.id, sale.name
    ));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_sales(vec![sale]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sale, SaleDate};

    fn ledger() -> Ledger {
        let mut sold = Sale::new(2, 1.0, "b".into(), vec![], SaleDate::new(2024, 1, 1));
        sold.sold = true;
        Ledger::from_sales(vec![
            Sale::new(1, 1.0, "a".into(), vec![], SaleDate::new(2024, 1, 1)),
            sold,
            Sale::new(3, 1.0, "c".into(), vec![], SaleDate::new(2024, 1, 1)),
        ])
    }

    #[test]
    fn removes_exactly_one_sale() {
        let mut ledger = ledger();
        let result = run(&mut ledger, &SaleSelector::Id(1)).unwrap();

        assert_eq!(result.affected_sales[0].id, 1);
        let ids: Vec<u64> = ledger.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn refunds_sold_sales_too() {
        let mut ledger = ledger();
        run(&mut ledger, &"B".parse().unwrap()).unwrap();
        let ids: Vec<u64> = ledger.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_sale_is_a_lookup_error() {
        let mut ledger = ledger();
        let err = run(&mut ledger, &"nothing".parse().unwrap()).unwrap_err();
        assert!(matches!(err, ScorifyError::SaleNotFound(_)));
        assert_eq!(ledger.len(), 3);
    }
}
