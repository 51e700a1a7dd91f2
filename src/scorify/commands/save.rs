use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::store::DataStore;

pub fn run<S: DataStore>(ledger: &Ledger, store: &mut S) -> Result<CmdResult> {
    store.save_sales(ledger.sales())?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Data saved to {}",
        store.location()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load;
    use crate::model::{Sale, SaleDate};
    use crate::error::ScorifyError;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_reproduces_ledger() {
        let mut sold = Sale::new(3, 0.5, "Sticker".into(), vec![], SaleDate::new(2023, 11, 30));
        sold.sold = true;
        let original = Ledger::from_sales(vec![
            Sale::new(
                1,
                19.99,
                "Widget".into(),
                vec!["a".into(), "b".into()],
                SaleDate::new(2024, 1, 15),
            ),
            sold,
        ]);
        let mut store = InMemoryStore::new();

        let result = run(&original, &mut store).unwrap();
        assert_eq!(result.messages[0].content, "Data saved to memory");

        let mut reloaded = Ledger::new();
        load::run(&mut reloaded, &store).unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn failed_write_propagates_and_keeps_ledger() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        let ledger = Ledger::from_sales(vec![Sale::new(
            1,
            2.0,
            "Pin".into(),
            vec![],
            SaleDate::new(2024, 5, 1),
        )]);

        let err = run(&ledger, &mut store).unwrap_err();
        assert!(matches!(err, ScorifyError::Io(_)));
        assert_eq!(ledger.len(), 1);
    }
}
