use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format version stamped on every sale this tool creates.
pub const SCHEMA_VERSION: u32 = 1;

/// Calendar day a sale was recorded on.
///
/// Stored on disk as a `[year, month, day]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, u32, u32)", into = "(i32, u32, u32)")]
pub struct SaleDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SaleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn today() -> Self {
        Local::now().date_naive().into()
    }
}

impl From<NaiveDate> for SaleDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl From<(i32, u32, u32)> for SaleDate {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<SaleDate> for (i32, u32, u32) {
    fn from(date: SaleDate) -> Self {
        (date.year, date.month, date.day)
    }
}

/// Renders as `year/month/day` without zero padding, e.g. `2024/1/15`.
impl fmt::Display for SaleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// A single item offered for sale.
///
/// In memory the record has named fields. On disk it keeps the positional layout
/// `[sold, id, version, [y, m, d], [price, tags, name]]`; see [`SaleRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SaleRecord", into = "SaleRecord")]
pub struct Sale {
    pub sold: bool,
    pub id: u64,
    pub schema_version: u32,
    pub date: SaleDate,
    pub price: f64,
    pub tags: Vec<String>,
    pub name: String,
}

impl Sale {
    pub fn new(id: u64, price: f64, name: String, tags: Vec<String>, date: SaleDate) -> Self {
        Self {
            sold: false,
            id,
            schema_version: SCHEMA_VERSION,
            date,
            price,
            tags,
            name,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.sold {
            "SOLD"
        } else {
            "PENDING"
        }
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }
}

/// Plain, uncolored one-line summary used by `list`.
impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | ${:.2} | {} | Tags: {} | Date: {}",
            self.id,
            self.status_label(),
            self.price,
            self.name,
            self.joined_tags(),
            self.date
        )
    }
}

/// Wire shape of a [`Sale`]: a five element array with the payload nested last.
#[derive(Serialize, Deserialize)]
struct SaleRecord(bool, u64, u32, SaleDate, (f64, Vec<String>, String));

impl From<SaleRecord> for Sale {
    fn from(SaleRecord(sold, id, schema_version, date, (price, tags, name)): SaleRecord) -> Self {
        Self {
            sold,
            id,
            schema_version,
            date,
            price,
            tags,
            name,
        }
    }
}

impl From<Sale> for SaleRecord {
    fn from(sale: Sale) -> Self {
        SaleRecord(
            sale.sold,
            sale.id,
            sale.schema_version,
            sale.date,
            (sale.price, sale.tags, sale.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Sale {
        Sale::new(
            1,
            19.99,
            "Widget".into(),
            vec!["a".into(), "b".into()],
            SaleDate::new(2024, 1, 15),
        )
    }

    #[test]
    fn serializes_as_positional_array() {
        let value = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            value,
            json!([false, 1, 1, [2024, 1, 15], [19.99, ["a", "b"], "Widget"]])
        );
    }

    #[test]
    fn deserializes_positional_array() {
        let sale: Sale =
            serde_json::from_str(r#"[true, 7, 1, [2023, 12, 3], [5.0, [], "Lamp"]]"#).unwrap();
        assert!(sale.sold);
        assert_eq!(sale.id, 7);
        assert_eq!(sale.date, SaleDate::new(2023, 12, 3));
        assert_eq!(sale.price, 5.0);
        assert!(sale.tags.is_empty());
        assert_eq!(sale.name, "Lamp");
    }

    #[test]
    fn rejects_named_object_shape() {
        let result = serde_json::from_str::<Sale>(r#"{"id": 1, "name": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_sale_is_pending_with_current_schema() {
        let sale = widget();
        assert!(!sale.sold);
        assert_eq!(sale.schema_version, SCHEMA_VERSION);
        assert_eq!(sale.status_label(), "PENDING");
    }

    #[test]
    fn date_displays_unpadded() {
        assert_eq!(SaleDate::new(2024, 1, 15).to_string(), "2024/1/15");
    }

    #[test]
    fn display_summarizes_sale() {
        assert_eq!(
            widget().to_string(),
            "ID: 1 | PENDING | $19.99 | Widget | Tags: a,b | Date: 2024/1/15"
        );
    }
}
