//! # Output Formats
//!
//! Serializers for the ledger. [`json`] is both the durable storage format and an export
//! format. [`csv`], [`txt`] and [`sd`] are export-only projections and never read back.
//!
//! Every writer is generic over [`std::io::Write`] so callers decide where bytes go: the
//! export command hands in a file, tests hand in a `Vec<u8>`.

use crate::error::{Result, ScorifyError};
use crate::model::Sale;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub mod csv;
pub mod json;
pub mod sd;
pub mod txt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Txt,
    Json,
    Sd,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Txt,
        ExportFormat::Json,
        ExportFormat::Sd,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Sd => "sd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Txt => "TXT",
            ExportFormat::Json => "JSON",
            ExportFormat::Sd => "SD",
        }
    }

    pub fn write<W: Write>(&self, writer: W, sales: &[Sale]) -> Result<()> {
        match self {
            ExportFormat::Csv => self::csv::write(writer, sales),
            ExportFormat::Txt => self::txt::write(writer, sales),
            ExportFormat::Json => self::json::write(writer, sales),
            ExportFormat::Sd => self::sd::write(writer, sales),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ScorifyError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.extension() == lowered)
            .ok_or_else(|| ScorifyError::input(format!("Unknown export format '{}'", lowered)))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Price as the export documents show it: shortest round-trip digits, always with a
/// fractional part (`19.99`, `20.0`). Magnitudes below `1e-4` or from `1e16` up switch to
/// scientific form with a signed, two digit exponent (`1e+16`, `2.5e-05`).
pub(crate) fn plain_price(price: f64) -> String {
    if price.is_nan() {
        return "nan".into();
    }
    if price.is_infinite() {
        return if price > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let sci = format!("{:e}", price);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if price != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let fixed = price.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        format!("{}.0", fixed)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Sale, SaleDate};

    pub fn widget() -> Sale {
        Sale::new(
            1,
            19.99,
            "Widget".into(),
            vec!["a".into(), "b".into()],
            SaleDate::new(2024, 1, 15),
        )
    }

    pub fn sold_lamp() -> Sale {
        let mut sale = Sale::new(2, 20.0, "Blue Lamp".into(), vec![], SaleDate::new(2024, 3, 2));
        sale.sold = true;
        sale
    }

    pub fn render(format: super::ExportFormat, sales: &[Sale]) -> String {
        let mut buf = Vec::new();
        format.write(&mut buf, sales).unwrap();
        String::from_utf8(buf).unwrap()
    }
}
