//! Scorify Document (`.sd`): an INI-like, human readable dump.
//!
//! ```text
//! # SCORIFY DOCUMENT EXPORT
//!
//! [Sale 1]
//! status = PENDING
//! price = 19.99
//! name = Widget
//! tags = a,b
//! date = 2024/1/15
//!
//! ```

use super::plain_price;
use crate::error::Result;
use crate::model::Sale;
use std::io::Write;

const HEADER: &str = "# SCORIFY DOCUMENT EXPORT";

pub fn write<W: Write>(mut writer: W, sales: &[Sale]) -> Result<()> {
    writeln!(writer, "{}\n", HEADER)?;
    for sale in sales {
        writeln!(writer, "[Sale {}]", sale.id)?;
        writeln!(writer, "status = {}", sale.status_label())?;
        writeln!(writer, "price = {}", plain_price(sale.price))?;
        writeln!(writer, "name = {}", sale.name)?;
        writeln!(writer, "tags = {}", sale.joined_tags())?;
        writeln!(writer, "date = {}\n", sale.date)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::formats::fixtures::{render, sold_lamp, widget};
    use crate::formats::ExportFormat;

    #[test]
    fn writes_one_section_per_sale() {
        let out = render(ExportFormat::Sd, &[widget(), sold_lamp()]);
        let expected = "# SCORIFY DOCUMENT EXPORT\n\n\
                        [Sale 1]\nstatus = PENDING\nprice = 19.99\nname = Widget\ntags = a,b\ndate = 2024/1/15\n\n\
                        [Sale 2]\nstatus = SOLD\nprice = 20.0\nname = Blue Lamp\ntags = \ndate = 2024/3/2\n\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_ledger_is_header_only() {
        assert_eq!(render(ExportFormat::Sd, &[]), "# SCORIFY DOCUMENT EXPORT\n\n");
    }
}
