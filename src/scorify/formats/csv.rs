use super::plain_price;
use crate::error::Result;
use crate::model::Sale;
use std::io::Write;

const HEADER: [&str; 7] = ["Sold", "ID", "Version", "Date", "Price", "Tags", "Name"];

pub fn write<W: Write>(writer: W, sales: &[Sale]) -> Result<()> {
    let mut out = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(writer);
    out.write_record(HEADER)?;
    for sale in sales {
        out.write_record([
            sold_label(sale.sold).to_string(),
            sale.id.to_string(),
            sale.schema_version.to_string(),
            sale.date.to_string(),
            plain_price(sale.price),
            sale.joined_tags(),
            sale.name.clone(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

fn sold_label(sold: bool) -> &'static str {
    if sold {
        "True"
    } else {
        "False"
    }
}
