use crate::error::Result;
use crate::model::Sale;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, sales: &[Sale]) -> Result<()> {
    for sale in sales {
        writeln!(
            writer,
            "ID: {} | Status: {} | Price: ${:.2} | Name: {} | Tags: {} | Date: {}",
            sale.id,
            sale.status_label(),
            sale.price,
            sale.name,
            sale.joined_tags(),
            sale.date
        )?;
    }
    writer.flush()?;
    Ok(())
}
