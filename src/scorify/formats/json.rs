use crate::error::Result;
use crate::model::Sale;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Writes `sales` as a pretty-printed JSON array with four-space indentation.
pub fn write<W: Write>(writer: W, sales: &[Sale]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(writer, formatter);
    sales.serialize(&mut ser)?;
    ser.into_inner().flush()?;
    Ok(())
}

pub fn to_string(sales: &[Sale]) -> Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, sales)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn from_str(content: &str) -> Result<Vec<Sale>> {
    Ok(serde_json::from_str(content)?)
}
