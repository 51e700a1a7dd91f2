use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::formats::ExportFormat;
use crate::ledger::Ledger;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Writes the whole ledger to `path` in `format`, replacing any previous export.
pub fn run(ledger: &Ledger, format: ExportFormat, path: &Path) -> Result<CmdResult> {
    let file = File::create(path)?;
    format.write(BufWriter::new(file), ledger.sales())?;
    info!(format = %format, path = %path.display(), count = ledger.len(), "exported");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Exported {} → {}",
            format.label(),
            path.display()
        )))
        .with_written_path(path.to_path_buf()))
}
