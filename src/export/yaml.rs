//! YAML Export functionality
//!
//! Same structure as the JSON export, for human reading.

use std::io::Write;

use crate::error::{MessError, MessResult};
use crate::export::json::FullExport;
use crate::models::MonthlyRecord;

fn export_err(e: impl std::fmt::Display) -> MessError {
    MessError::Export(e.to_string())
}

/// Export records and settlements to YAML
pub fn export_full_yaml<W: Write>(records: &[MonthlyRecord], writer: &mut W) -> MessResult<()> {
    let export = FullExport::from_records(records);

    writeln!(writer, "# mess-ledger export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}
