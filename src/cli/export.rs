//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{MessError, MessResult};
use crate::export::{export_full_json, export_full_yaml, export_settlements_csv};
use crate::models::{MonthKey, MonthlyRecord};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per member)
    Csv,
    /// JSON format (records and balances)
    Json,
    /// YAML format (records and balances, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    month: MonthKey,
    output: PathBuf,
    format: ExportFormat,
    all_months: bool,
    pretty: bool,
) -> MessResult<()> {
    let records: Vec<MonthlyRecord> = if all_months {
        storage.records.get_all()?
    } else {
        vec![storage.records.get_or_create(month)?]
    };

    let file = File::create(&output).map_err(|e| {
        MessError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_settlements_csv(&records, &mut writer)?,
        ExportFormat::Json => export_full_json(&records, &mut writer, pretty)?,
        ExportFormat::Yaml => export_full_yaml(&records, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| MessError::Export(e.to_string()))?;

    let scope = if all_months {
        format!("{} month(s)", records.len())
    } else {
        month.to_string()
    };
    println!("Exported {} to: {}", scope, output.display());

    Ok(())
}
