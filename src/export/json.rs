//! JSON Export functionality
//!
//! Exports monthly records together with their computed settlements.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{MessError, MessResult};
use crate::models::{MemberId, MonthlyRecord};
use crate::services::{settle_month, MemberBalance, Settlement, SummaryStats};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported months, oldest first
    pub months: Vec<MonthExport>,
}

/// One month: the stored record and what it settles to
#[derive(Debug, Clone, Serialize)]
pub struct MonthExport {
    pub record: MonthlyRecord,
    pub summary: SummaryStats,
    pub balances: Vec<BalanceExport>,
}

/// A member's computed balance, keyed by member
#[derive(Debug, Clone, Serialize)]
pub struct BalanceExport {
    pub member_id: MemberId,
    pub name: String,
    #[serde(flatten)]
    pub balance: MemberBalance,
    pub settlement: Settlement,
}

impl MonthExport {
    pub fn from_record(record: &MonthlyRecord) -> Self {
        let settlement = settle_month(record);
        let balances = settlement
            .members
            .into_iter()
            .map(|row| BalanceExport {
                member_id: row.member.id,
                name: row.member.name,
                balance: row.balance,
                settlement: row.settlement,
            })
            .collect();

        Self {
            record: record.clone(),
            summary: settlement.summary,
            balances,
        }
    }
}

impl FullExport {
    /// Build an export from the given records
    pub fn from_records(records: &[MonthlyRecord]) -> Self {
        let mut records: Vec<&MonthlyRecord> = records.iter().collect();
        records.sort_by_key(|r| r.month);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            months: records.into_iter().map(MonthExport::from_record).collect(),
        }
    }
}

/// Export records and settlements to JSON
pub fn export_full_json<W: Write>(
    records: &[MonthlyRecord],
    writer: &mut W,
    pretty: bool,
) -> MessResult<()> {
    let export = FullExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| MessError::Export(e.to_string()))?;

    Ok(())
}
