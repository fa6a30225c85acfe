//! CSV export of monthly settlements
//!
//! One row per member per month, spreadsheet-friendly.

use serde::Serialize;
use std::io::Write;

use crate::error::{MessError, MessResult};
use crate::models::{format_meals, MonthlyRecord};
use crate::services::settle_month;

#[derive(Debug, Serialize)]
struct SettlementRow {
    month: String,
    member: String,
    meals: String,
    bazar: String,
    meal_rate: String,
    meal_cost: String,
    shared_per_head: String,
    total_cost: String,
    balance: String,
    settlement: String,
}

/// Export member settlements for the given records to CSV
pub fn export_settlements_csv<W: Write>(
    records: &[MonthlyRecord],
    writer: W,
) -> MessResult<()> {
    // Header is written explicitly so an empty export still has one.
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record([
            "Month",
            "Member",
            "Meals",
            "Bazar",
            "Meal Rate",
            "Meal Cost",
            "Shared Per Head",
            "Total Cost",
            "Balance",
            "Settlement",
        ])
        .map_err(|e| MessError::Export(e.to_string()))?;

    for record in records {
        let settlement = settle_month(record);
        for row in &settlement.members {
            csv_writer
                .serialize(SettlementRow {
                    month: settlement.month.to_string(),
                    member: row.member.name.clone(),
                    meals: format_meals(row.member.meals),
                    bazar: format!("{:.2}", row.member.bazar_cost),
                    meal_rate: format!("{:.2}", settlement.summary.meal_rate),
                    meal_cost: format!("{:.2}", row.balance.meal_cost),
                    shared_per_head: format!("{:.2}", row.balance.shared_per_head),
                    total_cost: format!("{:.2}", row.balance.total_cost),
                    balance: format!("{:.2}", row.balance.balance),
                    settlement: row.settlement.to_string(),
                })
                .map_err(|e| MessError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| MessError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, MonthKey, SharedCategory};

    #[test]
    fn test_export_settlements_csv() {
        let mut a = Member::new("Rahim, Jr.");
        a.meals = 40.0;
        a.bazar_cost = 2000.0;
        let mut b = Member::new("Karim");
        b.meals = 20.0;
        b.bazar_cost = 500.0;

        let record = MonthlyRecord::empty(MonthKey::parse("Sep-25").unwrap())
            .with_member_added(a)
            .with_member_added(b)
            .with_shared_expense(SharedCategory::Bua, 1000.0);

        let mut output = Vec::new();
        export_settlements_csv(&[record], &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Month,Member,Meals,Bazar"));
        assert!(lines[1].starts_with("Sep-25,\"Rahim, Jr.\",40,2000.00,41.67,1666.67,500.00"));
        assert!(lines[1].ends_with("-166.67,GIVEN"));
        assert!(lines[2].contains("Karim"));
    }

    #[test]
    fn test_export_empty_month_has_header_only() {
        let record = MonthlyRecord::empty(MonthKey::parse("Sep-25").unwrap());
        let mut output = Vec::new();
        export_settlements_csv(&[record], &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string.lines().count(), 1);
    }
}
