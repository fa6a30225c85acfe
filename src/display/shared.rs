//! Shared expense display formatting

use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_amount, MonthKey, SharedExpenses};

#[derive(Tabled)]
struct SharedRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the shared expenses of a month with their total and per-head split
pub fn format_shared_expenses(
    month: MonthKey,
    shared: &SharedExpenses,
    member_count: usize,
    symbol: &str,
) -> String {
    let mut rows: Vec<SharedRow> = shared
        .entries()
        .map(|(category, amount)| SharedRow {
            key: category.key().to_string(),
            label: category.label().to_string(),
            amount: format_amount(amount, symbol, 2),
        })
        .collect();

    rows.push(SharedRow {
        key: String::new(),
        label: "Total Shared Expenses".to_string(),
        amount: format_amount(shared.total(), symbol, 2),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(2..3), Alignment::right())
        .modify(Rows::last(), Alignment::right());

    let per_head = if member_count > 0 {
        format!(
            "Split equally: {} per member ({} members).",
            format_amount(shared.total() / member_count as f64, symbol, 2),
            member_count
        )
    } else {
        "No members yet; shared expenses are split once members are added.".to_string()
    };

    format!("Shared expenses for {}\n{}\n{}\n", month, table, per_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SharedCategory;

    #[test]
    fn test_format_shared_expenses() {
        let shared = SharedExpenses::default()
            .with(SharedCategory::Bua, 500.0)
            .with(SharedCategory::Wifi, 200.0);

        let output = format_shared_expenses(MonthKey::parse("Sep-25").unwrap(), &shared, 2, "৳");
        assert!(output.contains("Bua / Maid Cost"));
        assert!(output.contains("electricity"));
        assert!(output.contains("৳700.00"));
        assert!(output.contains("৳350.00 per member (2 members)"));
    }

    #[test]
    fn test_no_members() {
        let output = format_shared_expenses(
            MonthKey::parse("Sep-25").unwrap(),
            &SharedExpenses::default(),
            0,
            "৳",
        );
        assert!(output.contains("No members yet"));
        assert!(output.contains("৳0.00"));
    }
}
