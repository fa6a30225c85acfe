//! Member display formatting
//!
//! Renders each member's meals, costs and settlement as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_amount, format_meals};
use crate::services::{MemberSettlement, MonthlySettlement, Settlement};

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Meals")]
    meals: String,
    #[tabled(rename = "Bazar")]
    bazar: String,
    #[tabled(rename = "Meal Cost")]
    meal_cost: String,
    #[tabled(rename = "Shared")]
    shared: String,
    #[tabled(rename = "Total Cost")]
    total_cost: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a balance as `TAKE: ৳x` or `GIVEN: ৳x` (absolute value)
pub fn format_settlement(balance: f64, symbol: &str) -> String {
    format!(
        "{}: {}",
        Settlement::from_balance(balance),
        format_amount(balance.abs(), symbol, 1)
    )
}

/// Format the member table for a month
pub fn format_member_table(settlement: &MonthlySettlement, symbol: &str) -> String {
    if settlement.members.is_empty() {
        return format!("No members added for {}.\n", settlement.month);
    }

    let rows: Vec<MemberRow> = settlement
        .members
        .iter()
        .map(|row| MemberRow {
            name: row.member.name.clone(),
            meals: format_meals(row.member.meals),
            bazar: format_amount(row.member.bazar_cost, symbol, 1),
            meal_cost: format_amount(row.balance.meal_cost, symbol, 1),
            shared: format_amount(row.balance.shared_per_head, symbol, 1),
            total_cost: format_amount(row.balance.total_cost, symbol, 1),
            balance: format_settlement(row.balance.balance, symbol),
            id: row.member.id.short(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..6), Alignment::right());

    format!(
        "Members for {} (meal rate {})\n{}\n\n\
         GIVEN: paid less than their share, owes the mess fund.\n\
         TAKE:  paid more than their share, gets money back from the fund.\n",
        settlement.month,
        format_amount(settlement.summary.meal_rate, "", 2),
        table
    )
}

/// Format a single member's details
pub fn format_member_details(row: &MemberSettlement, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Member: {}\n", row.member.name));
    output.push_str(&format!("  ID:          {}\n", row.member.id));
    output.push_str(&format!("  Meals:       {}\n", format_meals(row.member.meals)));
    output.push_str(&format!(
        "  Bazar:       {}\n",
        format_amount(row.member.bazar_cost, symbol, 2)
    ));
    output.push_str(&format!(
        "  Meal Cost:   {}\n",
        format_amount(row.balance.meal_cost, symbol, 2)
    ));
    output.push_str(&format!(
        "  Shared:      {}\n",
        format_amount(row.balance.shared_per_head, symbol, 2)
    ));
    output.push_str(&format!(
        "  Total Cost:  {}\n",
        format_amount(row.balance.total_cost, symbol, 2)
    ));
    output.push_str(&format!(
        "  Balance:     {}\n",
        format_settlement(row.balance.balance, symbol)
    ));

    output
}
