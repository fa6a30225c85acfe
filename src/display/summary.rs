//! Month dashboard formatting

use crate::models::{format_amount, format_meals, MonthKey};
use crate::services::SummaryStats;

use super::report::{double_separator, format_bar, format_percentage, separator};

const WIDTH: usize = 44;
const BAR_WIDTH: usize = 16;

/// Format the month dashboard: meal rate, totals and expense breakdown
pub fn format_summary(
    month: MonthKey,
    stats: &SummaryStats,
    member_count: usize,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Mess Summary: {}\n", month));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("  Meal Rate:      {}\n", format_amount(stats.meal_rate, "", 2)));
    output.push_str(&format!("  Total Meals:    {}\n", format_meals(stats.total_meals)));
    output.push_str(&format!(
        "  Total Expense:  {}\n",
        format_amount(stats.total_expense, symbol, 2)
    ));
    output.push_str(&format!("  Members:        {}\n", member_count));
    output.push('\n');

    output.push_str("Expense Breakdown\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&breakdown_line(
        "Bazar Cost",
        stats.total_bazar,
        stats.bazar_share_pct(),
        symbol,
    ));
    output.push_str(&breakdown_line(
        "Shared",
        stats.total_shared,
        stats.shared_share_pct(),
        symbol,
    ));
    output.push('\n');

    output.push_str(
        "Meal rate = total bazar / total meals. Shared expenses are split\n\
         equally among all members regardless of meal count.\n",
    );

    output
}

fn breakdown_line(label: &str, amount: f64, pct: f64, symbol: &str) -> String {
    format!(
        "  {:<11} {:>12}  {}  {}\n",
        label,
        format_amount(amount, symbol, 2),
        format_bar(pct, 100.0, BAR_WIDTH),
        format_percentage(pct)
    )
}
