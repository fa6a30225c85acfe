//! Month list formatting

use crate::models::{format_amount, format_meals, MonthKey};
use crate::services::MonthlySettlement;

/// Format the stored months with their headline figures
pub fn format_month_list(
    settlements: &[MonthlySettlement],
    selected: MonthKey,
    symbol: &str,
) -> String {
    if settlements.is_empty() {
        return "No months recorded yet.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<8}  {:>7}  {:>8}  {:>10}  {:>14}\n",
        "Month", "Members", "Meals", "Meal Rate", "Total Expense"
    ));
    output.push_str(&format!(
        "  {:-<8}  {:->7}  {:->8}  {:->10}  {:->14}\n",
        "", "", "", "", ""
    ));

    for settlement in settlements {
        let marker = if settlement.month == selected { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<8}  {:>7}  {:>8}  {:>10}  {:>14}\n",
            marker,
            settlement.month.to_string(),
            settlement.members.len(),
            format_meals(settlement.summary.total_meals),
            format_amount(settlement.summary.meal_rate, "", 2),
            format_amount(settlement.summary.total_expense, symbol, 2),
        ));
    }

    output
}

/// Format the selected month with its neighbours
pub fn format_month_navigation(selected: MonthKey) -> String {
    format!(
        "Selected: {}   (previous: --month {}, next: --month {})\n",
        selected,
        selected.prev(),
        selected.next()
    )
}

/// Format the navigable month range, marking months that already have data
pub fn format_selectable_months(
    range: &[MonthKey],
    stored: &[MonthKey],
    selected: MonthKey,
) -> String {
    let mut output = String::new();
    let mut current_year = None;

    for month in range {
        if current_year != Some(month.year()) {
            if current_year.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("{}:", month.year()));
            current_year = Some(month.year());
        }

        let tag = if *month == selected {
            "*"
        } else if stored.contains(month) {
            "+"
        } else {
            " "
        };
        output.push_str(&format!(" {}{}", month, tag));
    }

    output.push_str("\n\n* selected   + has data\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, MonthlyRecord};
    use crate::services::settle_month;
    use chrono::NaiveDate;

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_month_list() {
        let mut member = Member::new("A");
        member.meals = 10.0;
        member.bazar_cost = 500.0;
        let sep = MonthlyRecord::empty(month("Sep-25")).with_member_added(member);
        let oct = MonthlyRecord::empty(month("Oct-25"));

        let output = format_month_list(
            &[settle_month(&sep), settle_month(&oct)],
            month("Oct-25"),
            "৳",
        );
        assert!(output.contains("Sep-25"));
        assert!(output.contains("50.00"));
        assert!(output.contains("৳500.00"));
        assert!(output.contains("* Oct-25"));
    }

    #[test]
    fn test_empty_month_list() {
        assert_eq!(
            format_month_list(&[], month("Oct-25"), "৳"),
            "No months recorded yet."
        );
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(
            format_month_navigation(month("Jan-26")),
            "Selected: Jan-26   (previous: --month Dec-25, next: --month Feb-26)\n"
        );
    }

    #[test]
    fn test_selectable_months() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let range = MonthKey::selectable_range(today);
        let output = format_selectable_months(&range, &[month("Aug-25")], month("Sep-25"));

        assert!(output.starts_with("2024:"));
        assert!(output.contains("Aug-25+"));
        assert!(output.contains("Sep-25*"));
        assert!(output.contains("2026:"));
    }
}
