//! Month listing command

use chrono::Local;

use crate::display::{format_month_list, format_month_navigation, format_selectable_months};
use crate::error::MessResult;
use crate::models::MonthKey;
use crate::services::{settle_month, MonthlySettlement};
use crate::storage::Storage;

/// Handle the months command
pub fn handle_months_command(
    storage: &Storage,
    selected: MonthKey,
    all: bool,
    symbol: &str,
) -> MessResult<()> {
    let records = storage.records.get_all()?;

    if all {
        let range = MonthKey::selectable_range(Local::now().date_naive());
        // Months that were only opened, never edited, don't count as having data.
        let with_data: Vec<MonthKey> = records
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.month)
            .collect();
        print!("{}", format_selectable_months(&range, &with_data, selected));
    } else {
        let settlements: Vec<MonthlySettlement> = records.iter().map(settle_month).collect();
        println!("{}", format_month_list(&settlements, selected, symbol).trim_end());
    }

    println!();
    print!("{}", format_month_navigation(selected));
    Ok(())
}
