//! Shared expense CLI commands

use clap::Subcommand;

use super::coerce_input;
use crate::display::format_shared_expenses;
use crate::error::{MessError, MessResult};
use crate::models::{format_amount, SharedCategory};
use crate::services::MessService;

/// Shared expense subcommands
#[derive(Subcommand)]
pub enum SharedCommands {
    /// Show the month's shared expenses
    List,
    /// Set the amount of a shared expense
    Set {
        /// Category (bua, wifi, electricity, gas, other)
        category: String,
        /// Amount for the whole month
        amount: String,
    },
}

/// Handle a shared expense command
pub fn handle_shared_command(
    service: &MessService,
    symbol: &str,
    cmd: SharedCommands,
) -> MessResult<()> {
    match cmd {
        SharedCommands::List => {
            let record = service.record()?;
            print!(
                "{}",
                format_shared_expenses(
                    record.month,
                    &record.shared_expenses,
                    record.member_count(),
                    symbol
                )
            );
        }

        SharedCommands::Set { category, amount } => {
            let category = category
                .parse::<SharedCategory>()
                .map_err(|e| MessError::Validation(e.to_string()))?;

            let amount = coerce_input(category.key(), &amount);
            let stored = service.set_shared_expense(category, amount)?;
            println!(
                "Set {} for {}: {}",
                category.label(),
                service.month(),
                format_amount(stored, symbol, 2)
            );
        }
    }

    Ok(())
}
