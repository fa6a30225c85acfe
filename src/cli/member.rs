//! Member CLI commands
//!
//! Implements CLI commands for managing the members of a month.

use clap::Subcommand;

use super::coerce_input;
use crate::display::{format_member_details, format_member_table, format_settlement};
use crate::error::{MessError, MessResult};
use crate::models::MemberUpdate;
use crate::services::MessService;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to the month
    Add {
        /// Member name
        name: String,
        /// Meals eaten so far (e.g., "12" or "12.5")
        #[arg(long)]
        meals: Option<String>,
        /// Amount spent on bazar so far
        #[arg(long)]
        bazar: Option<String>,
    },
    /// List members with their costs and balances
    List,
    /// Show member details
    Show {
        /// Member name or ID
        member: String,
    },
    /// Edit a member's name, meals or bazar spend
    Edit {
        /// Member name or ID
        member: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New meal count
        #[arg(short, long)]
        meals: Option<String>,
        /// New bazar total
        #[arg(short, long)]
        bazar: Option<String>,
    },
    /// Remove a member from the month
    Delete {
        /// Member name or ID
        member: String,
    },
}

/// Handle a member command
pub fn handle_member_command(
    service: &MessService,
    symbol: &str,
    cmd: MemberCommands,
) -> MessResult<()> {
    match cmd {
        MemberCommands::Add { name, meals, bazar } => {
            let mut member = service.add_member(&name)?;

            let update = MemberUpdate {
                name: None,
                meals: meals.as_deref().map(|s| coerce_input("meals", s)),
                bazar_cost: bazar.as_deref().map(|s| coerce_input("bazar", s)),
            };
            if !update.is_empty() {
                member = service.update_member(&member.id, update)?;
            }

            println!("Added member: {} ({})", member.name, service.month());
            println!("  ID: {}", member.id);
        }

        MemberCommands::List => {
            let settlement = service.settlement()?;
            print!("{}", format_member_table(&settlement, symbol));
        }

        MemberCommands::Show { member } => {
            let found = service.require_member(&member)?;
            let settlement = service.settlement()?;
            let row = settlement
                .members
                .iter()
                .find(|row| row.member.id == found.id)
                .ok_or_else(|| MessError::member_not_found(&member))?;

            print!("{}", format_member_details(row, symbol));
        }

        MemberCommands::Edit {
            member,
            name,
            meals,
            bazar,
        } => {
            let found = service.require_member(&member)?;

            let update = MemberUpdate {
                name,
                meals: meals.as_deref().map(|s| coerce_input("meals", s)),
                bazar_cost: bazar.as_deref().map(|s| coerce_input("bazar", s)),
            };

            if update.is_empty() {
                println!("No changes specified. Use --name, --meals or --bazar.");
                return Ok(());
            }

            let updated = service.update_member(&found.id, update)?;
            let balance = service.member_balance(&updated.id)?;
            println!("Updated member: {}", updated.name);
            println!("  Balance: {}", format_settlement(balance.balance, symbol));
        }

        MemberCommands::Delete { member } => {
            let found = service.require_member(&member)?;
            let deleted = service.delete_member(&found.id)?;
            println!("Deleted member: {} ({})", deleted.name, service.month());
        }
    }

    Ok(())
}
