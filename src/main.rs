use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mess_ledger::cli::{
    handle_export_command, handle_member_command, handle_months_command, handle_shared_command,
    ExportFormat, MemberCommands, SharedCommands,
};
use mess_ledger::config::{MessPaths, Settings};
use mess_ledger::display::format_summary;
use mess_ledger::logging;
use mess_ledger::models::MonthKey;
use mess_ledger::services::MessService;
use mess_ledger::storage::{json_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "mess",
    version,
    about = "Monthly meal and expense ledger for a shared mess",
    long_about = "Tracks each member's meals and bazar spending along with the \
                  mess's shared bills, and works out who owes the fund and who \
                  gets money back at the end of the month."
)]
struct Cli {
    /// Month to work on, e.g. "Sep-25" (default: current month)
    #[arg(long, global = true)]
    month: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month dashboard
    Summary,

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Shared expense commands
    #[command(subcommand)]
    Shared(SharedCommands),

    /// List stored months
    Months {
        /// Show the full selectable range instead
        #[arg(short, long)]
        all: bool,
    },

    /// Export settlements to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Export every stored month instead of the selected one
        #[arg(long)]
        all_months: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MessPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_filter);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.bootstrap(MonthKey::current())?;

    let month = match cli.month.as_deref() {
        Some(s) => MonthKey::parse(s).with_context(|| format!("invalid --month '{}'", s))?,
        None => MonthKey::current(),
    };
    let symbol = settings.currency_symbol.as_str();

    match cli.command {
        Some(Commands::Summary) | None => {
            let service = MessService::open(&storage, month, settings.negative_amounts)?;
            let record = service.record()?;
            let stats = service.summary()?;
            print!(
                "{}",
                format_summary(month, &stats, record.member_count(), symbol)
            );
        }
        Some(Commands::Member(cmd)) => {
            let service = MessService::open(&storage, month, settings.negative_amounts)?;
            handle_member_command(&service, symbol, cmd)?;
        }
        Some(Commands::Shared(cmd)) => {
            let service = MessService::open(&storage, month, settings.negative_amounts)?;
            handle_shared_command(&service, symbol, cmd)?;
        }
        Some(Commands::Months { all }) => {
            handle_months_command(&storage, month, all, symbol)?;
        }
        Some(Commands::Export {
            output,
            format,
            all_months,
            pretty,
        }) => {
            handle_export_command(&storage, month, output, format, all_months, pretty)?;
        }
        Some(Commands::Init) => {
            println!("Initializing mess-ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'mess member add <name>' to add the first member.");
        }
        Some(Commands::Config) => {
            println!("mess-ledger Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Records file:     {}", paths.records_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (run 'mess init')" }
            );
            if !json_file_valid(paths.records_file()) {
                println!("Records file is missing or unreadable.");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Negative amounts: {:?}", settings.negative_amounts);
            println!("  Log filter:       {}", settings.log_filter);
        }
    }

    Ok(())
}
