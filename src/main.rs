use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_export_command, handle_list_command,
    handle_log_command, report_load, run_menu, AddArgs, BudgetCommands, ExportArgs,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{ExpensePaths, LoadMode, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses in expenses.csv, keeps a monthly budget in \
                  budget.txt, and reports spending against that budget. Run without \
                  a command to open the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.csv and budget.txt
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Fail on malformed rows in expenses.csv instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with default settings
    Init,

    /// Open the interactive menu
    Menu,

    /// Add an expense
    Add(AddArgs),

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export the ledger
    Export(ExportArgs),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::resolve(cli.data_dir.as_deref())?;
    let settings = Settings::load_or_create(&paths)?;
    let mode = if cli.strict {
        LoadMode::Strict
    } else {
        settings.load_mode
    };

    // Initialize storage
    let storage = Storage::with_settings(paths.clone(), &settings)?;
    let load = storage.load_all(mode)?;
    report_load(&load);

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            run_menu(&storage, &settings, &mut input, &mut output)?;
        }
        Some(Commands::Init) => {
            println!(
                "Initializing expense tracker at: {}",
                paths.base_dir().display()
            );
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Created {}", paths.settings_file().display());
            println!("Created {}", paths.expenses_file().display());
            println!("Created {}", paths.budget_file().display());
        }
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Log { count }) => handle_log_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Load mode:       {:?}", mode);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!();
            println!("Loaded {} expenses", load.expenses.loaded);
            if load.expenses.has_skipped() {
                println!("Skipped {} invalid rows", load.expenses.skipped.len());
            }
            if load.budget.recovered {
                println!("Budget file was unreadable; budget treated as not set");
            }
        }
    }

    Ok(())
}
