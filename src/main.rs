use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use fairsplit::cli::{
    handle_audit_command, handle_household_command, handle_plan_command, handle_summary_command,
    HouseholdCommands, PlanCommands, SummaryArgs,
};
use fairsplit::config::{paths::FairsplitPaths, settings::Settings};
use fairsplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fairsplit",
    author = "Kaylee Beyene",
    version,
    about = "Split a household's monthly budget fairly between its members",
    long_about = "fairsplit keeps a monthly budget per household and works out exactly \
                  how much each member pays, per category and in total, under an \
                  income-proportional, equal, or top-earner-pays-more split."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Household and member management commands
    #[command(subcommand, alias = "hh")]
    Household(HouseholdCommands),

    /// Monthly budget plan commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Show who pays what for a month
    Summary(SummaryArgs),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

/// Install the stderr diagnostic logger
///
/// `FAIRSPLIT_LOG` takes precedence over the `log_level` setting.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env("FAIRSPLIT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FairsplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fairsplit at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  fairsplit household create \"The Flat\"");
            println!("  fairsplit household add-member \"The Flat\" Alex --income 2500");
        }
        Some(Commands::Config) => {
            println!("fairsplit Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", if paths.is_initialized() { "Yes" } else { "No" });
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default split:   {}", settings.default_split);
            println!("  Log level:       {}", settings.log_level);
        }
        Some(Commands::Household(cmd)) => {
            handle_household_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Plan(cmd)) => {
            handle_plan_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&storage, &settings, args)?;
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&storage, count)?;
        }
        None => {
            println!("fairsplit - fair budget splitting for shared households");
            println!();
            println!("Run 'fairsplit --help' for usage information.");
        }
    }

    Ok(())
}
