//! courseplan CLI - Command line interface for courseplan
//!
//! Browse a course catalog by term and build a plan free of schedule conflicts.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use courseplan_core::Config;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, EditArgs, ListArgs, MeetsArgs, PlanArgs};

/// courseplan: browse courses and build a conflict-free plan
#[derive(Parser, Debug)]
#[command(name = "courseplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the catalog JSON document (overrides config and env)
    #[arg(long, global = true, env = "COURSEPLAN_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List a term's courses and whether each can be selected
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Toggle courses into a plan, refusing conflicts
    Plan(PlanArgs),

    /// Check whether two courses conflict
    Check(CheckArgs),

    /// Parse meeting-time strings
    Meets(MeetsArgs),

    /// Edit a course record in the catalog
    Edit(EditArgs),

    /// Show current configuration
    Config,
}

/// Log level used when `RUST_LOG` is unset
fn default_log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::ERROR
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(default_log_level(cli.verbose).into())
                .from_env_lossy(),
        )
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.catalog.clone())?;

    if cli.verbose {
        tracing::info!(
            catalog = %config.catalog_path().display(),
            term = %config.display.default_term,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("courseplan {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::List(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Plan(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Check(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Meets(args)) => {
            args.execute()?;
        }
        Some(Commands::Edit(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("courseplan Configuration");
            println!("========================");
            println!();
            println!("Catalog Settings:");
            println!("  path: {}", config.catalog_path().display());
            println!();
            println!("Display Settings:");
            println!("  default_term: {}", config.display.default_term);
            println!("  unscheduled_label: {}", config.display.unscheduled_label);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("courseplan - Browse courses and build a conflict-free plan");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
