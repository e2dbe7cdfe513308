//! jobstat CLI - vacancy counts and average salaries per programming language.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, warn};
use std::path::PathBuf;

mod commands;
mod display;

use commands::report::ReportArgs;

#[derive(Parser)]
#[command(name = "jobstat")]
#[command(about = "Vacancy and salary statistics per programming language", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect statistics from the job boards and print a report per board
    Report(ReportArgs),

    /// List the default languages and their search aliases
    Languages {
        /// Alias table to use instead of the built-in one (JSON)
        #[arg(long)]
        aliases: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded before parsing so the env fallbacks of the arguments see it
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    pretty_env_logger::formatted_timed_builder()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Ignoring .env file: {e}"),
    }

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Report(args) => commands::report::report(args, !cli.verbose.is_silent()).await,
        Commands::Languages { aliases } => commands::languages::list_languages(aliases.as_deref()),
    }
}
