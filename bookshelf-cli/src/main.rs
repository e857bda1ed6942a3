//! Bookshelf - an in-memory catalog with an interactive shell
//!
//! Main entry point: parses flags, installs the tracing subscriber, composes
//! the manager → decorator → catalog stack, and runs the selected command.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookshelf_core::{CatalogManager, InMemoryCatalog, LoggingCatalog, VehicleFactory};

mod shell;

use shell::Shell;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bookshelf",
    about = "In-memory book catalog with an interactive shell",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the interactive catalog shell (the default)
    Shell {
        /// Print `show` and `find_author` results as JSON arrays
        #[clap(long)]
        json: bool,
    },

    /// Run the vehicle factory demo
    Vehicles,
}

/// Install the tracing subscriber.
///
/// Events go to stderr so the shell's stdout stays clean for prompts and
/// results.
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_writer(io::stderr)
        .init();
}

fn run_shell(json: bool) -> Result<()> {
    let catalog = LoggingCatalog::new(InMemoryCatalog::new());
    let mut manager = CatalogManager::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), json).run(&mut manager)
}

fn run_vehicles() -> Result<()> {
    let car = VehicleFactory::US.create_car("Ford", "Mustang");
    info!("{}", car.start_engine());

    let motorcycle = VehicleFactory::EU.create_motorcycle("Harley-Davidson", "Sportster");
    info!("{}", motorcycle.start_engine());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    match cli.command.unwrap_or(Command::Shell { json: false }) {
        Command::Shell { json } => run_shell(json),
        Command::Vehicles => run_vehicles(),
    }
}
