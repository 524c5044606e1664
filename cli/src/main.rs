mod config;
mod menu;
mod render;

use std::io;

use anyhow::Result;
use clap::Parser;
use smarttask_core::{MemoryTaskRepository, TaskService};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "smarttask")]
#[command(about = "An in-memory console task tracker", long_about = None)]
struct Cli {
    /// Show task listings as a table
    #[arg(long)]
    table: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(level: Level) {
    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.table, cli.verbose);
    init_tracing(config.log_level);

    let service = TaskService::new(MemoryTaskRepository::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(service, stdin.lock(), stdout.lock(), config);
    menu.run()
}
