// src/main.rs

mod actions;
mod cli;
mod commands;
mod db;
mod error;
mod models;
mod opener;
mod paths;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let db_path = match cli.db {
        Some(path) => path,
        None => db::default_db_path()?,
    };

    match cli.command {
        Commands::List { search } => commands::handle_list(&db_path, search),
        Commands::Path { hwid, id } => commands::handle_path(&db_path, &hwid, id),
        Commands::Open { hwid, id } => commands::handle_open(&db_path, &hwid, id),
        Commands::Remove { hwid, yes } => commands::handle_remove(&db_path, &hwid, yes),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
