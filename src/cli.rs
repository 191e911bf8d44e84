// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "clients-panel - Inspect and clean up connected clients",
    long_about = "clients-panel lists the client entries recorded in a local SQLite database, opens their log folders, and removes entries together with their logs."
)]
pub struct Cli {
    /// Path to the clients database. Defaults to ~/.config/clients-panel/panel.db
    #[arg(long, global = true, env = "CLIENTS_PANEL_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging (RUST_LOG takes precedence)")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists connected clients, identical rows shown once.
    List {
        #[arg(short, long, help = "Only show entries containing this text (case-insensitive)")]
        search: Option<String>,
    },

    /// Prints the log folder of a client.
    Path {
        #[arg(help = "HWID of the client")]
        hwid: String,

        #[arg(long, help = "Pick the entry with this ID when a HWID has several")]
        id: Option<i64>,
    },

    /// Opens the log folder of a client in the system file browser.
    Open {
        #[arg(help = "HWID of the client")]
        hwid: String,

        #[arg(long, help = "Pick the entry with this ID when a HWID has several")]
        id: Option<i64>,
    },

    /// Removes a client entry and deletes its log folder.
    Remove {
        #[arg(help = "HWID of the client to remove")]
        hwid: String,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
