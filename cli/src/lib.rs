// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Command layer of Shiftcal: the text command language, interactive and
//! headless loops, and table output.

mod cli;
mod command;
mod config;
mod event_formatter;
mod parser;
mod runner;
mod table;

use std::error::Error;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::cli::{Cli, Mode};
pub use crate::command::{Command, EventProperty, EventTime, Repeat};
pub use crate::config::parse_config;
pub use crate::runner::{Flow, Session};

/// Run the Shiftcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            init_tracing(cli.verbose);
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
