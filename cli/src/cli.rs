// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use shiftcal_core::{APP_NAME, CalendarManagement};
use tokio::{fs, io::BufReader};

use crate::config::parse_config;
use crate::runner::Session;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Whether to log debug diagnostics
    pub verbose: bool,

    /// How commands are read
    pub mode: Mode,

    /// Script to run in headless mode
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Timezone-aware personal calendars with recurring events.")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $SHIFTCAL_CONFIG, then \
$XDG_CONFIG_HOME/shiftcal/config.toml on Linux and MacOS, \
%APPDATA%/shiftcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(-v --verbose "Log debug diagnostics to stderr"))
            .arg(
                arg!(-m --mode <MODE> "How commands are read")
                    .value_parser(value_parser!(Mode)),
            )
            .arg(
                arg!([FILE] "Command script, required in headless mode")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .required_if_eq("mode", "headless"),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let mode = matches
            .get_one::<Mode>("mode")
            .copied()
            .ok_or("--mode is required")?;

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            verbose: matches.get_flag("verbose"),
            mode,
            file: matches.get_one("FILE").cloned(),
        })
    }

    /// Run the command loop
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(self.config).await?;
        let mut session = Session::new(CalendarManagement::from_config(&config)?);

        let mut stdout = io::stdout();
        match self.mode {
            Mode::Interactive => {
                let stdin = BufReader::new(tokio::io::stdin());
                session.run_interactive(stdin, &mut stdout).await
            }
            Mode::Headless => {
                let file = self.file.ok_or("Headless mode requires a script file")?;
                let script = fs::read_to_string(&file)
                    .await
                    .map_err(|e| format!("Failed to read script at {}: {}", file.display(), e))?;
                session.run_script(&script, &mut stdout)
            }
        }
    }
}

/// How commands are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Prompt for commands on standard input
    Interactive,

    /// Run the commands of a script file
    Headless,
}
