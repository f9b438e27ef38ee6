//! CLI argument definitions for `algaenet`

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use algae_network::config::ConfigOverrides;

/// CLI log level argument
///
/// Converts to lowercase strings for display and to `log::LevelFilter` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `out_dir`, `passes`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Build the interaction network and write it to a file.
    ///
    /// Uses the bundled findings unless `--input` points at a TOML or JSON dataset.
    Render {
        /// Dataset file (`.toml` or `.json`); defaults to the bundled findings
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file path (optional; defaults to a file in config `out_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: html, markdown (md), or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Number of times the records are traversed (overrides config)
        #[arg(long, value_name = "N")]
        passes: Option<usize>,

        /// Page title (overrides config)
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
    /// Print node and edge counts without writing anything.
    Summary {
        /// Dataset file (`.toml` or `.json`); defaults to the bundled findings
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Number of times the records are traversed (overrides config)
        #[arg(long, value_name = "N")]
        passes: Option<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "algaenet",
    about = "Microalgae / heavy-metal interaction network renderer",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Level used before the config file is read
    ///
    /// Never quieter than `warn`, so problems with the config itself show up.
    pub fn startup_level(&self) -> LevelFilter {
        if self.debug_flag {
            return LevelFilter::Debug;
        }
        self.log_level
            .map(LevelFilter::from)
            .map_or(LevelFilter::Warn, |level| level.max(LevelFilter::Warn))
    }

    /// Convert CLI flags into config overrides
    ///
    /// `--passes` and `--title` on the subcommands are folded in here so the
    /// commands only ever read the effective config.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let (passes, title) = match &self.command {
            Command::Render { passes, title, .. } => (*passes, title.clone()),
            Command::Summary { passes, .. } => (*passes, None),
            Command::Config { .. } => (None, None),
        };

        ConfigOverrides {
            level: None,
            file: None,
            verbose: None,
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            title,
            passes,
        }
    }
}
