//! Command-line interface entry point for `algaenet`

mod args;
mod commands;

use algae_network::config::Config;
use algae_network::logger::{self, init_file_logging, parse_level};
use args::{Cli, Command};
use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Logger first so config load problems are reported
    logger::init(args.startup_level());

    // The stored config is what `config` edits; CLI overrides only reach the effective copy
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(LevelFilter::from)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(LevelFilter::Warn);
    if args.debug_flag {
        level = LevelFilter::Debug;
    }
    logger::set_level(level);

    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
        Command::Render {
            input,
            output,
            format,
            ..
        } => commands::render::run(input.as_deref(), output.as_deref(), &format, &config)
            .map(|_| ()),
        Command::Summary { input, .. } => {
            commands::summary::run(input.as_deref(), &config, verbose)
        }
    };

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
