//! Command-line interface entry point for `GpaGuide`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_guide::config::Config;
use gpa_guide::info;
use gpa_guide::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

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

    let ok = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Calc {
            input_files, json, ..
        } => commands::calc::run(&input_files, json, &config),
        Command::Report {
            input_file,
            output,
            format,
            title,
            ..
        } => commands::report::run(
            &input_file,
            output.as_deref(),
            &format,
            title.as_deref(),
            &config,
        ),
        Command::Scale { policy } => {
            commands::scale::run(policy.map(Into::into));
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
}
