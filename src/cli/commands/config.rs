//! Config command handler

use crate::args::ConfigSubcommand;
use gpa_guide::config::Config;
use gpa_guide::error;
use std::io::{self, Write};

/// Dispatch config subcommands. Returns false if the command failed.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) -> bool {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return true;
    };
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("Unknown config key: '{key}'");
            false
        }
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> bool {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        return false;
    }
    if !persist(config) {
        return false;
    }
    let shown = config.get(key).unwrap_or_else(|| value.to_string());
    println!("✓ Set {key} = {shown}");
    true
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> bool {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        return false;
    }
    if !persist(config) {
        return false;
    }
    println!("✓ Reset {key} to default");
    true
}

fn persist(config: &Config) -> bool {
    match config.save() {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save config: {e}");
            eprintln!("✗ Failed to save config: {e}");
            false
        }
    }
}

fn reset() -> bool {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
        println!("✗ Reset cancelled");
        return true;
    }

    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            eprintln!("✗ Failed to remove config file: {e}");
            false
        }
    }
}
