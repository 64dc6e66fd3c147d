//! Config command handler

use crate::args::ConfigSubcommand;
use degree_progress::config::Config;
use logger::error;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands; no subcommand shows everything
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        error!("config: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===");
    println!("# {}\n", Config::get_config_file_path().display());
    print!("{config}");
    match config.evaluation.program_choice() {
        Ok(Some(program)) => println!("\nEvaluating as: {}", program.label()),
        Ok(None) => println!("\nEvaluating as: detected from each transcript"),
        Err(e) => println!("\n⚠️  {e}"),
    }
}

fn show_key(config: &Config, key: &str) -> Result<(), String> {
    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn set_key(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    // Echo the stored form, which may be normalized (e.g. program ids)
    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    println!("✓ Set {key} = {stored}");
    Ok(())
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    let stored = config.get(key).unwrap_or_default();
    println!("✓ Reset {key} to default ({stored})");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm("Reset configuration to defaults? (y/n): ") {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes is a no
fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}
