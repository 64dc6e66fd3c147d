//! Command-line interface entry point for `DegreeProgress`

mod args;
mod commands;

use args::{Cli, Command, LogLevelArg};
use clap::Parser;
use degree_progress::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, warn, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Config is loaded once; --config-* flags only affect this run
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Evaluate {
            input_file,
            program,
            report,
            output,
        } => {
            commands::evaluate::run(
                &input_file,
                program.as_deref(),
                report.as_deref(),
                output.as_deref(),
                &config,
            );
        }
        Command::Classify { codes, family } => commands::classify::run(&codes, family),
        Command::Programs => commands::programs::run(),
    }
}

/// Apply level, verbosity and file sink from flags and config
fn init_logging(args: &Cli, config: &Config) {
    let (mut level, rejected) = resolve_level(args.log_level, &config.logging.level);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);
    if let Some(reason) = rejected {
        warn!("{reason} in config; falling back to warn");
    }

    if args.verbose || config.logging.verbose {
        enable_verbose();
    }

    let config_log_path = Some(&config.logging.file)
        .filter(|file| !file.is_empty())
        .map(PathBuf::from);
    if let Some(log_path) = args.log_file.clone().or(config_log_path) {
        if let Some(parent) = log_path.parent() {
            // A missing parent only matters if the open below fails too
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(&log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!(
                "✗ Failed to initialize file logging at: {}",
                log_path.display()
            );
        }
    }
}

/// --log-level wins over `logging.level`; an unparsable config value
/// falls back to warn and is handed back so it can be reported.
fn resolve_level(flag: Option<LogLevelArg>, configured: &str) -> (Level, Option<String>) {
    match flag {
        Some(arg) => (Level::from(arg), None),
        None => match configured.parse::<Level>() {
            Ok(level) => (level, None),
            Err(reason) => (Level::Warn, Some(reason)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config_level() {
        assert_eq!(resolve_level(Some(LogLevelArg::Error), "debug"), (Level::Error, None));
    }

    #[test]
    fn test_config_level_parsed_through_logger() {
        assert_eq!(resolve_level(None, "Warning"), (Level::Warn, None));
        assert_eq!(resolve_level(None, " info "), (Level::Info, None));
    }

    #[test]
    fn test_bad_config_level_is_reported() {
        let (level, rejected) = resolve_level(None, "loud");
        assert_eq!(level, Level::Warn);
        assert!(rejected.is_some_and(|reason| reason.contains("loud")));
    }
}
