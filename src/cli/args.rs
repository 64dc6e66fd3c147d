//! CLI argument definitions for `DegreeProgress`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_progress::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
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

impl From<LogLevelArg> for Level {
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

/// Degree family argument for classification lookups
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FamilyArg {
    /// General science degrees
    Bsc,
    /// Computer science degrees
    Bcs,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`, `program`)
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
    /// Evaluate a transcript against a degree program.
    ///
    /// Loads a transcript CSV, prints each requirement with its status and
    /// the honours bands, and optionally writes a report.
    Evaluate {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Program id (e.g. `bsc-general`); defaults to config, then stream detection
        #[arg(short, long, value_name = "PROGRAM")]
        program: Option<String>,

        /// Write a report in the given format (markdown, md, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (optional; defaults to `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Look up the classification of one or more course codes.
    Classify {
        /// Course codes, in any spacing or case
        #[arg(value_name = "CODES", num_args = 1..)]
        codes: Vec<String>,

        /// Apply family-specific overrides
        #[arg(short, long, value_enum)]
        family: Option<FamilyArg>,
    },
    /// List the supported degree programs.
    Programs,
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeprogress",
    about = "Faculty of Science degree requirement evaluator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config default program
    #[arg(long = "config-program", value_name = "PROGRAM")]
    pub config_program: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            program: self.config_program.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_reports_dir: None,
            reports_dir: None,
            config_program: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.program.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            reports_dir: Some(PathBuf::from("/reports")),
            config_program: Some("bcs-general".to_string()),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
        assert_eq!(overrides.program, Some("bcs-general".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_reports_dir: Some(PathBuf::from("/long/out")),
            reports_dir: Some(PathBuf::from("/short/out")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/short/out".to_string())
        );

        let cli = Cli {
            config_reports_dir: Some(PathBuf::from("/long/out")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_parse_evaluate_command() {
        let cli = Cli::try_parse_from([
            "degreeprogress",
            "evaluate",
            "transcript.csv",
            "--program",
            "bcs-general",
            "--report",
            "html",
        ]);
        let Ok(cli) = cli else {
            panic!("evaluate arguments should parse");
        };
        match cli.command {
            Command::Evaluate {
                input_file,
                program,
                report,
                output,
            } => {
                assert_eq!(input_file, PathBuf::from("transcript.csv"));
                assert_eq!(program.as_deref(), Some("bcs-general"));
                assert_eq!(report.as_deref(), Some("html"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_classify_requires_codes() {
        assert!(Cli::try_parse_from(["degreeprogress", "classify"]).is_err());
        let cli = Cli::try_parse_from(["degreeprogress", "classify", "MAT313β", "-f", "bcs"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Command::Classify { family: Some(FamilyArg::Bcs), .. })
        ));
    }
}
