//! Configuration module for `DegreeProgress`

use crate::core::models::DegreeProgram;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Value of `evaluation.program` that selects the program from stream detection
pub const AUTO_PROGRAM: &str = "auto";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Evaluation defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Program id (e.g., "bcs-general") or `auto`
    #[serde(default)]
    pub program: String,
}

impl EvaluationConfig {
    /// The configured program, or `None` for automatic selection
    ///
    /// # Errors
    /// Returns an error if the value is neither `auto` nor a known program id
    pub fn program_choice(&self) -> Result<Option<DegreeProgram>, String> {
        let value = self.program.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(AUTO_PROGRAM) {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Evaluation settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override default program
    pub program: Option<String>,
}

/// Keys accepted by `config get|set|unset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `logging.level`
    Level,
    /// `logging.file`
    File,
    /// `logging.verbose`
    Verbose,
    /// `paths.reports_dir`
    ReportsDir,
    /// `evaluation.program`
    Program,
}

impl ConfigKey {
    /// Every key, in display order
    pub const ALL: [Self; 5] = [
        Self::Level,
        Self::File,
        Self::Verbose,
        Self::ReportsDir,
        Self::Program,
    ];

    /// Canonical key name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::File => "file",
            Self::Verbose => "verbose",
            Self::ReportsDir => "reports_dir",
            Self::Program => "program",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| format!("Unknown config key: '{s}'"))
    }
}

/// Copy `default` into `slot` when `slot` is empty; reports whether it did
fn fill_if_empty(slot: &mut String, default: &str) -> bool {
    if slot.is_empty() && !default.is_empty() {
        default.clone_into(slot);
        true
    } else {
        false
    }
}

impl Config {
    /// Directory that `$DEGREE_PROGRESS` expands to
    ///
    /// `dirs::config_dir()/degreeprogress`, e.g. `~/.config/degreeprogress` on
    /// Linux; the working directory when no config directory is known.
    #[must_use]
    pub fn get_degreeprogress_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeprogress")
    }

    /// Location of the user config file (`dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degreeprogress_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty string settings from `defaults`.
    ///
    /// Returns `true` when anything was filled in, so callers know to save.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let filled = [
            fill_if_empty(&mut self.logging.level, &defaults.logging.level),
            fill_if_empty(&mut self.logging.file, &defaults.logging.file),
            fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            fill_if_empty(&mut self.evaluation.program, &defaults.evaluation.program),
        ];
        filled.contains(&true)
    }

    /// Apply one-run overrides from the command line; the file is untouched
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(program) = &overrides.program {
            self.evaluation.program.clone_from(program);
        }
    }

    /// Replace `$DEGREE_PROGRESS` with the config directory
    fn expand_variables(value: &str) -> String {
        if !value.contains("$DEGREE_PROGRESS") {
            return value.to_string();
        }
        let dir = Self::get_degreeprogress_dir();
        value.replace("$DEGREE_PROGRESS", &dir.to_string_lossy())
    }

    /// Parse a config document, expanding `$DEGREE_PROGRESS` in path values.
    ///
    /// Missing sections and fields take their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or does not fit the schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_else(|e| {
            logger::warn!("Compiled-in default configuration is invalid: {e}");
            Self::default()
        })
    }

    /// Load the user config, creating it from defaults on first run.
    ///
    /// Missing fields are merged from defaults and written back. An unreadable
    /// or malformed file is reported and the defaults are used for this run.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Err(e) = defaults.save() {
                logger::warn!("Could not create {}: {e}", config_file.display());
            }
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save() {
                        logger::warn!("Could not update {}: {e}", config_file.display());
                    }
                }
                config
            }
            Err(e) => {
                logger::warn!("Ignoring {}: {e}", config_file.display());
                defaults
            }
        }
    }

    /// Write the configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Current value of a setting, or `None` for an unknown key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key.parse::<ConfigKey>().ok()? {
            ConfigKey::Level => self.logging.level.clone(),
            ConfigKey::File => self.logging.file.clone(),
            ConfigKey::Verbose => self.logging.verbose.to_string(),
            ConfigKey::ReportsDir => self.paths.reports_dir.clone(),
            ConfigKey::Program => self.evaluation.program.clone(),
        };
        Some(value)
    }

    /// Change a setting in memory; call [`save`](Config::save) to persist.
    ///
    /// Program ids are checked and stored lowercase.
    ///
    /// # Errors
    /// Returns an error for an unknown key, a non-boolean `verbose`, or a
    /// `program` that is neither `auto` nor a known program id
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Level => self.logging.level = value.to_string(),
            ConfigKey::File => self.logging.file = value.to_string(),
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::ReportsDir => self.paths.reports_dir = value.to_string(),
            ConfigKey::Program => {
                if !value.eq_ignore_ascii_case(AUTO_PROGRAM) {
                    value.parse::<DegreeProgram>()?;
                }
                self.evaluation.program = value.to_lowercase();
            }
        }
        Ok(())
    }

    /// Restore one setting to its default; call [`save`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Level => self.logging.level.clone_from(&defaults.logging.level),
            ConfigKey::File => self.logging.file.clone_from(&defaults.logging.file),
            ConfigKey::Verbose => self.logging.verbose = defaults.logging.verbose,
            ConfigKey::ReportsDir => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            ConfigKey::Program => self
                .evaluation
                .program
                .clone_from(&defaults.evaluation.program),
        }
        Ok(())
    }

    /// Delete the user config file so the next load starts from defaults
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;
        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "\n[evaluation]")?;
        writeln!(f, "  program = \"{}\"", self.evaluation.program)
    }
}
