//! Configuration module for `algae-network`

use crate::core::report::visualization::{PageSettings, VisOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$ALGAENET";

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
    /// Directory rendered networks are written to
    #[serde(default)]
    pub out_dir: String,
}

const fn default_passes() -> usize {
    1
}

/// Rendered page and traversal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Page and header title
    #[serde(default)]
    pub title: String,
    /// CSS height of the network canvas
    #[serde(default)]
    pub height: String,
    /// CSS width of the network canvas
    #[serde(default)]
    pub width: String,
    /// Location of the vis-network bundle
    #[serde(default)]
    pub vis_js_url: String,
    /// How many times the record list is traversed while building
    #[serde(default = "default_passes")]
    pub passes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            height: String::new(),
            width: String::new(),
            vis_js_url: String::new(),
            passes: default_passes(),
        }
    }
}

/// Barnes-Hut physics parameters handed to vis-network unchanged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Repulsion between nodes (negative)
    pub gravitational_constant: f64,
    /// Rest length of edges
    pub spring_length: f64,
    /// Edge stiffness
    pub spring_constant: f64,
    /// Velocity below which the simulation stops
    pub min_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: -3000.0,
            spring_length: 150.0,
            spring_constant: 0.05,
            min_velocity: 0.75,
        }
    }
}

impl PhysicsConfig {
    /// Build the vis-network options document with these physics values
    #[must_use]
    pub fn to_vis_options(&self) -> VisOptions {
        let mut options = VisOptions::default();
        options.physics.barnes_hut.gravitational_constant = self.gravitational_constant;
        options.physics.barnes_hut.spring_length = self.spring_length;
        options.physics.barnes_hut.spring_constant = self.spring_constant;
        options.physics.min_velocity = self.min_velocity;
        options
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Network page settings
    #[serde(default)]
    pub network: NetworkConfig,
    /// Layout physics settings
    #[serde(default)]
    pub physics: PhysicsConfig,
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
    /// Override output directory
    pub out_dir: Option<String>,
    /// Override page title
    pub title: Option<String>,
    /// Override traversal passes
    pub passes: Option<usize>,
}

impl Config {
    /// Get the `$ALGAENET` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/algaenet`
    /// - macOS: `~/Library/Application Support/algaenet`
    /// - Windows: `%APPDATA%\algaenet`
    #[must_use]
    pub fn get_algaenet_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("algaenet")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// touched. Numeric sections already carry their defaults through serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        let mut merge = |target: &mut String, default: &str| {
            if target.is_empty() && !default.is_empty() {
                *target = default.to_string();
                changed = true;
            }
        };

        merge(&mut self.logging.level, &defaults.logging.level);
        merge(&mut self.logging.file, &defaults.logging.file);
        merge(&mut self.paths.out_dir, &defaults.paths.out_dir);
        merge(&mut self.network.title, &defaults.network.title);
        merge(&mut self.network.height, &defaults.network.height);
        merge(&mut self.network.width, &defaults.network.width);
        merge(&mut self.network.vis_js_url, &defaults.network.vis_js_url);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is persisted.
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
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(title) = &overrides.title {
            self.network.title.clone_from(title);
        }
        if let Some(passes) = overrides.passes {
            self.network.passes = passes;
        }
    }

    /// Copy of this config with CLI overrides applied
    ///
    /// The receiver stays untouched, so it can still be saved without
    /// persisting per-run flags.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_algaenet_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ALGAENET` in a string to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_algaenet_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$ALGAENET` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from a specific file, creating it from defaults when absent
    ///
    /// Existing files get any missing fields merged in from defaults and are
    /// re-saved when that changed something. Unreadable files are reported
    /// with `log::warn!` and replaced by defaults for this run.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Err(e) = defaults.save_to(config_file) {
                log::warn!(
                    "Could not write default config to {}: {e}",
                    config_file.display()
                );
            }
            return defaults;
        }

        match Self::read_from(config_file) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save_to(config_file) {
                        log::warn!(
                            "Could not update config {}: {e}",
                            config_file.display()
                        );
                    }
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring {e}; using defaults");
                defaults
            }
        }
    }

    /// Read and parse a config file without merging or saving
    ///
    /// # Errors
    /// Returns a message naming the file if it cannot be read or parsed
    pub fn read_from(config_file: &Path) -> Result<Self, String> {
        fs::read_to_string(config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
            .map_err(|e| format!("unreadable config {}: {e}", config_file.display()))
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `out_dir`, `title`, `height`,
    /// `width`, `vis_js_url`, `passes`, `gravitational_constant`, `spring_length`,
    /// `spring_constant`, `min_velocity`. Dashes may replace underscores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "out_dir" => Some(self.paths.out_dir.clone()),
            "title" => Some(self.network.title.clone()),
            "height" => Some(self.network.height.clone()),
            "width" => Some(self.network.width.clone()),
            "vis_js_url" => Some(self.network.vis_js_url.clone()),
            "passes" => Some(self.network.passes.to_string()),
            "gravitational_constant" => Some(self.physics.gravitational_constant.to_string()),
            "spring_length" => Some(self.physics.spring_length.to_string()),
            "spring_constant" => Some(self.physics.spring_constant.to_string()),
            "min_velocity" => Some(self.physics.min_velocity.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
            value
                .parse::<T>()
                .map_err(|_| format!("Invalid value for '{key}': '{value}'"))
        }

        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse(key, value)?,
            "out_dir" => self.paths.out_dir = value.to_string(),
            "title" => self.network.title = value.to_string(),
            "height" => self.network.height = value.to_string(),
            "width" => self.network.width = value.to_string(),
            "vis_js_url" => self.network.vis_js_url = value.to_string(),
            "passes" => {
                let passes: usize = parse(key, value)?;
                if passes == 0 {
                    return Err("'passes' must be at least 1".to_string());
                }
                self.network.passes = passes;
            }
            "gravitational_constant" => self.physics.gravitational_constant = parse(key, value)?,
            "spring_length" => self.physics.spring_length = parse(key, value)?,
            "spring_constant" => self.physics.spring_constant = parse(key, value)?,
            "min_velocity" => self.physics.min_velocity = parse(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "out_dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "title" => self.network.title.clone_from(&defaults.network.title),
            "height" => self.network.height.clone_from(&defaults.network.height),
            "width" => self.network.width.clone_from(&defaults.network.width),
            "vis_js_url" => self
                .network
                .vis_js_url
                .clone_from(&defaults.network.vis_js_url),
            "passes" => self.network.passes = defaults.network.passes,
            "gravitational_constant" => {
                self.physics.gravitational_constant = defaults.physics.gravitational_constant;
            }
            "spring_length" => self.physics.spring_length = defaults.physics.spring_length,
            "spring_constant" => self.physics.spring_constant = defaults.physics.spring_constant,
            "min_velocity" => self.physics.min_velocity = defaults.physics.min_velocity,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything when the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Page settings for the renderers
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            title: self.network.title.clone(),
            height: self.network.height.clone(),
            width: self.network.width.clone(),
            vis_js_url: self.network.vis_js_url.clone(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[network]")?;
        writeln!(f, "  title = \"{}\"", self.network.title)?;
        writeln!(f, "  height = \"{}\"", self.network.height)?;
        writeln!(f, "  width = \"{}\"", self.network.width)?;
        writeln!(f, "  vis_js_url = \"{}\"", self.network.vis_js_url)?;
        writeln!(f, "  passes = {}", self.network.passes)?;

        writeln!(f, "\n[physics]")?;
        writeln!(
            f,
            "  gravitational_constant = {}",
            self.physics.gravitational_constant
        )?;
        writeln!(f, "  spring_length = {}", self.physics.spring_length)?;
        writeln!(f, "  spring_constant = {}", self.physics.spring_constant)?;
        writeln!(f, "  min_velocity = {}", self.physics.min_velocity)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.network.title.is_empty());
        assert_eq!(config.network.passes, 1);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_merge_fills_only_empty_strings() {
        let defaults = Config::from_defaults();
        let mut config = Config::from_toml("[network]\ntitle = \"Custom\"\n").unwrap();

        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.network.title, "Custom");
        assert_eq!(config.network.height, defaults.network.height);
        assert!(!config.merge_defaults(&defaults));
    }

    #[test]
    fn test_partial_physics_keeps_other_defaults() {
        let config = Config::from_toml("[physics]\nspring_length = 90.0\n").unwrap();
        assert!((config.physics.spring_length - 90.0).abs() < f64::EPSILON);
        assert!((config.physics.gravitational_constant + 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_vis_options_carries_physics() {
        let physics = PhysicsConfig {
            gravitational_constant: -1200.0,
            spring_length: 80.0,
            spring_constant: 0.1,
            min_velocity: 1.5,
        };
        let options = physics.to_vis_options();
        assert!((options.physics.barnes_hut.gravitational_constant + 1200.0).abs() < f64::EPSILON);
        assert!((options.physics.min_velocity - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_passes_must_be_positive() {
        let mut config = Config::from_defaults();
        assert!(config.set("passes", "0").is_err());
        assert!(config.set("passes", "2").is_ok());
        assert_eq!(config.network.passes, 2);
    }
}
