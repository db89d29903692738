//! Configuration structures for the itinerary planner
//!
//! This module contains the planner configuration structure and validation
//! logic, the JSON config-file mirror, and the command line argument
//! definitions.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Trip duration bounds, in days
pub mod duration {
    /// Shortest allowed trip
    pub const MIN_DAYS: u8 = 1;

    /// Longest allowed trip
    pub const MAX_DAYS: u8 = 10;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "customvacay-planner",
    version = "0.1.0",
    about = "CustomVacay travel assistant - generates personalized trip itineraries",
    long_about = "Generates a day-by-day trip itinerary by drawing activity and attraction \
templates from flat data files and filling in the traveler's destination, transport, and day \
numbers.

EXAMPLES:
    # Run the interactive wizard
    customvacay-planner

    # Generate in one shot, no prompts
    customvacay-planner --name \"John Doe\" --destination France --duration 3 \\
        --styles adventure,cultural --transport train

    # Reproducible output
    customvacay-planner --seed 42 --name Ada --destination Italy --duration 2 \\
        --styles luxury --transport plane

    # Use a configuration file and write the itinerary to disk
    customvacay-planner --config planner.json --output itinerary.txt

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path to the locations data file
    #[arg(
        long,
        help = "Path to the locations data file",
        long_help = "Line-oriented locations file: destination|category|template. \
Default: itinerary_data/locations.txt"
    )]
    pub locations_file: Option<String>,

    /// Path to the activities data file
    #[arg(
        long,
        help = "Path to the activities data file",
        long_help = "Line-oriented activities file: tags|template, with whitespace-separated \
#style tags. Default: itinerary_data/activities.txt"
    )]
    pub activities_file: Option<String>,

    /// Traveler name (skips the wizard's name prompt)
    #[arg(long, help = "Traveler name")]
    pub name: Option<String>,

    /// Trip destination (skips the wizard's destination prompt)
    #[arg(
        long,
        help = "Trip destination",
        long_help = "One of: United Kingdom, France, Canada, United States, Italy \
(case-insensitive, common abbreviations accepted)."
    )]
    pub destination: Option<String>,

    /// Trip duration in days (skips the wizard's duration prompt)
    #[arg(
        long,
        help = "Trip duration in days (1-10)",
        long_help = "Number of itinerary days to generate. Must be a whole number between 1 \
and 10."
    )]
    pub duration: Option<String>,

    /// Comma-separated travel styles (skips the wizard's styles prompt)
    #[arg(
        long,
        help = "Comma-separated travel styles",
        long_help = "At least one of: Adventure, Relaxation, Cultural, Luxury, Family. \
Example: --styles adventure,family"
    )]
    pub styles: Option<String>,

    /// Transport mode (skips the wizard's transport prompt)
    #[arg(long, help = "Transport mode (Car, Train, Boat, Plane)")]
    pub transport: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Write the itinerary to this path instead of stdout
    #[arg(short, long, help = "Write the itinerary to this path instead of stdout")]
    pub output: Option<String>,

    /// Output format for the generated itinerary
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the generated itinerary. Supported formats: text, json. \
Default: text"
    )]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and data files without generating
    #[arg(long, help = "Validate configuration and data files without generating")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Whether every request field was supplied on the command line, in
    /// which case the interactive wizard is skipped entirely
    pub fn has_complete_request(&self) -> bool {
        self.name.is_some()
            && self.destination.is_some()
            && self.duration.is_some()
            && self.styles.is_some()
            && self.transport.is_some()
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to the locations data file
    pub locations_file: Option<String>,

    /// Path to the activities data file
    pub activities_file: Option<String>,

    /// Output format for the generated itinerary
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Write the itinerary to this path instead of stdout
    pub output: Option<String>,
}

/// Configuration for the itinerary planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Path to the locations data file
    pub locations_file: String,

    /// Path to the activities data file
    pub activities_file: String,

    /// Output format for the generated itinerary
    pub output_format: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Write the itinerary to this path instead of stdout
    pub output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for planner configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A data file path is empty
    #[error("Data file path for {0} must not be empty")]
    EmptyDataFilePath(&'static str),

    /// The output format is not recognized
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            locations_file: "itinerary_data/locations.txt".to_string(),
            activities_file: "itinerary_data/activities.txt".to_string(),
            output_format: "text".to_string(),
            seed: None,
            output: None,
        }
    }
}

impl PlannerConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            locations_file: config_file.locations_file.unwrap_or(defaults.locations_file),
            activities_file: config_file.activities_file.unwrap_or(defaults.activities_file),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            seed: config_file.seed.or(defaults.seed),
            output: config_file.output.or(defaults.output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: &CliArgs) {
        if let Some(value) = &args.locations_file {
            config.locations_file = value.clone();
        }
        if let Some(value) = &args.activities_file {
            config.activities_file = value.clone();
        }
        if let Some(value) = &args.output_format {
            config.output_format = value.clone();
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = &args.output {
            config.output = Some(value.clone());
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.locations_file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDataFilePath("locations_file"));
        }

        if self.activities_file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDataFilePath("activities_file"));
        }

        self.get_output_format()?;

        Ok(())
    }

    /// Get the output format as a typed value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}
