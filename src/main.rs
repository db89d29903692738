// CustomVacay Itinerary Planner - Main Entry Point
//
// Run the interactive wizard:
//
// ```console
// $ cargo build --release
// $ ./target/release/customvacay-planner
// ```
//
// Or generate in one shot:
//
// ```console
// $ ./target/release/customvacay-planner --name "John Doe" --destination France \
//       --duration 3 --styles adventure,cultural --transport train
// ```

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

use customvacay_planner::logging::LoggingConfig;
use customvacay_planner::planner::{Itinerary, ItineraryRequest, Planner, PlannerError, PlannerResult};
use customvacay_planner::types::{CliArgs, Destination, OutputFormat, PlannerConfig, Transport, TravelStyle};
use customvacay_planner::wizard::Wizard;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = PlannerConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting CustomVacay planner");

    // Load configuration from CLI arguments and optional config file
    let config = match PlannerConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    // Handle dry run mode
    if args.dry_run {
        if let Err(e) = dry_run(&config) {
            error!("Dry run failed: {}", e);
            process::exit(1);
        }
        return;
    }

    // Collect a request and generate
    if let Err(e) = run(&args, &config) {
        error!("Itinerary generation failed: {}", e);
        process::exit(1);
    }

    info!("CustomVacay planner completed successfully");
}

/// Validate configuration and data files without generating anything
fn dry_run(config: &PlannerConfig) -> PlannerResult<()> {
    let mut planner = Planner::new(config)?;
    let (locations, activities) = planner.check_data()?;

    eprintln!("Configuration validation successful!");
    eprintln!("Dry run mode - no itinerary will be generated.");
    print_configuration_summary(config);
    eprintln!(
        "Data files parsed: {} location records, {} activity records",
        locations, activities
    );
    Ok(())
}

/// Collect a request (flags or wizard) and emit the generated itinerary
fn run(args: &CliArgs, config: &PlannerConfig) -> PlannerResult<()> {
    let mut planner = Planner::new(config)?;

    let request = if args.has_complete_request() {
        request_from_args(args)?
    } else {
        // Prompts go to stderr so a redirected stdout stays clean
        let stdin = io::stdin();
        let mut wizard = Wizard::new(stdin.lock(), io::stderr());
        wizard.run()?
    };

    info!(
        destination = %request.destination(),
        duration = request.duration(),
        "request collected"
    );

    let itinerary = planner.create_itinerary(&request)?;
    emit(&itinerary, config)
}

/// Build a request from the one-shot CLI flags
fn request_from_args(args: &CliArgs) -> PlannerResult<ItineraryRequest> {
    // has_complete_request() was checked by the caller
    let name = args.name.as_deref().unwrap_or_default();
    let destination = args
        .destination
        .as_deref()
        .unwrap_or_default()
        .parse::<Destination>()
        .map_err(PlannerError::configuration)?;
    let transport = args
        .transport
        .as_deref()
        .unwrap_or_default()
        .parse::<Transport>()
        .map_err(PlannerError::configuration)?;
    let styles = args
        .styles
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<TravelStyle>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(PlannerError::configuration)?;
    let duration = args.duration.as_deref().unwrap_or_default();

    ItineraryRequest::new(name, destination, duration, &styles, transport)
}

/// Write the itinerary to stdout or to the configured output path
fn emit(itinerary: &Itinerary, config: &PlannerConfig) -> PlannerResult<()> {
    let format = config
        .get_output_format()
        .map_err(|e| PlannerError::configuration(e.to_string()))?;

    let rendered = match format {
        OutputFormat::Text => itinerary.to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(itinerary)?;
            json.push('\n');
            json
        }
    };

    match &config.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
            info!("Itinerary written to: {}", path);
            eprintln!("Itinerary written to: {}", path);
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &PlannerConfig) {
    eprintln!("Configuration:");
    eprintln!("  Locations File: {}", config.locations_file);
    eprintln!("  Activities File: {}", config.activities_file);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(output) = &config.output {
        eprintln!("  Output Path: {}", output);
    }
    eprintln!();
}
