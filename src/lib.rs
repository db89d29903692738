//! CustomVacay Itinerary Planner
//!
//! A travel-itinerary generator that walks a user through choosing a name,
//! destination, travel styles, transport, and trip duration, then produces
//! one itinerary line per day by drawing activity and attraction templates
//! at random from flat data files and substituting placeholder tokens.
//!
//! # Overview
//!
//! Seed data lives in two line-oriented text files: attractions (tagged
//! with a destination and an urban/natural category) and activities
//! (tagged with travel styles). For each request the planner re-reads both
//! files, filters them down to candidate pools, and samples without
//! replacement so no template or attraction repeats within a trip.
//!
//! ## Quick Start
//!
//! ```rust
//! use customvacay_planner::*;
//!
//! let request = ItineraryRequest::new(
//!     "John Doe",
//!     Destination::France,
//!     "2",
//!     &[TravelStyle::Cultural],
//!     Transport::Train,
//! )?;
//!
//! let pools = CandidatePools {
//!     urban: vec!["the Louvre".into(), "the Latin Quarter".into()],
//!     natural: vec!["the Calanques".into(), "the Loire Valley".into()],
//!     activities: vec![
//!         "Day #: tour urban_attraction, arriving by method_of_access.".into(),
//!         "Day #: picnic near natural_attraction outside location.".into(),
//!         "Day #: wander through urban_attraction at dusk.".into(),
//!     ],
//! };
//!
//! let itinerary = ItineraryGenerator::with_seed(42).generate(&request, pools)?;
//! assert_eq!(itinerary.days.len(), 2);
//! # Ok::<(), customvacay_planner::PlannerError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: enums, identifiers, and configuration
//! - [`data`]: data-file record formats and the rewinding reader
//! - [`planner`]: request validation, candidate selection, and generation
//! - [`wizard`]: the interactive console input boundary
//! - [`logging`]: tracing setup for the CLI
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod data;
pub mod logging;
pub mod planner;
pub mod types;
pub mod wizard;

// Core types
pub use types::{
    CliArgs,
    ConfigError,
    ConfigValidationError,
    Destination,
    // Identifiers
    ItineraryId,
    LocationCategory,
    OutputFormat,
    // Configuration
    PlannerConfig,
    Transport,
    TravelStyle,
};

// Data access
pub use data::{ActivityRecord, Catalog, DataSource, LocationRecord};

// Planning
pub use planner::{
    CandidatePools, Itinerary, ItineraryGenerator, ItineraryRequest, Planner, PlannerError,
    PlannerResult,
};

// Input boundary
pub use wizard::Wizard;
