//! Itinerary planning
//!
//! This module ties the pieces together: request validation, candidate
//! selection, and generation. The [`Planner`] owns the data source and the
//! generator and produces one [`Itinerary`] per call, re-reading the data
//! files from the start each time.

pub mod error;
pub mod generator;
pub mod request;
pub mod selector;

pub use error::{PlannerError, PlannerResult};
pub use generator::{Itinerary, ItineraryGenerator};
pub use request::ItineraryRequest;
pub use selector::CandidatePools;

use tracing::info;

use crate::data::DataSource;
use crate::types::PlannerConfig;

/// Orchestrates one itinerary generation pass per request
#[derive(Debug)]
pub struct Planner {
    source: DataSource,
    generator: ItineraryGenerator,
}

impl Planner {
    /// Open the data files named by the configuration
    ///
    /// A configured seed makes every generation pass reproducible.
    pub fn new(config: &PlannerConfig) -> PlannerResult<Self> {
        let source = DataSource::open(&config.locations_file, &config.activities_file)?;
        let generator = match config.seed {
            Some(seed) => ItineraryGenerator::with_seed(seed),
            None => ItineraryGenerator::new(),
        };
        Ok(Self { source, generator })
    }

    /// Build a planner from an already opened source and generator
    pub fn with_parts(source: DataSource, generator: ItineraryGenerator) -> Self {
        Self { source, generator }
    }

    /// Generate an itinerary for a validated request
    ///
    /// Each call rewinds and re-parses the data files, so candidate pools
    /// start full on every pass.
    pub fn create_itinerary(&mut self, request: &ItineraryRequest) -> PlannerResult<Itinerary> {
        let catalog = self.source.load()?;
        let pools =
            CandidatePools::select(&catalog, request.destination(), &request.styles_vec());

        let itinerary = self.generator.generate(request, pools)?;

        info!(
            id = %itinerary.id,
            destination = %itinerary.destination,
            duration = itinerary.duration,
            "generated itinerary"
        );

        Ok(itinerary)
    }

    /// Validate that both data files parse, without generating anything
    ///
    /// Used by dry-run mode to catch malformed seed data up front.
    pub fn check_data(&mut self) -> PlannerResult<(usize, usize)> {
        let catalog = self.source.load()?;
        Ok((catalog.locations.len(), catalog.activities.len()))
    }
}
