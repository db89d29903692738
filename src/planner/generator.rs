//! Itinerary generation
//!
//! One line of output per trip day: an activity template is drawn at
//! random from the remaining pool, its attraction placeholders are filled
//! with randomly drawn urban/natural attractions, and the transport,
//! destination, and day-number tokens are substituted. All draws are
//! without replacement, so nothing repeats within a pass; an empty pool is
//! an explicit error rather than a panic.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::planner::error::{PlannerError, PlannerResult};
use crate::planner::request::ItineraryRequest;
use crate::planner::selector::CandidatePools;
use crate::types::{Destination, ItineraryId, LocationCategory, Transport, TravelStyle};

/// Placeholder token for the transport mode
const ACCESS_TOKEN: &str = "method_of_access";

/// Placeholder token for the destination name
const LOCATION_TOKEN: &str = "location";

/// A generated trip itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Unique identifier for this itinerary
    pub id: ItineraryId,
    /// When the itinerary was generated
    pub created_at: DateTime<Utc>,
    /// Normalized traveler name
    pub name: String,
    /// Trip destination
    pub destination: Destination,
    /// Trip duration in days
    pub duration: u8,
    /// Selected travel styles
    pub styles: Vec<TravelStyle>,
    /// Transport mode
    pub transport: Transport,
    /// One fully substituted line per day, day 1 first
    pub days: Vec<String>,
}

impl Itinerary {
    /// The day lines as a single newline-terminated text blob
    pub fn days_text(&self) -> String {
        let mut text = String::new();
        for line in &self.days {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styles =
            self.styles.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");

        writeln!(f, "Itinerary for {}", self.name)?;
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Transportation: {}", self.transport)?;
        writeln!(f, "Preferences: {}", styles)?;
        writeln!(f, "Duration (Days): {}", self.duration)?;
        writeln!(f)?;
        for line in &self.days {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Generator that fills itinerary templates from candidate pools
pub struct ItineraryGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for ItineraryGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItineraryGenerator").finish()
    }
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Generate one itinerary, consuming the candidate pools
    pub fn generate(
        &mut self,
        request: &ItineraryRequest,
        mut pools: CandidatePools,
    ) -> PlannerResult<Itinerary> {
        let transport = request.transport().to_string().to_lowercase();
        let destination = request.destination().to_string();
        let mut days = Vec::with_capacity(request.duration() as usize);

        for day in 1..=request.duration() {
            let mut line = self.draw(&mut pools.activities, "activity", day)?;

            // Attraction payloads may carry location/method_of_access
            // tokens of their own, so attractions go in first
            let urban_token = LocationCategory::Urban.tag();
            if line.contains(urban_token) {
                let attraction = self.draw(&mut pools.urban, "urban location", day)?;
                line = line.replace(urban_token, &attraction);
            }

            let natural_token = LocationCategory::Natural.tag();
            if line.contains(natural_token) {
                let attraction = self.draw(&mut pools.natural, "natural location", day)?;
                line = line.replace(natural_token, &attraction);
            }

            line = line.replace(ACCESS_TOKEN, &transport);
            line = line.replace(LOCATION_TOKEN, &destination);
            line = line.replace('#', &day.to_string());

            days.push(line);
        }

        Ok(Itinerary {
            id: ItineraryId::new(),
            created_at: Utc::now(),
            name: request.name().to_string(),
            destination: request.destination(),
            duration: request.duration(),
            styles: request.styles_vec(),
            transport: request.transport(),
            days,
        })
    }

    /// Draw one template uniformly at random, removing it from the pool
    fn draw(&mut self, pool: &mut Vec<String>, kind: &'static str, day: u8) -> PlannerResult<String> {
        if pool.is_empty() {
            return Err(PlannerError::pool_exhausted(kind, day));
        }
        let index = self.rng.gen_range(0..pool.len());
        Ok(pool.swap_remove(index))
    }
}
