//! Candidate pool selection
//!
//! Filters the parsed catalog down to the templates eligible for one
//! request: attractions at the chosen destination, bucketed urban/natural,
//! and activities tagged with any of the chosen styles. The whole catalog
//! is scanned every time; no ordering of the data files is assumed.

use tracing::debug;

use crate::data::Catalog;
use crate::types::{Destination, LocationCategory, TravelStyle};

/// The not-yet-used templates available to one generation pass
///
/// Pools keep the data files' insertion order; the generator draws from
/// them without replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePools {
    /// Urban attractions at the requested destination
    pub urban: Vec<String>,
    /// Natural attractions at the requested destination
    pub natural: Vec<String>,
    /// Activity templates matching the requested styles
    pub activities: Vec<String>,
}

impl CandidatePools {
    /// Filter a catalog down to the candidates for one request
    pub fn select(catalog: &Catalog, destination: Destination, styles: &[TravelStyle]) -> Self {
        let (urban, natural) = select_locations(catalog, destination);
        let activities = select_activities(catalog, styles);

        debug!(
            %destination,
            urban = urban.len(),
            natural = natural.len(),
            activities = activities.len(),
            "selected candidate pools"
        );

        Self { urban, natural, activities }
    }
}

/// Collect the urban and natural attraction templates for a destination
pub fn select_locations(catalog: &Catalog, destination: Destination) -> (Vec<String>, Vec<String>) {
    let mut urban = Vec::new();
    let mut natural = Vec::new();

    for record in &catalog.locations {
        if record.destination != destination {
            continue;
        }
        match record.category {
            LocationCategory::Urban => urban.push(record.template.clone()),
            LocationCategory::Natural => natural.push(record.template.clone()),
        }
    }

    (urban, natural)
}

/// Collect the activity templates tagged with any of the requested styles
///
/// A template tagged with several requested styles still enters the pool
/// once, so it cannot be drawn twice in a pass.
pub fn select_activities(catalog: &Catalog, styles: &[TravelStyle]) -> Vec<String> {
    catalog
        .activities
        .iter()
        .filter(|record| record.matches_any(styles))
        .map(|record| record.template.clone())
        .collect()
}
