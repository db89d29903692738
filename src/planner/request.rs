//! Request assembly and input validation
//!
//! User input is validated field by field and assembled into an immutable
//! [`ItineraryRequest`] once every step has passed. The standalone
//! predicates are what the wizard calls after each prompt; the constructor
//! re-checks everything so a request can never exist in a half-valid state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::planner::error::{PlannerError, PlannerResult};
use crate::types::config::duration::{MAX_DAYS, MIN_DAYS};
use crate::types::{Destination, Transport, TravelStyle};

/// Check a traveler name: after removing spaces it must be non-empty and
/// purely alphanumeric
pub fn validate_name(name: &str) -> bool {
    let stripped: String = name.chars().filter(|c| *c != ' ').collect();
    !stripped.is_empty() && stripped.chars().all(char::is_alphanumeric)
}

/// Check a style selection: at least one style must be chosen
pub fn validate_styles(styles: &[TravelStyle]) -> bool {
    !styles.is_empty()
}

/// Check a duration input: all digits, value between 1 and 10 inclusive
pub fn validate_duration(input: &str) -> bool {
    parse_duration(input).is_some()
}

/// Parse a duration input into a day count, if valid
pub fn parse_duration(input: &str) -> Option<u8> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match input.parse::<u8>() {
        Ok(days) if (MIN_DAYS..=MAX_DAYS).contains(&days) => Some(days),
        _ => None,
    }
}

/// Normalize a validated name: trim and title-case each word
fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A fully validated itinerary request
///
/// Assembled once user input is complete and immutable afterwards; the
/// generator only ever sees requests that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    name: String,
    destination: Destination,
    duration: u8,
    styles: BTreeSet<TravelStyle>,
    transport: Transport,
}

impl ItineraryRequest {
    /// Validate all fields and build a request
    ///
    /// The duration arrives as the raw input string so the 1-10 digit rule
    /// is enforced in exactly one place.
    pub fn new(
        name: &str,
        destination: Destination,
        duration_input: &str,
        styles: &[TravelStyle],
        transport: Transport,
    ) -> PlannerResult<Self> {
        if !validate_name(name) {
            return Err(PlannerError::invalid_name(name));
        }
        if !validate_styles(styles) {
            return Err(PlannerError::InvalidStyles);
        }
        let duration = parse_duration(duration_input)
            .ok_or_else(|| PlannerError::invalid_duration(duration_input))?;

        Ok(Self {
            name: normalize_name(name),
            destination,
            duration,
            styles: styles.iter().copied().collect(),
            transport,
        })
    }

    /// Normalized traveler name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trip destination
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Trip duration in days
    pub fn duration(&self) -> u8 {
        self.duration
    }

    /// Selected travel styles, deduplicated and in declaration order
    pub fn styles(&self) -> &BTreeSet<TravelStyle> {
        &self.styles
    }

    /// Selected styles as a list, for filtering
    pub fn styles_vec(&self) -> Vec<TravelStyle> {
        self.styles.iter().copied().collect()
    }

    /// Transport mode
    pub fn transport(&self) -> Transport {
        self.transport
    }
}
