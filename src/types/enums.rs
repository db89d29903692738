//! Enumeration types for the itinerary planner
//!
//! This module contains the fixed enumerated sets the planner works with:
//! supported destinations, travel styles, transport modes, attraction
//! categories, and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported travel destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// The United Kingdom
    UnitedKingdom,
    /// France
    France,
    /// Canada
    Canada,
    /// The United States
    UnitedStates,
    /// Italy
    Italy,
}

impl Destination {
    /// All supported destinations, in menu order
    pub const ALL: [Destination; 5] = [
        Destination::UnitedKingdom,
        Destination::France,
        Destination::Canada,
        Destination::UnitedStates,
        Destination::Italy,
    ];
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::UnitedKingdom => write!(f, "United Kingdom"),
            Destination::France => write!(f, "France"),
            Destination::Canada => write!(f, "Canada"),
            Destination::UnitedStates => write!(f, "United States"),
            Destination::Italy => write!(f, "Italy"),
        }
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "united kingdom" | "unitedkingdom" | "uk" => Ok(Destination::UnitedKingdom),
            "france" => Ok(Destination::France),
            "canada" => Ok(Destination::Canada),
            "united states" | "unitedstates" | "usa" | "us" => Ok(Destination::UnitedStates),
            "italy" => Ok(Destination::Italy),
            _ => Err(format!("Unknown destination: {}", s)),
        }
    }
}

/// Travel style preferences used to filter activity templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TravelStyle {
    /// Outdoor and high-energy activities
    Adventure,
    /// Low-effort, restful activities
    Relaxation,
    /// Museums, history, and local traditions
    Cultural,
    /// High-end dining and accommodation
    Luxury,
    /// Activities suitable for children
    Family,
}

impl TravelStyle {
    /// All selectable styles, in menu order
    pub const ALL: [TravelStyle; 5] = [
        TravelStyle::Adventure,
        TravelStyle::Relaxation,
        TravelStyle::Cultural,
        TravelStyle::Luxury,
        TravelStyle::Family,
    ];

    /// The lowercase tag marking this style in the activities data file
    pub fn tag(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "#adventure",
            TravelStyle::Relaxation => "#relaxation",
            TravelStyle::Cultural => "#cultural",
            TravelStyle::Luxury => "#luxury",
            TravelStyle::Family => "#family",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelStyle::Adventure => write!(f, "Adventure"),
            TravelStyle::Relaxation => write!(f, "Relaxation"),
            TravelStyle::Cultural => write!(f, "Cultural"),
            TravelStyle::Luxury => write!(f, "Luxury"),
            TravelStyle::Family => write!(f, "Family"),
        }
    }
}

impl FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#').to_lowercase().as_str() {
            "adventure" => Ok(TravelStyle::Adventure),
            "relaxation" => Ok(TravelStyle::Relaxation),
            "cultural" | "culture" => Ok(TravelStyle::Cultural),
            "luxury" => Ok(TravelStyle::Luxury),
            "family" => Ok(TravelStyle::Family),
            _ => Err(format!("Unknown travel style: {}", s)),
        }
    }
}

/// Transport modes for reaching attractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    /// Travel by car
    Car,
    /// Travel by train
    Train,
    /// Travel by boat
    Boat,
    /// Travel by plane
    Plane,
}

impl Transport {
    /// All transport modes, in menu order
    pub const ALL: [Transport; 4] =
        [Transport::Car, Transport::Train, Transport::Boat, Transport::Plane];
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Car => write!(f, "Car"),
            Transport::Train => write!(f, "Train"),
            Transport::Boat => write!(f, "Boat"),
            Transport::Plane => write!(f, "Plane"),
        }
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Transport::Car),
            "train" => Ok(Transport::Train),
            "boat" => Ok(Transport::Boat),
            "plane" | "airplane" => Ok(Transport::Plane),
            _ => Err(format!("Unknown transport mode: {}", s)),
        }
    }
}

/// Attraction categories used to bucket location records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    /// City attractions (museums, landmarks, districts)
    Urban,
    /// Outdoor attractions (parks, coastlines, mountains)
    Natural,
}

impl LocationCategory {
    /// The category tag as it appears in the locations data file, which is
    /// also the placeholder token activity templates embed
    pub fn tag(&self) -> &'static str {
        match self {
            LocationCategory::Urban => "urban_attraction",
            LocationCategory::Natural => "natural_attraction",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationCategory::Urban => write!(f, "Urban"),
            LocationCategory::Natural => write!(f, "Natural"),
        }
    }
}

impl FromStr for LocationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urban_attraction" | "urban" => Ok(LocationCategory::Urban),
            "natural_attraction" | "natural" => Ok(LocationCategory::Natural),
            _ => Err(format!("Unknown location category: {}", s)),
        }
    }
}

/// Output format options for the generated itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text block
    Text,
    /// JSON document with request echo and day lines
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_display() {
        assert_eq!(format!("{}", Destination::UnitedKingdom), "United Kingdom");
        assert_eq!(format!("{}", Destination::UnitedStates), "United States");
        assert_eq!(format!("{}", Destination::Italy), "Italy");
    }

    #[test]
    fn test_destination_from_str() {
        assert_eq!("united kingdom".parse::<Destination>().unwrap(), Destination::UnitedKingdom);
        assert_eq!("uk".parse::<Destination>().unwrap(), Destination::UnitedKingdom);
        assert_eq!("United States".parse::<Destination>().unwrap(), Destination::UnitedStates);
        assert_eq!("usa".parse::<Destination>().unwrap(), Destination::UnitedStates);
        assert_eq!("france".parse::<Destination>().unwrap(), Destination::France);

        // Test error case
        assert!("atlantis".parse::<Destination>().is_err());
    }

    #[test]
    fn test_travel_style_tags() {
        assert_eq!(TravelStyle::Adventure.tag(), "#adventure");
        assert_eq!(TravelStyle::Family.tag(), "#family");
    }

    #[test]
    fn test_travel_style_from_str() {
        assert_eq!("adventure".parse::<TravelStyle>().unwrap(), TravelStyle::Adventure);
        assert_eq!("ADVENTURE".parse::<TravelStyle>().unwrap(), TravelStyle::Adventure);
        assert_eq!("#cultural".parse::<TravelStyle>().unwrap(), TravelStyle::Cultural);
        assert_eq!("culture".parse::<TravelStyle>().unwrap(), TravelStyle::Cultural);

        // Test error case
        assert!("extreme".parse::<TravelStyle>().is_err());
    }

    #[test]
    fn test_transport_from_str() {
        assert_eq!("car".parse::<Transport>().unwrap(), Transport::Car);
        assert_eq!("Plane".parse::<Transport>().unwrap(), Transport::Plane);
        assert_eq!("airplane".parse::<Transport>().unwrap(), Transport::Plane);

        // Test error case
        assert!("teleport".parse::<Transport>().is_err());
    }

    #[test]
    fn test_location_category_tags() {
        assert_eq!(LocationCategory::Urban.tag(), "urban_attraction");
        assert_eq!(LocationCategory::Natural.tag(), "natural_attraction");
        assert_eq!(
            "urban_attraction".parse::<LocationCategory>().unwrap(),
            LocationCategory::Urban
        );
        assert_eq!(
            "natural_attraction".parse::<LocationCategory>().unwrap(),
            LocationCategory::Natural
        );
        assert!("suburban_attraction".parse::<LocationCategory>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        // Test that enums round-trip through serde
        let destination = Destination::UnitedKingdom;
        let json = serde_json::to_string(&destination).unwrap();
        let deserialized: Destination = serde_json::from_str(&json).unwrap();
        assert_eq!(destination, deserialized);

        let style = TravelStyle::Luxury;
        let json = serde_json::to_string(&style).unwrap();
        let deserialized: TravelStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, deserialized);

        let transport = Transport::Boat;
        let json = serde_json::to_string(&transport).unwrap();
        let deserialized: Transport = serde_json::from_str(&json).unwrap();
        assert_eq!(transport, deserialized);
    }

    #[test]
    fn test_menu_order_constants() {
        assert_eq!(Destination::ALL.len(), 5);
        assert_eq!(TravelStyle::ALL.len(), 5);
        assert_eq!(Transport::ALL.len(), 4);
        assert_eq!(Transport::ALL[0], Transport::Car);
    }
}
