//! Unique identifier types for the itinerary planner
//!
//! Generated itineraries carry a UUID-based identifier so log events and
//! saved output can be correlated across runs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generated itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItineraryId(pub Uuid);

impl ItineraryId {
    /// Create a new random itinerary ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItineraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ITIN_{}", self.0.simple())
    }
}

impl Serialize for ItineraryId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("ITIN_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for ItineraryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("ITIN_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(ItineraryId(uuid))
        } else {
            // Fallback: accept a raw UUID
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(ItineraryId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_id_creation() {
        let id1 = ItineraryId::new();
        let id2 = ItineraryId::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        let id3 = ItineraryId::default();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_itinerary_id_display() {
        let id = ItineraryId::new();
        let display_str = format!("{}", id);

        // Should be ITIN_ + 32 hex chars
        assert!(display_str.starts_with("ITIN_"));
        assert_eq!(display_str.len(), 37);
    }

    #[test]
    fn test_itinerary_id_serialization() {
        let id = ItineraryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("ITIN_"));

        let deserialized: ItineraryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_itinerary_id_raw_uuid_fallback() {
        let raw_uuid = Uuid::new_v4();
        let raw_uuid_str = format!("\"{}\"", raw_uuid);

        let id: ItineraryId = serde_json::from_str(&raw_uuid_str).unwrap();
        assert_eq!(id.0, raw_uuid);
    }
}
