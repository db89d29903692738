//! Record formats for the two data files
//!
//! Both files are line oriented with pipe-delimited fields:
//!
//! - locations: `destination|category|template`, e.g.
//!   `United Kingdom|urban_attraction|the Tower of London`
//! - activities: `tags|template` where `tags` is a whitespace-separated
//!   list of zero or more `#style` tags, e.g.
//!   `#adventure #family|Day #: hike out to natural_attraction.`
//!
//! A location template may itself embed the `location` and
//! `method_of_access` placeholder tokens; an activity template may embed
//! `urban_attraction`, `natural_attraction`, `method_of_access`,
//! `location`, and the `#` day-number marker.

use crate::types::{Destination, LocationCategory, TravelStyle};
use serde::{Deserialize, Serialize};

/// One attraction entry from the locations data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Destination this attraction belongs to
    pub destination: Destination,
    /// Urban or natural attraction
    pub category: LocationCategory,
    /// Attraction text inserted into activity templates
    pub template: String,
}

impl LocationRecord {
    /// Parse one locations-file line
    ///
    /// Returns the failure reason on malformed input; the caller attaches
    /// file path and line number.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut fields = line.splitn(3, '|');
        let destination = fields.next().unwrap_or_default();
        let category = fields
            .next()
            .ok_or_else(|| "expected 3 pipe-delimited fields, found 1".to_string())?;
        let template = fields
            .next()
            .ok_or_else(|| "expected 3 pipe-delimited fields, found 2".to_string())?;

        let destination = destination.parse::<Destination>()?;
        let category = category.parse::<LocationCategory>()?;

        let template = template.trim();
        if template.is_empty() {
            return Err("empty attraction template".to_string());
        }

        Ok(Self { destination, category, template: template.to_string() })
    }
}

/// One activity entry from the activities data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Styles this activity is tagged with (possibly empty)
    pub styles: Vec<TravelStyle>,
    /// Activity template with placeholder tokens
    pub template: String,
}

impl ActivityRecord {
    /// Parse one activities-file line
    pub fn parse(line: &str) -> Result<Self, String> {
        let (tags, template) = line
            .split_once('|')
            .ok_or_else(|| "expected 2 pipe-delimited fields, found 1".to_string())?;

        let mut styles = Vec::new();
        for tag in tags.split_whitespace() {
            if !tag.starts_with('#') {
                return Err(format!("style tag {:?} must start with '#'", tag));
            }
            styles.push(tag.parse::<TravelStyle>()?);
        }

        let template = template.trim();
        if template.is_empty() {
            return Err("empty activity template".to_string());
        }

        Ok(Self { styles, template: template.to_string() })
    }

    /// Whether this activity matches any of the requested styles
    pub fn matches_any(&self, requested: &[TravelStyle]) -> bool {
        self.styles.iter().any(|style| requested.contains(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_record() {
        let record =
            LocationRecord::parse("United Kingdom|urban_attraction|the Tower of London").unwrap();
        assert_eq!(record.destination, Destination::UnitedKingdom);
        assert_eq!(record.category, LocationCategory::Urban);
        assert_eq!(record.template, "the Tower of London");
    }

    #[test]
    fn test_parse_location_record_trims_template() {
        let record = LocationRecord::parse("France|natural_attraction|  the Calanques  ").unwrap();
        assert_eq!(record.template, "the Calanques");
    }

    #[test]
    fn test_parse_location_record_rejects_malformed_lines() {
        // Too few fields
        assert!(LocationRecord::parse("France|natural_attraction").is_err());
        assert!(LocationRecord::parse("just some text").is_err());
        // Unknown destination and category
        assert!(LocationRecord::parse("Narnia|urban_attraction|a lamp post").is_err());
        assert!(LocationRecord::parse("France|suburban_attraction|a mall").is_err());
        // Empty payload
        assert!(LocationRecord::parse("France|urban_attraction|   ").is_err());
    }

    #[test]
    fn test_parse_activity_record() {
        let record = ActivityRecord::parse(
            "#adventure #family|Day #: hike out to natural_attraction and back by method_of_access.",
        )
        .unwrap();
        assert_eq!(record.styles, vec![TravelStyle::Adventure, TravelStyle::Family]);
        assert!(record.template.starts_with("Day #: hike"));
    }

    #[test]
    fn test_parse_activity_record_tag_case_insensitive() {
        let record = ActivityRecord::parse("#ADVENTURE #Cultural|Day #: explore.").unwrap();
        assert_eq!(record.styles, vec![TravelStyle::Adventure, TravelStyle::Cultural]);
    }

    #[test]
    fn test_parse_activity_record_allows_untagged_lines() {
        let record = ActivityRecord::parse("|Day #: rest at the hotel.").unwrap();
        assert!(record.styles.is_empty());
    }

    #[test]
    fn test_parse_activity_record_rejects_malformed_lines() {
        // Missing delimiter
        assert!(ActivityRecord::parse("Day #: explore.").is_err());
        // Bare word where a tag was expected
        assert!(ActivityRecord::parse("adventure|Day #: explore.").is_err());
        // Unknown style
        assert!(ActivityRecord::parse("#extreme|Day #: explore.").is_err());
        // Empty template
        assert!(ActivityRecord::parse("#adventure|").is_err());
    }

    #[test]
    fn test_matches_any() {
        let record = ActivityRecord::parse("#luxury #cultural|Day #: dine downtown.").unwrap();
        assert!(record.matches_any(&[TravelStyle::Cultural]));
        assert!(record.matches_any(&[TravelStyle::Adventure, TravelStyle::Luxury]));
        assert!(!record.matches_any(&[TravelStyle::Family]));
        assert!(!record.matches_any(&[]));
    }
}
