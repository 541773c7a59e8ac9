//! Map Marker Entity
//!
//! Issues placed on the city map at percentage coordinates.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::issue::{IssueStatus, Priority};

/// Kind of issue a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    Road,
    Water,
    Lighting,
    Police,
    Utilities,
}

impl MarkerType {
    pub const ALL: [MarkerType; 5] = [
        MarkerType::Road,
        MarkerType::Water,
        MarkerType::Lighting,
        MarkerType::Police,
        MarkerType::Utilities,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MarkerType::Road => "road",
            MarkerType::Water => "water",
            MarkerType::Lighting => "lighting",
            MarkerType::Police => "police",
            MarkerType::Utilities => "utilities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkerType::Road => "Road Issues",
            MarkerType::Water => "Water Issues",
            MarkerType::Lighting => "Street Lighting",
            MarkerType::Police => "Police & People",
            MarkerType::Utilities => "Utilities",
        }
    }
}

impl FromStr for MarkerType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        MarkerType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DomainError::UnknownId(s.to_string()))
    }
}

/// An issue pinned on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: u32,
    /// Horizontal position, percent of map width
    pub x: f64,
    /// Vertical position, percent of map height
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: MarkerType,
    pub priority: Priority,
    pub status: IssueStatus,
    pub title: String,
    pub description: String,
    pub reported_by: String,
    pub date: NaiveDate,
}

impl MapMarker {
    /// CSS class for the pin colour
    pub fn pin_class(&self) -> &'static str {
        match self.priority {
            Priority::Urgent | Priority::High => "map-pin pin-high",
            Priority::Medium => "map-pin pin-medium",
            Priority::Low => "map-pin pin-low",
        }
    }
}

impl Entity for MapMarker {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_type_ids() {
        assert_eq!("police".parse::<MarkerType>(), Ok(MarkerType::Police));
        assert_eq!(MarkerType::Utilities.id(), "utilities");
        assert!("all".parse::<MarkerType>().is_err());
    }
}
