//! Venue record model
//!
//! One record per food venue. Records are loaded by an external process and
//! are read-only from this system's point of view.
//!
//! Field names on the wire match the stored documents (`_id`, `food_type`,
//! `reviews_average`, ...), so existing clients keep working.

use serde::{Deserialize, Serialize};

/// Highest rating a venue can carry
pub const MAX_RATING: f64 = 5.0;

/// A single food venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Opaque unique key
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub district: String,
    pub food_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Average rating in [0, 5]; 0 when the venue has no rating
    #[serde(default)]
    pub reviews_average: f64,
    #[serde(default)]
    pub reviews_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl VenueRecord {
    /// Condensed view used by the statistics top-rated list
    pub fn summary(&self) -> VenueSummary {
        VenueSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            district: self.district.clone(),
            food_type: self.food_type.clone(),
            reviews_average: self.reviews_average,
            address: self.address.clone(),
        }
    }
}

/// Condensed venue entry for the top-rated statistics list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub district: String,
    pub food_type: String,
    pub reviews_average: f64,
    pub address: String,
}

/// Number of venues sharing one categorical value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

/// Clamp a stored rating into the valid [0, 5] range, mapping absent to 0
pub fn normalize_rating(raw: Option<f64>) -> f64 {
    match raw {
        Some(r) if r.is_finite() => r.clamp(0.0, MAX_RATING),
        _ => 0.0,
    }
}
