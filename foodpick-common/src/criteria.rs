//! Venue filter criteria
//!
//! Translates user-supplied filter parameters into a closed, typed predicate.
//! Every field is optional; an empty criteria set matches all venues.
//!
//! Raw request values never fail: empty strings and unparsable numbers are
//! treated as "not provided".

use crate::venue::VenueRecord;

/// Typed filter predicate over venue records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueCriteria {
    /// Exact district match (case-sensitive as stored)
    pub district: Option<String>,
    /// Exact food category match
    pub food_type: Option<String>,
    /// Inclusive lower bound on the rating average
    pub min_rating: Option<f64>,
}

impl VenueCriteria {
    /// Criteria matching every venue
    pub fn any() -> Self {
        Self::default()
    }

    /// Build criteria from raw query-string values
    ///
    /// # Examples
    /// ```
    /// use foodpick_common::VenueCriteria;
    ///
    /// let c = VenueCriteria::from_params(Some("Quận 1"), Some(""), Some("abc"));
    /// assert_eq!(c.district.as_deref(), Some("Quận 1"));
    /// assert_eq!(c.food_type, None);
    /// assert_eq!(c.min_rating, None);
    /// ```
    pub fn from_params(
        district: Option<&str>,
        food_type: Option<&str>,
        min_rating: Option<&str>,
    ) -> Self {
        Self {
            district: non_empty(district),
            food_type: non_empty(food_type),
            min_rating: min_rating.and_then(parse_rating),
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_food_type(mut self, food_type: impl Into<String>) -> Self {
        self.food_type = Some(food_type.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating).filter(|r| r.is_finite());
        self
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.food_type.is_none() && self.min_rating.is_none()
    }

    /// Evaluate the predicate against one record
    pub fn matches(&self, venue: &VenueRecord) -> bool {
        if let Some(district) = &self.district {
            if venue.district != *district {
                return false;
            }
        }
        if let Some(food_type) = &self.food_type {
            if venue.food_type != *food_type {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if venue.reviews_average < min_rating {
                return false;
            }
        }
        true
    }
}

/// Whitespace-only means "not provided"; anything else is kept verbatim
fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(district: &str, food_type: &str, rating: f64) -> VenueRecord {
        VenueRecord {
            id: format!("{district}-{food_type}-{rating}"),
            name: "Quán".to_string(),
            address: String::new(),
            district: district.to_string(),
            food_type: food_type.to_string(),
            latitude: 10.77,
            longitude: 106.70,
            reviews_average: rating,
            reviews_count: 0,
            phone_number: None,
            website: None,
        }
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let c = VenueCriteria::from_params(None, None, None);
        assert!(c.is_empty());
        assert!(c.matches(&venue("Quận 1", "phở", 0.0)));
        assert!(c.matches(&venue("Quận 5", "bún bò", 5.0)));
    }

    #[test]
    fn test_blank_strings_not_provided() {
        let c = VenueCriteria::from_params(Some(""), Some("   "), Some(""));
        assert!(c.is_empty());
    }

    #[test]
    fn test_category_values_kept_verbatim() {
        let c = VenueCriteria::from_params(Some("Quận 1 "), Some(" phở"), None);
        assert_eq!(c.district.as_deref(), Some("Quận 1 "));
        assert_eq!(c.food_type.as_deref(), Some(" phở"));
        assert!(c.matches(&venue("Quận 1 ", " phở", 4.0)));
        assert!(!c.matches(&venue("Quận 1", "phở", 4.0)));
    }

    #[test]
    fn test_invalid_rating_fails_closed() {
        for raw in ["abc", "4abc", "NaN", "inf", "-inf", ""] {
            let c = VenueCriteria::from_params(None, None, Some(raw));
            assert_eq!(c.min_rating, None, "{raw:?} should be ignored");
        }
        let c = VenueCriteria::from_params(None, None, Some(" 4.5 "));
        assert_eq!(c.min_rating, Some(4.5));
    }

    #[test]
    fn test_min_rating_inclusive() {
        let c = VenueCriteria::any().with_min_rating(4.0);
        let venues = [
            venue("Quận 1", "phở", 5.0),
            venue("Quận 1", "phở", 3.9),
            venue("Quận 1", "phở", 4.0),
        ];
        let matched: Vec<f64> = venues
            .iter()
            .filter(|v| c.matches(v))
            .map(|v| v.reviews_average)
            .collect();
        assert_eq!(matched, vec![5.0, 4.0]);
    }

    #[test]
    fn test_district_is_case_sensitive() {
        let c = VenueCriteria::any().with_district("Quận 1");
        assert!(c.matches(&venue("Quận 1", "phở", 4.0)));
        assert!(!c.matches(&venue("quận 1", "phở", 4.0)));
    }

    #[test]
    fn test_constraints_are_conjunctive() {
        let c = VenueCriteria::any()
            .with_district("Quận 3")
            .with_food_type("cơm tấm")
            .with_min_rating(4.2);

        assert!(c.matches(&venue("Quận 3", "cơm tấm", 4.2)));
        assert!(!c.matches(&venue("Quận 3", "cơm tấm", 4.1)));
        assert!(!c.matches(&venue("Quận 3", "phở", 4.8)));
        assert!(!c.matches(&venue("Quận 10", "cơm tấm", 4.8)));
    }
}
