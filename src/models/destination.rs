//! Destination records, filter criteria and catalog statistics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TravelEaseError;

/// Travel style a destination is curated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelCategory {
    Cultural,
    Relaxation,
    Business,
    Romantic,
    Adventure,
    Family,
    Couple,
}

impl TravelCategory {
    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TravelCategory::Cultural => "Cultural",
            TravelCategory::Relaxation => "Relaxation",
            TravelCategory::Business => "Business",
            TravelCategory::Romantic => "Romantic",
            TravelCategory::Adventure => "Adventure",
            TravelCategory::Family => "Family",
            TravelCategory::Couple => "Couple",
        }
    }
}

impl fmt::Display for TravelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TravelCategory {
    type Err = TravelEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cultural" => Ok(TravelCategory::Cultural),
            "relaxation" => Ok(TravelCategory::Relaxation),
            "business" => Ok(TravelCategory::Business),
            "romantic" => Ok(TravelCategory::Romantic),
            "adventure" => Ok(TravelCategory::Adventure),
            "family" => Ok(TravelCategory::Family),
            "couple" => Ok(TravelCategory::Couple),
            other => Err(TravelEaseError::validation(format!(
                "unknown travel category '{other}'"
            ))),
        }
    }
}

/// One destination the agency offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Display name ("City, Country")
    pub name: String,
    /// Base package price in USD for the two-person reference booking
    pub price: f64,
    /// Traveler rating on a 0.0 to 5.0 scale
    pub rating: f32,
    /// Recommended stay length in days
    pub days: u32,
    /// Travel style the package is curated for
    pub category: TravelCategory,
    /// Comma-separated highlight attractions
    pub highlights: String,
}

impl DestinationRecord {
    /// Create a new destination record
    #[must_use]
    pub fn new(
        name: &str,
        price: f64,
        rating: f32,
        days: u32,
        category: TravelCategory,
        highlights: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            price,
            rating,
            days,
            category,
            highlights: highlights.to_string(),
        }
    }
}

/// Preferences a catalog search is matched against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Desired travel style
    pub category: TravelCategory,
    /// Upper bound on the base package price in USD
    pub max_budget: f64,
    /// Upper bound on the recommended stay length in days
    pub max_duration: u32,
}

impl FilterCriteria {
    /// Create new filter criteria
    #[must_use]
    pub fn new(category: TravelCategory, max_budget: f64, max_duration: u32) -> Self {
        Self {
            category,
            max_budget,
            max_duration,
        }
    }

    /// Check that the criteria are well-formed
    pub fn validate(&self) -> crate::Result<()> {
        if !self.max_budget.is_finite() || self.max_budget < 0.0 {
            return Err(TravelEaseError::validation(
                "maximum budget must be a non-negative amount",
            ));
        }
        if self.max_duration == 0 {
            return Err(TravelEaseError::validation(
                "maximum duration must be at least one day",
            ));
        }
        Ok(())
    }

    /// Whether a record satisfies every criterion
    #[must_use]
    pub fn matches(&self, record: &DestinationRecord) -> bool {
        record.category == self.category
            && record.price <= self.max_budget
            && record.days <= self.max_duration
    }
}

/// Aggregate numbers shown alongside the catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of destinations on offer
    pub total_destinations: usize,
    /// Mean base package price in USD
    pub average_price: f64,
    /// Mean traveler rating
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DestinationRecord {
        DestinationRecord::new(
            "Rome, Italy",
            1500.0,
            4.8,
            6,
            TravelCategory::Cultural,
            "Colosseum, Vatican City, Roman Forum",
        )
    }

    #[test]
    fn test_criteria_match_all_bounds() {
        let record = sample_record();
        let criteria = FilterCriteria::new(TravelCategory::Cultural, 1500.0, 6);
        assert!(criteria.matches(&record));
    }

    #[test]
    fn test_criteria_reject_each_dimension() {
        let record = sample_record();

        let wrong_category = FilterCriteria::new(TravelCategory::Adventure, 5000.0, 30);
        assert!(!wrong_category.matches(&record));

        let too_expensive = FilterCriteria::new(TravelCategory::Cultural, 1499.99, 30);
        assert!(!too_expensive.matches(&record));

        let too_long = FilterCriteria::new(TravelCategory::Cultural, 5000.0, 5);
        assert!(!too_long.matches(&record));
    }

    #[test]
    fn test_criteria_validation() {
        assert!(
            FilterCriteria::new(TravelCategory::Cultural, 0.0, 1)
                .validate()
                .is_ok()
        );
        assert!(
            FilterCriteria::new(TravelCategory::Cultural, -1.0, 7)
                .validate()
                .is_err()
        );
        assert!(
            FilterCriteria::new(TravelCategory::Cultural, 1000.0, 0)
                .validate()
                .is_err()
        );
        assert!(
            FilterCriteria::new(TravelCategory::Cultural, f64::NAN, 7)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "cultural".parse::<TravelCategory>().ok(),
            Some(TravelCategory::Cultural)
        );
        assert_eq!(
            " Adventure ".parse::<TravelCategory>().ok(),
            Some(TravelCategory::Adventure)
        );
        assert!("beach".parse::<TravelCategory>().is_err());
    }

    #[test]
    fn test_category_label_round_trip() {
        let categories = [
            TravelCategory::Cultural,
            TravelCategory::Relaxation,
            TravelCategory::Business,
            TravelCategory::Romantic,
            TravelCategory::Adventure,
            TravelCategory::Family,
            TravelCategory::Couple,
        ];
        for category in categories {
            assert_eq!(category.label().parse::<TravelCategory>().ok(), Some(category));
        }
    }
}
