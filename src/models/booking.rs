//! Booking choices and cost breakdowns

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TravelEaseError;
use crate::models::destination::TravelCategory;

/// Strip case, spaces, hyphens and underscores so CLI and config spellings
/// like "premium economy" or "5-star" all land on the same key
fn normalized(input: &str) -> String {
    input.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Flight cabin booked for the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightClass {
    Economy,
    PremiumEconomy,
    Business,
    FirstClass,
}

impl FlightClass {
    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FlightClass::Economy => "Economy",
            FlightClass::PremiumEconomy => "Premium Economy",
            FlightClass::Business => "Business",
            FlightClass::FirstClass => "First Class",
        }
    }
}

impl fmt::Display for FlightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlightClass {
    type Err = TravelEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalized(s).as_str() {
            "economy" => Ok(FlightClass::Economy),
            "premiumeconomy" => Ok(FlightClass::PremiumEconomy),
            "business" => Ok(FlightClass::Business),
            "firstclass" => Ok(FlightClass::FirstClass),
            other => Err(TravelEaseError::validation(format!(
                "unknown flight class '{other}'"
            ))),
        }
    }
}

/// Hotel tier booked for the trip
///
/// Every tier the booking form offers is representable; only a subset has a
/// published rate (see the pricing table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelTier {
    OneStar,
    TwoStar,
    ThreeStar,
    FourStar,
    FiveStar,
    LuxuryResort,
    Customized,
}

impl HotelTier {
    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            HotelTier::OneStar => "1-Star",
            HotelTier::TwoStar => "2-Star",
            HotelTier::ThreeStar => "3-Star",
            HotelTier::FourStar => "4-Star",
            HotelTier::FiveStar => "5-Star",
            HotelTier::LuxuryResort => "Luxury Resort",
            HotelTier::Customized => "Customized",
        }
    }
}

impl fmt::Display for HotelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HotelTier {
    type Err = TravelEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalized(s).as_str() {
            "1star" | "onestar" => Ok(HotelTier::OneStar),
            "2star" | "twostar" => Ok(HotelTier::TwoStar),
            "3star" | "threestar" => Ok(HotelTier::ThreeStar),
            "4star" | "fourstar" => Ok(HotelTier::FourStar),
            "5star" | "fivestar" => Ok(HotelTier::FiveStar),
            "luxuryresort" => Ok(HotelTier::LuxuryResort),
            "customized" => Ok(HotelTier::Customized),
            other => Err(TravelEaseError::validation(format!(
                "unknown hotel tier '{other}'"
            ))),
        }
    }
}

/// The choices a traveler makes on the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSelection {
    /// Catalog destination, referenced by name
    pub destination: String,
    /// Flight cabin
    pub flight_class: FlightClass,
    /// Hotel tier
    pub hotel_tier: HotelTier,
    /// Number of travelers sharing the booking
    pub travelers: u32,
}

impl BookingSelection {
    /// Create a new booking selection
    #[must_use]
    pub fn new(
        destination: &str,
        flight_class: FlightClass,
        hotel_tier: HotelTier,
        travelers: u32,
    ) -> Self {
        Self {
            destination: destination.to_string(),
            flight_class,
            hotel_tier,
            travelers,
        }
    }

    /// Check that the selection is well-formed
    pub fn validate(&self) -> crate::Result<()> {
        if self.destination.trim().is_empty() {
            return Err(TravelEaseError::validation("destination name is required"));
        }
        if self.travelers == 0 {
            return Err(TravelEaseError::validation(
                "at least one traveler is required",
            ));
        }
        Ok(())
    }
}

/// A full trip plan: the booking choices plus schedule and travel style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Booking choices
    pub booking: BookingSelection,
    /// Departure date
    pub departure_date: NaiveDate,
    /// Planned stay length in days
    pub duration_days: u32,
    /// Travel style of the trip
    pub category: TravelCategory,
}

impl TripPlan {
    /// Check that the plan is well-formed
    pub fn validate(&self) -> crate::Result<()> {
        self.booking.validate()?;
        if self.duration_days == 0 {
            return Err(TravelEaseError::validation(
                "trip duration must be at least one day",
            ));
        }
        Ok(())
    }
}

/// Result of a cost estimation, rounded to whole cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total package cost in USD
    pub total_cost: f64,
    /// Total cost divided by the traveler count, in USD
    pub cost_per_person: f64,
}

impl CostBreakdown {
    /// Format the total as a dollar amount
    #[must_use]
    pub fn format_total(&self) -> String {
        format!("${:.2}", self.total_cost)
    }

    /// Format the per-person share as a dollar amount
    #[must_use]
    pub fn format_per_person(&self) -> String {
        format!("${:.2}", self.cost_per_person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_class_parsing() {
        assert_eq!(
            "premium economy".parse::<FlightClass>().ok(),
            Some(FlightClass::PremiumEconomy)
        );
        assert_eq!(
            "Premium-Economy".parse::<FlightClass>().ok(),
            Some(FlightClass::PremiumEconomy)
        );
        assert_eq!(
            "FIRST_CLASS".parse::<FlightClass>().ok(),
            Some(FlightClass::FirstClass)
        );
        assert!("coach".parse::<FlightClass>().is_err());
    }

    #[test]
    fn test_hotel_tier_parsing() {
        assert_eq!("3-star".parse::<HotelTier>().ok(), Some(HotelTier::ThreeStar));
        assert_eq!("5 Star".parse::<HotelTier>().ok(), Some(HotelTier::FiveStar));
        assert_eq!(
            "luxury resort".parse::<HotelTier>().ok(),
            Some(HotelTier::LuxuryResort)
        );
        assert_eq!(
            "one-star".parse::<HotelTier>().ok(),
            Some(HotelTier::OneStar)
        );
        assert!("6-star".parse::<HotelTier>().is_err());
    }

    #[test]
    fn test_labels_parse_back() {
        let tiers = [
            HotelTier::OneStar,
            HotelTier::TwoStar,
            HotelTier::ThreeStar,
            HotelTier::FourStar,
            HotelTier::FiveStar,
            HotelTier::LuxuryResort,
            HotelTier::Customized,
        ];
        for tier in tiers {
            assert_eq!(tier.label().parse::<HotelTier>().ok(), Some(tier));
        }
    }

    #[test]
    fn test_selection_validation() {
        let selection =
            BookingSelection::new("Paris, France", FlightClass::Business, HotelTier::FiveStar, 2);
        assert!(selection.validate().is_ok());

        let no_destination =
            BookingSelection::new("  ", FlightClass::Economy, HotelTier::ThreeStar, 2);
        assert!(no_destination.validate().is_err());

        let no_travelers =
            BookingSelection::new("Paris, France", FlightClass::Economy, HotelTier::ThreeStar, 0);
        assert!(no_travelers.validate().is_err());
    }

    #[test]
    fn test_cost_formatting() {
        let costs = CostBreakdown {
            total_cost: 9720.0,
            cost_per_person: 4860.0,
        };
        assert_eq!(costs.format_total(), "$9720.00");
        assert_eq!(costs.format_per_person(), "$4860.00");
    }
}
