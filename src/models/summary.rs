//! Assembled trip summaries and the downloadable plain-text report

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::booking::{CostBreakdown, FlightClass, HotelTier, TripPlan};
use crate::models::destination::{DestinationRecord, TravelCategory};

/// Everything a confirmed plan needs in one serializable record: the
/// traveler's choices, the computed costs and the catalog metadata of the
/// chosen destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Destination name
    pub destination: String,
    /// Departure date
    pub departure_date: NaiveDate,
    /// Planned stay length in days
    pub duration_days: u32,
    /// Number of travelers
    pub travelers: u32,
    /// Travel style of the trip
    pub category: TravelCategory,
    /// Booked flight cabin
    pub flight_class: FlightClass,
    /// Booked hotel tier
    pub hotel_tier: HotelTier,
    /// Total package cost in USD
    pub total_cost: f64,
    /// Per-person share in USD
    pub cost_per_person: f64,
    /// Catalog rating of the destination
    pub rating: f32,
    /// Catalog-recommended stay length in days
    pub recommended_days: u32,
    /// Highlight attractions of the destination
    pub highlights: String,
}

impl TripSummary {
    /// Assemble a summary from the chosen record, the plan and its costs
    #[must_use]
    pub fn build(record: &DestinationRecord, plan: &TripPlan, costs: &CostBreakdown) -> Self {
        Self {
            destination: record.name.clone(),
            departure_date: plan.departure_date,
            duration_days: plan.duration_days,
            travelers: plan.booking.travelers,
            category: plan.category,
            flight_class: plan.booking.flight_class,
            hotel_tier: plan.booking.hotel_tier,
            total_cost: costs.total_cost,
            cost_per_person: costs.cost_per_person,
            rating: record.rating,
            recommended_days: record.days,
            highlights: record.highlights.clone(),
        }
    }

    /// Render the line-oriented report offered for download
    #[must_use]
    pub fn render_report(&self) -> String {
        let mut lines = Vec::new();
        lines.push("TravelEase Trip Summary".to_string());
        lines.push("======================".to_string());
        lines.push(format!("Destination: {}", self.destination));
        lines.push(format!("Departure: {}", self.departure_date));
        lines.push(format!("Duration: {} days", self.duration_days));
        lines.push(format!("Travelers: {}", self.travelers));
        lines.push(format!("Flight Class: {}", self.flight_class));
        lines.push(format!("Hotel Rating: {}", self.hotel_tier));
        lines.push(format!("Total Cost: ${:.2}", self.total_cost));
        lines.push(format!("Cost Per Person: ${:.2}", self.cost_per_person));
        lines.push(format!("Highlights: {}", self.highlights));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingSelection;

    fn paris_summary() -> TripSummary {
        let record = DestinationRecord::new(
            "Paris, France",
            1800.0,
            4.8,
            7,
            TravelCategory::Cultural,
            "Eiffel Tower, Louvre Museum, Seine River",
        );
        let plan = TripPlan {
            booking: BookingSelection::new(
                "Paris, France",
                FlightClass::Business,
                HotelTier::FiveStar,
                2,
            ),
            departure_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            duration_days: 7,
            category: TravelCategory::Cultural,
        };
        let costs = CostBreakdown {
            total_cost: 9720.0,
            cost_per_person: 4860.0,
        };
        TripSummary::build(&record, &plan, &costs)
    }

    #[test]
    fn test_build_carries_catalog_metadata() {
        let summary = paris_summary();
        assert_eq!(summary.destination, "Paris, France");
        assert_eq!(summary.recommended_days, 7);
        assert_eq!(summary.rating, 4.8);
        assert_eq!(summary.travelers, 2);
    }

    #[test]
    fn test_report_layout() {
        let report = paris_summary().render_report();
        let expected = "TravelEase Trip Summary\n\
                        ======================\n\
                        Destination: Paris, France\n\
                        Departure: 2026-09-15\n\
                        Duration: 7 days\n\
                        Travelers: 2\n\
                        Flight Class: Business\n\
                        Hotel Rating: 5-Star\n\
                        Total Cost: $9720.00\n\
                        Cost Per Person: $4860.00\n\
                        Highlights: Eiffel Tower, Louvre Museum, Seine River";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = paris_summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["destination"], "Paris, France");
        assert_eq!(json["departure_date"], "2026-09-15");
        assert_eq!(json["flight_class"], "Business");
        assert_eq!(json["total_cost"], 9720.0);
    }
}
