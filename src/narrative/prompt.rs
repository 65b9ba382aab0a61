//! Prompt assembly for the narrative backend
//!
//! Prompts are built by pure functions over typed requests, so wording stays
//! testable without touching the network client. The templates match the
//! production prompts word for word; tests pin them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TravelEaseError;
use crate::models::TravelCategory;

/// Inputs for a curated itinerary narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    /// Where the trip goes; any country, city or region
    pub destination: String,
    /// Trip length in days
    pub days: u32,
    /// Trip budget in USD, covering all travelers
    pub budget_usd: f64,
    /// Number of travelers the budget covers
    pub travelers: u32,
    /// Travel mood the itinerary should lean into ("Relaxation & Wellness", ...)
    pub profile: String,
    /// Travel style the itinerary is curated for
    pub category: TravelCategory,
}

impl ItineraryRequest {
    /// Check that the request is well-formed
    pub fn validate(&self) -> crate::Result<()> {
        if self.destination.trim().is_empty() {
            return Err(TravelEaseError::validation("destination is required"));
        }
        if self.days == 0 {
            return Err(TravelEaseError::validation(
                "itinerary length must be at least one day",
            ));
        }
        if self.travelers == 0 {
            return Err(TravelEaseError::validation(
                "at least one traveler is required",
            ));
        }
        if !self.budget_usd.is_finite() || self.budget_usd < 0.0 {
            return Err(TravelEaseError::validation(
                "budget must be a non-negative amount",
            ));
        }
        Ok(())
    }
}

/// Inputs for a weather outlook narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRequest {
    /// Place the outlook covers
    pub location: String,
    /// Number of days the outlook covers
    pub days: u32,
    /// First day of the outlook
    pub start_date: NaiveDate,
}

impl WeatherRequest {
    /// Check that the request is well-formed
    pub fn validate(&self) -> crate::Result<()> {
        if self.location.trim().is_empty() {
            return Err(TravelEaseError::validation("location is required"));
        }
        if self.days == 0 {
            return Err(TravelEaseError::validation(
                "outlook must cover at least one day",
            ));
        }
        Ok(())
    }
}

/// Build the itinerary prompt
#[must_use]
pub fn build_itinerary_prompt(request: &ItineraryRequest) -> String {
    format!(
        "Curate an {} itinerary for {} for {} days with a budget of ${:.0} for {} travelers. \
         Curate this itinerary for a {} traveler.",
        request.profile,
        request.destination,
        request.days,
        request.budget_usd,
        request.travelers,
        request.category,
    )
}

/// Build the weather outlook prompt
#[must_use]
pub fn build_weather_prompt(request: &WeatherRequest) -> String {
    format!(
        "Provide a detailed weather forecast for {} for the next {} days starting from {}. \
         Include temperature highs and lows, precipitation chances, and any significant \
         weather events.",
        request.location,
        request.days,
        request.start_date.format("%Y-%m-%d"),
    )
}
