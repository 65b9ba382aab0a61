//! `TravelEase` - Trip planning with destination discovery and cost estimates
//!
//! This library provides the core functionality for browsing the destination
//! catalog, estimating trip costs and generating AI travel narratives.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod narrative;
pub mod pricing;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use catalog::{DestinationCatalog, NO_MATCH_ADVISORY};
pub use config::TravelEaseConfig;
pub use error::TravelEaseError;
pub use models::{
    BookingSelection, CatalogStats, CostBreakdown, DestinationRecord, FilterCriteria, FlightClass,
    HotelTier, TravelCategory, TripPlan, TripSummary,
};
pub use narrative::{GeminiClient, ItineraryRequest, NarrativeService, WeatherRequest};
pub use pricing::{PricingTable, TripCostEstimator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelEaseError>;
