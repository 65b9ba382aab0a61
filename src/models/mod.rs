//! Data models for the TravelEase application
//!
//! This module contains the core domain models organized by concern:
//! - Destination: catalog records, filter criteria and catalog statistics
//! - Booking: cabin and hotel choices, traveler counts and cost breakdowns
//! - Summary: assembled trip summaries and the plain-text report

pub mod booking;
pub mod destination;
pub mod summary;

// Re-export all public types for convenient access
pub use booking::{BookingSelection, CostBreakdown, FlightClass, HotelTier, TripPlan};
pub use destination::{CatalogStats, DestinationRecord, FilterCriteria, TravelCategory};
pub use summary::TripSummary;
