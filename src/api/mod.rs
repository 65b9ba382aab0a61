//! JSON API over the trip planning operations
//!
//! Thin handlers only: every route resolves inputs, calls into the catalog,
//! estimator or narrative service, and maps errors onto HTTP statuses.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{DestinationCatalog, NO_MATCH_ADVISORY};
use crate::config::TravelEaseConfig;
use crate::error::TravelEaseError;
use crate::models::{
    BookingSelection, CatalogStats, CostBreakdown, DestinationRecord, FilterCriteria,
    TravelCategory, TripPlan, TripSummary,
};
use crate::narrative::{ItineraryRequest, NarrativeService, WeatherRequest};
use crate::pricing::{PricingTable, TripCostEstimator};

/// Shared state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DestinationCatalog>,
    pub estimator: Arc<TripCostEstimator>,
    /// Present only when a narrative API key is configured
    pub narratives: Option<Arc<NarrativeService>>,
}

impl AppState {
    /// Assemble state from the application configuration
    pub fn new(config: &TravelEaseConfig) -> crate::Result<Self> {
        let table = PricingTable::with_overrides(
            &config.pricing.flight_multipliers,
            &config.pricing.hotel_multipliers,
        )?;
        let narratives = match &config.narrative.api_key {
            Some(_) => Some(Arc::new(NarrativeService::gemini(&config.narrative)?)),
            None => None,
        };
        Ok(Self {
            catalog: Arc::new(DestinationCatalog::built_in()),
            estimator: Arc::new(TripCostEstimator::new(table)),
            narratives,
        })
    }

    /// Assemble state from explicit parts
    #[must_use]
    pub fn from_parts(
        catalog: DestinationCatalog,
        estimator: TripCostEstimator,
        narratives: Option<NarrativeService>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            estimator: Arc::new(estimator),
            narratives: narratives.map(Arc::new),
        }
    }
}

/// Error shape returned to API clients
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<TravelEaseError> for ApiError {
    fn from(err: TravelEaseError) -> Self {
        let status = match &err {
            TravelEaseError::Validation { .. } | TravelEaseError::Pricing { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TravelEaseError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
            TravelEaseError::Config { .. } | TravelEaseError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Request failed ({}): {}", self.status, self.message);
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
struct FilterQuery {
    category: String,
    max_budget: f64,
    max_duration: u32,
}

#[derive(Serialize, Deserialize)]
pub struct FilterResponse {
    pub destinations: Vec<DestinationRecord>,
    /// Set when nothing matched; the search itself still succeeded
    pub advisory: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/destinations/search", get(search_destinations))
        .route("/destinations/stats", get(catalog_stats))
        .route("/destinations/export.csv", get(export_catalog_csv))
        .route("/bookings/estimate", post(estimate_booking))
        .route("/trips/summary", post(trip_summary))
        .route("/trips/report", post(trip_report))
        .route("/narratives/itinerary", post(itinerary_narrative))
        .route("/narratives/weather", post(weather_narrative))
        .with_state(state)
}

fn resolve<'a>(state: &'a AppState, name: &str) -> Result<&'a DestinationRecord, ApiError> {
    state
        .catalog
        .find(name)
        .ok_or_else(|| ApiError::not_found(format!("Destination '{name}' is not in the catalog")))
}

fn narratives(state: &AppState) -> Result<&NarrativeService, ApiError> {
    state
        .narratives
        .as_deref()
        .ok_or_else(|| {
            ApiError::from(TravelEaseError::config(
                "No narrative API key configured. Set GEMINI_API_KEY to enable narratives.",
            ))
        })
}

async fn list_destinations(State(state): State<AppState>) -> Json<Vec<DestinationRecord>> {
    Json(state.catalog.records().to_vec())
}

async fn search_destinations(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<FilterResponse>, ApiError> {
    let category: TravelCategory = query.category.parse()?;
    let criteria = FilterCriteria::new(category, query.max_budget, query.max_duration);
    criteria.validate()?;

    let destinations: Vec<DestinationRecord> = state
        .catalog
        .filter(&criteria)
        .into_iter()
        .cloned()
        .collect();
    debug!(
        "Search for {} under ${} and {} days matched {} destinations",
        category,
        criteria.max_budget,
        criteria.max_duration,
        destinations.len()
    );

    let advisory = destinations
        .is_empty()
        .then(|| NO_MATCH_ADVISORY.to_string());
    Ok(Json(FilterResponse {
        destinations,
        advisory,
    }))
}

async fn catalog_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

async fn export_catalog_csv(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv")],
        state.catalog.export_csv(),
    )
}

async fn estimate_booking(
    State(state): State<AppState>,
    Json(selection): Json<BookingSelection>,
) -> Result<Json<CostBreakdown>, ApiError> {
    selection.validate()?;
    let record = resolve(&state, &selection.destination)?;
    let costs = state.estimator.compute(
        record,
        selection.flight_class,
        selection.hotel_tier,
        selection.travelers,
    )?;
    Ok(Json(costs))
}

async fn trip_summary(
    State(state): State<AppState>,
    Json(plan): Json<TripPlan>,
) -> Result<Json<TripSummary>, ApiError> {
    let summary = summarize(&state, &plan)?;
    Ok(Json(summary))
}

async fn trip_report(
    State(state): State<AppState>,
    Json(plan): Json<TripPlan>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = summarize(&state, &plan)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary.render_report(),
    ))
}

fn summarize(state: &AppState, plan: &TripPlan) -> Result<TripSummary, ApiError> {
    plan.validate()?;
    let record = resolve(state, &plan.booking.destination)?;
    let costs = state.estimator.compute(
        record,
        plan.booking.flight_class,
        plan.booking.hotel_tier,
        plan.booking.travelers,
    )?;
    Ok(TripSummary::build(record, plan, &costs))
}

async fn itinerary_narrative(
    State(state): State<AppState>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let narrative = narratives(&state)?.curate_itinerary(&request).await?;
    Ok(Json(NarrativeResponse { narrative }))
}

async fn weather_narrative(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let narrative = narratives(&state)?.weather_outlook(&request).await?;
    Ok(Json(NarrativeResponse { narrative }))
}
