//! Travel narrative generation
//!
//! A thin facade over a pluggable text-generation backend. The service owns
//! prompt assembly and hands the finished prompt to the backend; generated
//! text is returned to the caller unmodified.

pub mod gemini;
pub mod prompt;

// Re-export the working set
pub use gemini::GeminiClient;
pub use prompt::{ItineraryRequest, WeatherRequest, build_itinerary_prompt, build_weather_prompt};

use async_trait::async_trait;
use tracing::info;

use crate::config::NarrativeConfig;

/// Backend that turns a prompt into narrative text
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generate narrative text for a prompt
    async fn generate(&self, prompt: &str) -> crate::Result<String>;
}

/// Narrative operations offered to the presentation layers
pub struct NarrativeService {
    generator: Box<dyn NarrativeGenerator>,
}

impl NarrativeService {
    /// Create a service over an arbitrary backend
    #[must_use]
    pub fn new(generator: Box<dyn NarrativeGenerator>) -> Self {
        Self { generator }
    }

    /// Create a service backed by Gemini
    pub fn gemini(config: &NarrativeConfig) -> crate::Result<Self> {
        Ok(Self::new(Box::new(GeminiClient::new(config)?)))
    }

    /// Curate an itinerary narrative
    pub async fn curate_itinerary(&self, request: &ItineraryRequest) -> crate::Result<String> {
        request.validate()?;
        let prompt = build_itinerary_prompt(request);
        info!(
            "Generating itinerary narrative for {} ({} days)",
            request.destination, request.days
        );
        self.generator.generate(&prompt).await
    }

    /// Generate a weather outlook narrative
    pub async fn weather_outlook(&self, request: &WeatherRequest) -> crate::Result<String> {
        request.validate()?;
        let prompt = build_weather_prompt(request);
        info!(
            "Generating weather outlook for {} from {}",
            request.location, request.start_date
        );
        self.generator.generate(&prompt).await
    }
}
