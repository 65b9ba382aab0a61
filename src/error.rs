//! Error types and handling for the `TravelEase` application

use thiserror::Error;

/// Main error type for the `TravelEase` application
#[derive(Error, Debug)]
pub enum TravelEaseError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Cost estimation errors
    #[error("Pricing error: {message}")]
    Pricing { message: String },

    /// Failures of the narrative backend
    #[error("External service error: {message}")]
    ExternalService { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelEaseError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new pricing error
    pub fn pricing<S: Into<String>>(message: S) -> Self {
        Self::Pricing {
            message: message.into(),
        }
    }

    /// Create a new external service error
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        Self::ExternalService {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelEaseError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelEaseError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelEaseError::Pricing { message } => {
                format!("Unable to price this trip: {message}")
            }
            TravelEaseError::ExternalService { .. } => {
                "The travel assistant is unavailable right now. Please try again shortly."
                    .to_string()
            }
            TravelEaseError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
