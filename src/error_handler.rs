//! Centralized error classification

use crate::api::error::ApiError;
use log::Level;

/// Centralized error handler for all API operations
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> Level {
        match (error, error.status()) {
            // Rejected by business rules or validation; the user can fix it
            (_, Some(400..=499)) => Level::Warn,

            (_, Some(500..=599)) => Level::Error,

            // Backend unreachable or answered garbage
            (ApiError::Reqwest(_), _) | (ApiError::Decode(_), _) => Level::Error,

            _ => Level::Warn,
        }
    }
}
