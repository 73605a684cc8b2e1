//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Record Types** - Scraped book data
//! - **API Types** - Backend response structures
//! - **Status Types** - Status banner severity
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Record Types
// =============================================================================

/// One scraped book as returned by the backend.
///
/// All fields are kept as strings exactly as scraped (the price keeps its
/// currency symbol, the rating is the scraped word, e.g. "Three").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,
    /// Price with currency symbol
    pub price: String,
    /// Availability text
    pub availability: String,
    /// Star rating
    pub rating: String,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the `/api/scrape` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ScrapeResponse {
    /// "success" or "error"
    pub status: String,
    /// Human-readable outcome, displayed to the user
    pub message: String,
    /// Freshly scraped records (absent on error)
    #[serde(default)]
    pub data: Vec<BookRecord>,
}

impl ScrapeResponse {
    /// Whether the backend reported a successful scrape.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Response from the `/api/data` endpoint.
///
/// The backend also sends `status` and `count` fields; only the records
/// matter here.
#[derive(Clone, Debug, Deserialize)]
pub struct DataResponse {
    /// Currently stored records
    #[serde(default)]
    pub data: Vec<BookRecord>,
}

// =============================================================================
// Status Types
// =============================================================================

/// Severity of the status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    /// An action is in progress
    Loading,
    /// Action completed, auto-clears after a delay
    Success,
    /// Action failed
    Error,
}

impl StatusLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Loading => "loading",
            StatusLevel::Success => "success",
            StatusLevel::Error => "error",
        }
    }
}

/// A status banner line: message plus severity.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusLine {
    pub message: String,
    pub level: StatusLevel,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Response body could not be parsed.
    Decode(String),
    /// A browser API call failed (DOM, Blob, object URL).
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_response_deserialization() {
        let json = r#"{
            "status": "success",
            "message": "Scraped 3 books",
            "count": 3,
            "data": [
                {"title": "A", "price": "$1", "availability": "In stock", "rating": "4"},
                {"title": "B", "price": "$2", "availability": "Out", "rating": "3"},
                {"title": "C", "price": "$3", "availability": "In stock", "rating": "5"}
            ]
        }"#;

        let response: ScrapeResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.message, "Scraped 3 books");
        assert_eq!(response.data.len(), 3);
        assert_eq!(response.data[0].title, "A");
        assert_eq!(response.data[2].rating, "5");
    }

    #[test]
    fn test_scrape_error_without_data_field() {
        // Error responses omit the records entirely
        let json = r#"{"status": "error", "message": "Failed to scrape books"}"#;

        let response: ScrapeResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_data_response_ignores_extra_fields() {
        // /api/data wraps the records in status + count metadata
        let json = r#"{
            "status": "success",
            "count": 1,
            "data": [
                {"title": "A Light in the Attic", "price": "£51.77",
                 "availability": "In stock", "rating": "Three"}
            ]
        }"#;

        let response: DataResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].availability, "In stock");
    }

    #[test]
    fn test_data_response_empty() {
        let response: DataResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_status_level_css_classes() {
        assert_eq!(StatusLevel::Loading.css_class(), "loading");
        assert_eq!(StatusLevel::Success.css_class(), "success");
        assert_eq!(StatusLevel::Error.css_class(), "error");
    }
}
