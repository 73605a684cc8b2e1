//! HTTP client for the scraping backend.
//!
//! Three endpoints under [`API_BASE_URL`]: `/scrape` triggers a fresh scrape,
//! `/data` returns whatever is stored, `/download` streams the CSV export.
//! Every function makes exactly one request; retrying is the user's job.

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::types::{AppError, AppResult, BookRecord, DataResponse, ScrapeResponse};

/// Trigger a scrape run on the backend and return its outcome.
///
/// A well-formed response with `status: "error"` is NOT an `Err` here; the
/// caller decides how to surface domain failures.
pub async fn trigger_scrape() -> AppResult<ScrapeResponse> {
    let url = format!("{}/scrape", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    response
        .json::<ScrapeResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Fetch the dataset stored from a previous scrape, if any.
pub async fn fetch_existing_data() -> AppResult<Vec<BookRecord>> {
    let url = format!("{}/data", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let data = response
        .json::<DataResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;

    Ok(data.data)
}

/// Fetch the CSV export as raw bytes.
///
/// `Ok(None)` means the backend refused (non-OK status, e.g. nothing scraped
/// yet) — distinct from a transport failure.
pub async fn fetch_csv_export() -> AppResult<Option<Vec<u8>>> {
    let url = format!("{}/download", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Ok(None);
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    Ok(Some(bytes))
}
