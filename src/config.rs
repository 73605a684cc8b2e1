//! Application configuration.
//!
//! Centralized configuration for the Book Scraper frontend.
//! The frontend is served from the same origin as the backend,
//! so the API is reached through a relative base path.

/// Backend API base path.
///
/// All endpoints (`/scrape`, `/data`, `/download`) live under it.
pub const API_BASE_URL: &str = "/api";

/// File name used when saving the CSV export in the browser.
pub const CSV_FILE_NAME: &str = "scraped_data.csv";

/// How long a success status stays on screen before auto-clearing (ms).
pub const STATUS_CLEAR_MS: u32 = 5_000;

/// Status shown when the scrape request never reaches the backend.
pub const CONNECT_ERROR_MESSAGE: &str =
    "❌ Error connecting to backend. Ensure the server is running!";

/// Status shown when the backend refuses to serve the CSV export.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "❌ Failed to download file";

/// Status shown when the download request or the browser-side save fails.
pub const DOWNLOAD_ERROR_MESSAGE: &str = "❌ Error downloading file";
