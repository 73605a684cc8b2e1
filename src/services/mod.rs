//! Backend and browser services.
//!
//! This module provides services for everything outside the page:
//!
//! # Services
//!
//! - [`api`] - HTTP calls to the scraping backend
//! - [`download`] - browser-side file save for the CSV export

pub mod api;
pub mod download;

pub use api::*;
pub use download::*;
