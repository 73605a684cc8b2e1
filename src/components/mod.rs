//! UI Components for the Book Scraper dashboard.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ActionBar`] - Scrape and download buttons with their handlers
//! - [`StatusMessage`] - Transient status banner
//! - [`LoadingSpinner`] - Busy indicator
//! - [`BookTable`] - Scraped records table
//! - [`StatsBar`] - Record count and last-updated stamp

mod controls;
mod footer;
mod hero;
mod spinner;
mod stats;
mod status;
mod table;

pub use controls::*;
pub use footer::*;
pub use hero::*;
pub use spinner::*;
pub use stats::*;
pub use status::*;
pub use table::*;
