//! Book Scraper Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that triggers a backend scrape of book listings,
//! renders the resulting dataset into a table, and saves the CSV export.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── ActionBar (scrape / download buttons)                  │
//! │  ├── StatusMessage + LoadingSpinner                         │
//! │  └── StatsBar + BookTable                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (BookRecord, API responses, errors)
//! - [`state`] - The explicit [`UiState`] every handler mutates
//! - [`components`] - UI components (ActionBar, BookTable, etc.)
//! - [`services`] - Backend communication and browser file save

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Records
    BookRecord,
    // API
    ScrapeResponse, DataResponse,
    // Status banner
    StatusLine, StatusLevel,
    // Errors
    AppError, AppResult,
};

// State
pub use state::UiState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Book Scraper - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let state = create_rw_signal(UiState::default());

    // Load any previously scraped dataset ONCE at startup. Failures stay in
    // the console; unlike the scrape flow, no banner is shown for them.
    spawn_local(async move {
        match fetch_existing_data().await {
            Ok(books) if !books.is_empty() => {
                log::info!("📚 Loaded {} stored books", books.len());
                state.update(|s| s.show_dataset(books, crate::state::local_timestamp()));
            }
            Ok(_) => {
                log::info!("No stored data yet");
            }
            Err(e) => {
                log::error!("Load data error: {}", e);
            }
        }
    });

    view! {
        <div class="container">
            <Hero/>
            <ActionBar state=state/>
            <StatusMessage state=state/>
            <LoadingSpinner state=state/>
            <StatsBar state=state/>
            <BookTable state=state/>
        </div>

        <Footer/>
    }
}
