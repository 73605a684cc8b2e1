//! Action buttons: trigger a scrape, download the CSV export.
//!
//! Each click spawns one async task on the page's event loop. The scrape
//! button disables itself for the duration of its own request; the download
//! button has no such guard, so overlapping downloads are possible. When two
//! tasks overlap, the last response to resolve wins the visible state.

use leptos::*;

use crate::components::status::show_status;
use crate::config::{
    CONNECT_ERROR_MESSAGE, CSV_FILE_NAME, DOWNLOAD_ERROR_MESSAGE, DOWNLOAD_FAILED_MESSAGE,
};
use crate::services::{fetch_csv_export, save_file, trigger_scrape};
use crate::state::{local_timestamp, UiState};
use crate::types::StatusLevel;

#[component]
pub fn ActionBar(state: RwSignal<UiState>) -> impl IntoView {
    let on_scrape = move |_| {
        spawn_local(async move {
            state.update(|s| s.begin_scrape());
            show_status(state, "Scraping in progress...", StatusLevel::Loading);

            match trigger_scrape().await {
                Ok(response) if response.is_success() => {
                    log::info!("✅ Scrape finished: {}", response.message);
                    show_status(
                        state,
                        &format!("✅ {}", response.message),
                        StatusLevel::Success,
                    );
                    state.update(|s| s.show_dataset(response.data, local_timestamp()));
                }
                Ok(response) => {
                    // Domain failure: the banner changes, the table does not.
                    log::warn!("Scrape rejected by backend: {}", response.message);
                    show_status(
                        state,
                        &format!("❌ {}", response.message),
                        StatusLevel::Error,
                    );
                }
                Err(e) => {
                    log::error!("Scrape error: {}", e);
                    show_status(state, CONNECT_ERROR_MESSAGE, StatusLevel::Error);
                }
            }

            state.update(|s| s.finish_scrape());
        });
    };

    let on_download = move |_| {
        spawn_local(async move {
            match fetch_csv_export().await {
                Ok(Some(bytes)) => match save_file(&bytes, CSV_FILE_NAME) {
                    Ok(()) => {
                        log::info!("⬇️ CSV saved as {}", CSV_FILE_NAME);
                        show_status(
                            state,
                            "✅ CSV downloaded successfully!",
                            StatusLevel::Success,
                        );
                    }
                    Err(e) => {
                        log::error!("Download error: {}", e);
                        show_status(state, DOWNLOAD_ERROR_MESSAGE, StatusLevel::Error);
                    }
                },
                Ok(None) => {
                    show_status(state, DOWNLOAD_FAILED_MESSAGE, StatusLevel::Error);
                }
                Err(e) => {
                    log::error!("Download error: {}", e);
                    show_status(state, DOWNLOAD_ERROR_MESSAGE, StatusLevel::Error);
                }
            }
        });
    };

    view! {
        <div class="actions">
            <button
                class="btn btn-primary"
                id="scrapeBtn"
                on:click=on_scrape
                disabled=move || !state.get().scrape_enabled
            >
                "🔍 Scrape Books"
            </button>
            <button
                class="btn btn-secondary"
                id="downloadBtn"
                on:click=on_download
                disabled=move || !state.get().download_enabled
            >
                "⬇️ Download CSV"
            </button>
        </div>
    }
}
