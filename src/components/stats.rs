//! Dataset statistics component.

use leptos::*;

use crate::state::UiState;

/// Record count and "last updated" cards above the table.
///
/// The timestamp is the client clock at render time, not anything the
/// backend reports.
#[component]
pub fn StatsBar(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <div class="stats">
            <div class="stat-card">
                <span class="stat-value" id="totalBooks">
                    {move || state.get().total_books()}
                </span>
                <span class="stat-label">"Total Books"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value" id="lastUpdated">
                    {move || state.get().last_updated.unwrap_or_else(|| "--".to_string())}
                </span>
                <span class="stat-label">"Last Updated"</span>
            </div>
        </div>
    }
}
