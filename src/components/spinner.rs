//! Loading spinner component.

use leptos::*;

use crate::state::UiState;

/// Busy indicator shown while a scrape is in flight.
#[component]
pub fn LoadingSpinner(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <div
            id="loadingSpinner"
            class="spinner"
            class:hidden=move || !state.get().loading
        ></div>
    }
}
