//! Status banner component and the helper that drives it.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::STATUS_CLEAR_MS;
use crate::state::UiState;
use crate::types::StatusLevel;

/// Set the status banner.
///
/// A success status arms a one-shot timer that wipes the banner after
/// [`STATUS_CLEAR_MS`]. The timer is not cancelled by later updates: when it
/// fires it clears whatever the banner shows at that moment, even a status
/// that arrived after it was armed.
pub fn show_status(state: RwSignal<UiState>, message: &str, level: StatusLevel) {
    state.update(|s| s.set_status(message, level));

    if level == StatusLevel::Success {
        Timeout::new(STATUS_CLEAR_MS, move || {
            state.update(|s| s.clear_status());
        })
        .forget();
    }
}

/// Transient status banner under the action buttons.
#[component]
pub fn StatusMessage(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <div
            id="status"
            class=move || match state.get().status {
                Some(line) => format!("status-message {}", line.level.css_class()),
                None => "status-message".to_string(),
            }
        >
            {move || state.get().status.map(|line| line.message).unwrap_or_default()}
        </div>
    }
}
