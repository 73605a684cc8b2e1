//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"📚 Book Scraper Dashboard"</h1>
            <p class="subtitle">
                "Scrape book listings from the backend and export them as CSV."
            </p>
        </div>
    }
}
