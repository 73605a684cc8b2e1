//! Explicit UI state for the dashboard.
//!
//! The whole page is driven by a single [`UiState`] held in one `RwSignal`:
//! handlers mutate it step by step, components project it reactively. Two
//! concurrent handlers interleave at their await points, so the last response
//! to resolve wins the visible state; nothing here serializes them.

use crate::types::{BookRecord, StatusLine, StatusLevel};

/// Everything the page displays, in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Records currently shown in the table, replaced wholesale per render.
    pub books: Vec<BookRecord>,
    /// Current status banner, if any.
    pub status: Option<StatusLine>,
    /// Whether the loading spinner is visible.
    pub loading: bool,
    /// Whether the scrape trigger accepts clicks.
    pub scrape_enabled: bool,
    /// Whether the CSV download is available. Raised on the first non-empty
    /// dataset and never lowered again.
    pub download_enabled: bool,
    /// Client wall-clock string of the last render, not a server timestamp.
    pub last_updated: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            status: None,
            loading: false,
            scrape_enabled: true,
            download_enabled: false,
            last_updated: None,
        }
    }
}

impl UiState {
    /// A scrape request is about to be issued: lock the trigger, show the
    /// spinner.
    pub fn begin_scrape(&mut self) {
        self.scrape_enabled = false;
        self.loading = true;
    }

    /// The scrape handler is done, whatever the outcome: unlock the trigger,
    /// hide the spinner.
    pub fn finish_scrape(&mut self) {
        self.scrape_enabled = true;
        self.loading = false;
    }

    /// Replace the displayed dataset and stamp the stats.
    ///
    /// A non-empty dataset unlocks the download; an empty one leaves the
    /// flag where it is.
    pub fn show_dataset(&mut self, books: Vec<BookRecord>, now: String) {
        if !books.is_empty() {
            self.download_enabled = true;
        }
        self.books = books;
        self.last_updated = Some(now);
    }

    /// Number of records currently displayed.
    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    /// Set the status banner.
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusLine {
            message: message.into(),
            level,
        });
    }

    /// Clear the status banner, whatever it currently shows.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Client wall-clock timestamp for the "last updated" stat.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            price: "£10.00".to_string(),
            availability: "In stock".to_string(),
            rating: "Three".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert!(state.books.is_empty());
        assert!(state.status.is_none());
        assert!(!state.loading);
        assert!(state.scrape_enabled);
        assert!(!state.download_enabled);
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn test_scrape_locks_and_unlocks_trigger() {
        let mut state = UiState::default();

        state.begin_scrape();
        assert!(!state.scrape_enabled);
        assert!(state.loading);

        state.finish_scrape();
        assert!(state.scrape_enabled);
        assert!(!state.loading);
    }

    #[test]
    fn test_trigger_recovers_after_transport_failure() {
        // disable -> request fails -> error status -> re-enable
        let mut state = UiState::default();
        state.begin_scrape();
        state.set_status(crate::config::CONNECT_ERROR_MESSAGE, StatusLevel::Error);
        state.finish_scrape();

        assert!(state.scrape_enabled);
        assert!(!state.loading);
        // the failed attempt rendered nothing
        assert!(state.books.is_empty());
        assert!(!state.download_enabled);
    }

    #[test]
    fn test_show_dataset_replaces_wholesale() {
        let mut state = UiState::default();
        state.show_dataset(vec![book("A"), book("B"), book("C")], "t1".to_string());
        assert_eq!(state.total_books(), 3);
        assert_eq!(state.books[0].title, "A");
        assert_eq!(state.books[2].title, "C");

        // a later, smaller dataset fully replaces the previous one
        state.show_dataset(vec![book("D")], "t2".to_string());
        assert_eq!(state.total_books(), 1);
        assert_eq!(state.books[0].title, "D");
        assert_eq!(state.last_updated.as_deref(), Some("t2"));
    }

    #[test]
    fn test_empty_dataset_keeps_download_locked() {
        let mut state = UiState::default();
        state.show_dataset(Vec::new(), "t1".to_string());
        assert!(!state.download_enabled);
        assert_eq!(state.total_books(), 0);
        // the render itself still happened
        assert_eq!(state.last_updated.as_deref(), Some("t1"));
    }

    #[test]
    fn test_download_enable_is_monotonic() {
        let mut state = UiState::default();
        state.show_dataset(vec![book("A")], "t1".to_string());
        assert!(state.download_enabled);

        // an empty render later does not revoke the download
        state.show_dataset(Vec::new(), "t2".to_string());
        assert!(state.download_enabled);
    }

    #[test]
    fn test_domain_error_leaves_table_and_stats_untouched() {
        let mut state = UiState::default();
        state.show_dataset(vec![book("A"), book("B")], "t1".to_string());
        let before = state.clone();

        // backend answered with status != "success": only the banner changes
        state.begin_scrape();
        state.set_status("❌ Failed to scrape books", StatusLevel::Error);
        state.finish_scrape();

        assert_eq!(state.books, before.books);
        assert_eq!(state.last_updated, before.last_updated);
        assert_eq!(state.download_enabled, before.download_enabled);
        assert_eq!(
            state.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Error)
        );
    }

    #[test]
    fn test_status_set_and_clear() {
        let mut state = UiState::default();
        state.set_status("✅ Scraped 3 books", StatusLevel::Success);
        let line = state.status.as_ref().unwrap();
        assert_eq!(line.message, "✅ Scraped 3 books");
        assert_eq!(line.level, StatusLevel::Success);

        // the one-shot timer clears whatever is displayed at that moment,
        // including a status that arrived after the timer was armed
        state.set_status("Scraping in progress...", StatusLevel::Loading);
        state.clear_status();
        assert!(state.status.is_none());
    }

    #[test]
    fn test_count_tracks_current_dataset_only() {
        let mut state = UiState::default();
        for n in [5usize, 2, 8] {
            let books = (0..n).map(|i| book(&format!("b{i}"))).collect();
            state.show_dataset(books, "t".to_string());
            assert_eq!(state.total_books(), n);
        }
    }
}
