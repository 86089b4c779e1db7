//! Main view routing
//!
//! Exactly one main view is active at a time. Every transition resets the
//! scroll position of the content area.

use std::fmt;

/// The four mutually exclusive main views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Search box with quick-search suggestions
    #[default]
    Search,
    /// Search results grid
    Results,
    /// A movie series and its ordered parts
    SeriesDetail,
    /// A single movie
    MovieDetail,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Search,
        ViewState::Results,
        ViewState::SeriesDetail,
        ViewState::MovieDetail,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Search => "SEARCH",
            ViewState::Results => "RESULTS",
            ViewState::SeriesDetail => "SERIES",
            ViewState::MovieDetail => "MOVIE",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Owns the active main view
#[derive(Debug, Default)]
pub struct ViewRouter {
    active: ViewState,
    scroll: u16,
    transitions: u64,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `view`, deactivating every other one, and scroll to top
    pub fn show(&mut self, view: ViewState) {
        tracing::debug!(from = %self.active, to = %view, "show view");
        self.active = view;
        self.scroll = 0;
        self.transitions += 1;
    }

    pub fn active(&self) -> ViewState {
        self.active
    }

    pub fn is_active(&self, view: ViewState) -> bool {
        self.active == view
    }

    /// Vertical scroll of the content area
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Number of `show` calls so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_search() {
        let router = ViewRouter::new();
        assert_eq!(router.active(), ViewState::Search);
        assert_eq!(router.transitions(), 0);
    }

    #[test]
    fn test_exactly_one_view_active() {
        let mut router = ViewRouter::new();
        for view in ViewState::ALL {
            router.show(view);
            router.show(view);
            let active: Vec<_> = ViewState::ALL
                .into_iter()
                .filter(|v| router.is_active(*v))
                .collect();
            assert_eq!(active, vec![view]);
        }
    }

    #[test]
    fn test_show_resets_scroll() {
        let mut router = ViewRouter::new();
        router.show(ViewState::MovieDetail);
        router.scroll_down(12);
        assert_eq!(router.scroll(), 12);

        router.show(ViewState::MovieDetail);
        assert_eq!(router.scroll(), 0);

        router.scroll_up(3);
        assert_eq!(router.scroll(), 0);
    }
}
