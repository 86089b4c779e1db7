//! Search flow and results view data

use super::error::{FlowError, SEARCH_FAILED};
use super::flow::{FlowKind, Ticket};
use super::intent::Intent;
use super::list::ListState;
use super::request::Request;
use super::router::ViewState;
use super::{App, InputMode};
use crate::api::CatalogError;
use crate::config::Config;
use crate::models::{MediaKind, SearchItem};

pub const SEARCHING: &str = "Searching for movies...";
pub const NO_RESULTS: &str = "No movie series or movies found for this query.";
pub const RESULTS_FAILED: &str = "Failed to load search results.";

// =============================================================================
// Search Input
// =============================================================================

/// Search box contents and quick-search selection
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub query: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Selection among the quick-search suggestions
    pub suggestions: ListState,
}

impl SearchInput {
    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.query.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the query, cursor at end
    pub fn set(&mut self, query: &str) {
        self.query = query.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Query split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index())
    }
}

// =============================================================================
// Results View
// =============================================================================

/// A renderable search hit
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub id: u64,
    pub title: String,
    pub kind: MediaKind,
    pub year: String,
    pub rating: String,
    pub poster_url: String,
    /// Emitted when the card is selected
    pub intent: Intent,
}

impl ResultCard {
    /// Build a card; items without a poster are not renderable
    pub fn from_item(item: SearchItem, config: &Config) -> Option<Self> {
        if !item.has_poster() {
            return None;
        }
        let intent = match item.kind {
            MediaKind::Collection => Intent::SelectCollection(item.id),
            MediaKind::Movie => Intent::SelectMovie {
                id: item.id,
                origin: None,
            },
        };
        Some(Self {
            id: item.id,
            year: item.display_year(),
            rating: item.display_rating(),
            poster_url: config.poster_url(item.poster_path.as_deref()),
            kind: item.kind,
            title: item.title,
            intent,
        })
    }
}

/// Map search hits to cards, keeping catalog order
pub fn build_cards(items: Vec<SearchItem>, config: &Config) -> Vec<ResultCard> {
    items
        .into_iter()
        .filter_map(|item| ResultCard::from_item(item, config))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    Loading(String),
    Items(Vec<ResultCard>),
    /// No renderable result
    Empty(String),
    /// Inline failure notice
    Failed(String),
}

/// Results view data
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub query: String,
    pub body: ResultsBody,
    pub list: ListState,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self {
            query: String::new(),
            body: ResultsBody::Empty(NO_RESULTS.to_string()),
            list: ListState::default(),
        }
    }
}

impl ResultsView {
    /// Placeholder shown while a search is running
    pub fn loading(query: &str) -> Self {
        Self {
            query: query.to_string(),
            body: ResultsBody::Loading(SEARCHING.to_string()),
            list: ListState::default(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Search Results for \"{}\"", self.query)
    }

    pub fn cards(&self) -> &[ResultCard] {
        match &self.body {
            ResultsBody::Items(cards) => cards,
            _ => &[],
        }
    }

    /// Number of rendered cards
    pub fn count(&self) -> usize {
        self.cards().len()
    }

    pub fn selected_card(&self) -> Option<&ResultCard> {
        self.cards().get(self.list.selected)
    }

    fn set_cards(&mut self, cards: Vec<ResultCard>) {
        self.list = ListState::new(cards.len());
        self.body = if cards.is_empty() {
            ResultsBody::Empty(NO_RESULTS.to_string())
        } else {
            ResultsBody::Items(cards)
        };
    }

    fn set_failed(&mut self) {
        self.list = ListState::default();
        self.body = ResultsBody::Failed(RESULTS_FAILED.to_string());
    }
}

// =============================================================================
// Search Flow
// =============================================================================

impl App {
    /// Start a search.
    ///
    /// A blank query raises a validation alert and issues nothing. Otherwise
    /// the results view is shown at once with a placeholder.
    pub fn handle_search(&mut self, query: &str) -> Option<Request> {
        let query = query.trim();
        if query.is_empty() {
            self.show_alert(FlowError::Validation.to_alert());
            return None;
        }

        let ticket = self.flows.issue(FlowKind::Search);
        self.sync_loading();
        self.input_mode = InputMode::Normal;
        self.results = ResultsView::loading(query);
        self.router.show(ViewState::Results);

        tracing::info!(query, generation = ticket.generation, "search started");
        Some(Request::Search {
            ticket,
            query: query.to_string(),
        })
    }

    /// Fill the search box with `term` and search for it
    pub fn quick_search(&mut self, term: &str) -> Option<Request> {
        self.search.set(term);
        self.handle_search(term)
    }

    pub(super) fn complete_search(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<SearchItem>, CatalogError>,
    ) {
        if !self.flows.settle(ticket) {
            tracing::debug!(generation = ticket.generation, "discarding stale search response");
            return;
        }

        match result {
            Ok(items) => {
                let total = items.len();
                let cards = build_cards(items, &self.config);
                tracing::info!(total, rendered = cards.len(), "search finished");
                self.results.set_cards(cards);
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.show_alert(FlowError::network(SEARCH_FAILED, e).to_alert());
                self.results.set_failed();
            }
        }
    }
}
