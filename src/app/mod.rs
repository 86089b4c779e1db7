//! App state and navigation flows
//!
//! [`App`] owns the active view, the overlays, the navigation context and
//! the per-flow generation counters. Flows are split in two: a synchronous
//! half that updates the views and returns a [`Request`], and
//! [`App::complete`] which applies the [`Response`] once the request has run.
//! Nothing here touches the terminal or the network directly.

mod error;
mod flow;
mod intent;
mod list;
mod movie;
mod navigation;
mod overlay;
mod request;
mod router;
mod search;
mod series;
mod trailer;

pub use error::FlowError;
pub use flow::{FlowKind, FlowTracker, Ticket};
pub use intent::{Intent, TrailerSource};
pub use list::ListState;
pub use movie::{MoviePage, MovieView, LOADING_MOVIE, NO_MOVIE_OVERVIEW};
pub use navigation::{BackTarget, NavigationContext};
pub use overlay::{Alert, AlertDismiss, OverlayManager, Severity, TrailerTarget};
pub use request::{Outcome, Request, Response};
pub use router::{ViewRouter, ViewState};
pub use search::{
    build_cards, ResultCard, ResultsBody, ResultsView, SearchInput, NO_RESULTS, RESULTS_FAILED,
    SEARCHING,
};
pub use series::{PartEntry, SeriesHeader, SeriesPage, SeriesView, LOADING_SERIES};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::CatalogClient;
use crate::config::Config;

/// Lines scrolled per key press in the movie view
const SCROLL_STEP: u16 = 2;
const PAGE_SIZE: usize = 10;

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Main Application State
// =============================================================================

#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    pub input_mode: InputMode,
    pub router: ViewRouter,
    pub overlay: OverlayManager,
    pub nav: NavigationContext,
    pub flows: FlowTracker,

    // View data
    pub search: SearchInput,
    pub results: ResultsView,
    pub series: SeriesView,
    pub movie: MovieView,

    pub config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Editing,
            router: ViewRouter::new(),
            overlay: OverlayManager::new(),
            nav: NavigationContext::default(),
            flows: FlowTracker::new(),
            search: SearchInput {
                suggestions: ListState::new(config.quick_searches.len()),
                ..SearchInput::default()
            },
            results: ResultsView::default(),
            series: SeriesView::default(),
            movie: MovieView::default(),
            config,
        }
    }

    pub fn view(&self) -> ViewState {
        self.router.active()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------------

    /// Run the synchronous half of the flow behind `intent`
    pub fn dispatch(&mut self, intent: Intent) -> Option<Request> {
        tracing::debug!(?intent, "dispatch");
        match intent {
            Intent::Search(query) => self.handle_search(&query),
            Intent::QuickSearch(term) => self.quick_search(&term),
            Intent::SelectCollection(id) => self.series_details(id),
            Intent::SelectMovie { id, origin } => self.movie_details(id, origin),
            Intent::PlayTrailer(source) => self.show_movie_trailer(source),
            Intent::CloseTrailer => {
                self.close_trailer();
                None
            }
            Intent::GoBack(target) => self.go_back(target),
            Intent::BackToResults => {
                self.back_to_results();
                None
            }
            Intent::NewSearch => {
                self.new_search();
                None
            }
            Intent::DismissAlert(reason) => {
                self.overlay.dismiss_alert(reason);
                None
            }
        }
    }

    /// Apply a finished request. Stale responses are dropped.
    pub fn complete(&mut self, response: Response) {
        let Response { request, outcome } = response;
        match (request, outcome) {
            (Request::Search { ticket, .. }, Outcome::Search(result)) => {
                self.complete_search(ticket, result)
            }
            (Request::Collection { ticket, id }, Outcome::Collection(result)) => {
                self.complete_series(ticket, id, result)
            }
            (Request::Movie { ticket, origin, .. }, Outcome::Movie(result)) => {
                self.complete_movie(ticket, origin, result)
            }
            (Request::TrailerKey { ticket, movie_id }, Outcome::TrailerKey(result)) => {
                self.complete_trailer(ticket, movie_id, result)
            }
            (request, outcome) => {
                tracing::error!(?request, ?outcome, "response does not match its request");
                self.flows.settle(request.ticket());
            }
        }
        self.sync_loading();
    }

    /// Execute `request` inline and apply its response
    pub async fn settle(&mut self, client: &dyn CatalogClient, request: Option<Request>) {
        if let Some(request) = request {
            let response = request.execute(client).await;
            self.complete(response);
        }
    }

    /// Dispatch `intent` and wait for the flow to finish
    pub async fn perform(&mut self, client: &dyn CatalogClient, intent: Intent) {
        let request = self.dispatch(intent);
        self.settle(client, request).await;
    }

    /// Loading shows while any loading flow's latest request is outstanding
    fn sync_loading(&mut self) {
        self.overlay.set_loading(self.flows.is_loading());
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Back to the search view with an empty, focused input
    pub fn new_search(&mut self) {
        self.flows.invalidate_all();
        self.sync_loading();
        self.nav.clear();
        self.search.clear();
        self.input_mode = InputMode::Editing;
        self.router.show(ViewState::Search);
    }

    pub fn back_to_results(&mut self) {
        self.leave_details();
        self.nav.clear();
        self.router.show(ViewState::Results);
    }

    pub fn go_back(&mut self, target: BackTarget) -> Option<Request> {
        match target {
            BackTarget::Results => {
                self.back_to_results();
                None
            }
            BackTarget::Series(series_id) => {
                self.leave_details();
                self.back_to_series(series_id)
            }
        }
    }

    /// Detail lookups still in flight belong to a view being left
    fn leave_details(&mut self) {
        self.flows.invalidate(FlowKind::Series);
        self.flows.invalidate(FlowKind::Movie);
        self.sync_loading();
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.overlay.show_alert(alert);
    }

    pub fn close_alert(&mut self) {
        self.overlay.close_alert();
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key press; returns the request it started, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        // Overlays capture the keyboard
        if self.overlay.alert().is_some() || self.overlay.trailer().is_some() {
            self.handle_overlay_key(key);
            return None;
        }

        if self.input_mode == InputMode::Editing {
            return self.handle_editing_key(key);
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('/') => return self.dispatch(Intent::NewSearch),
            _ => {}
        }

        match self.router.active() {
            ViewState::Search => self.handle_search_key(key),
            ViewState::Results => self.handle_results_key(key),
            ViewState::SeriesDetail => self.handle_series_key(key),
            ViewState::MovieDetail => self.handle_movie_key(key),
        }
    }

    /// Esc dismisses every overlay at once
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.overlay.dismiss_alert(AlertDismiss::Cancel);
                self.close_trailer();
            }
            KeyCode::Enter if self.overlay.alert().is_some() => {
                self.overlay.dismiss_alert(AlertDismiss::Acknowledge);
            }
            KeyCode::Char('x') | KeyCode::Char('q') if self.overlay.alert().is_none() => {
                self.close_trailer();
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc | KeyCode::Down | KeyCode::Tab => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let query = self.search.query.clone();
                return self.dispatch(Intent::Search(query));
            }
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.search.suggestions.selected == 0 {
                    self.input_mode = InputMode::Editing;
                } else {
                    self.search.suggestions.up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.search.suggestions.down(),
            KeyCode::Char('i') | KeyCode::Char('s') | KeyCode::Tab => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Enter => {
                let term = self
                    .config
                    .quick_searches
                    .get(self.search.suggestions.selected)
                    .cloned()?;
                return self.dispatch(Intent::QuickSearch(term));
            }
            _ => {}
        }
        None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<Request> {
        let list = &mut self.results.list;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => list.up(),
            KeyCode::Down | KeyCode::Char('j') => list.down(),
            KeyCode::PageUp => list.page_up(PAGE_SIZE),
            KeyCode::PageDown => list.page_down(PAGE_SIZE),
            KeyCode::Home => list.first(),
            KeyCode::End => list.last(),
            KeyCode::Enter => {
                let intent = self.results.selected_card()?.intent.clone();
                return self.dispatch(intent);
            }
            KeyCode::Esc | KeyCode::Backspace => return self.dispatch(Intent::NewSearch),
            _ => {}
        }
        None
    }

    fn handle_series_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                return self.dispatch(Intent::BackToResults);
            }
            _ => {}
        }

        let page = self.series.page_mut()?;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => page.list.up(),
            KeyCode::Down | KeyCode::Char('j') => page.list.down(),
            KeyCode::Home => page.list.first(),
            KeyCode::End => page.list.last(),
            KeyCode::Enter | KeyCode::Char('d') => {
                let intent = page.selected_entry()?.details.clone();
                return self.dispatch(intent);
            }
            KeyCode::Char('t') => {
                let intent = page.selected_entry()?.trailer.clone();
                return self.dispatch(intent);
            }
            _ => {}
        }
        None
    }

    fn handle_movie_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.router.scroll_up(SCROLL_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.router.scroll_down(SCROLL_STEP),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                let back = self.movie.back();
                return self.dispatch(Intent::GoBack(back));
            }
            KeyCode::Char('t') | KeyCode::Enter => {
                let intent = self.movie.page()?.trailer.clone()?;
                return self.dispatch(intent);
            }
            _ => {}
        }
        None
    }
}
