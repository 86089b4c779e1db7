//! Movie detail flow

use super::error::{FlowError, MOVIE_FAILED};
use super::flow::{FlowKind, Ticket};
use super::intent::{Intent, TrailerSource};
use super::navigation::BackTarget;
use super::request::Request;
use super::router::ViewState;
use super::App;
use crate::api::CatalogError;
use crate::config::Config;
use crate::models::{Movie, ProviderSummary};

pub const LOADING_MOVIE: &str = "Loading movie details...";
pub const NO_MOVIE_OVERVIEW: &str = "No description available.";

/// Renderable movie details
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub genres: String,
    pub rating: String,
    pub runtime: String,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub providers: ProviderSummary,
    /// Present when the record carries a playable trailer
    pub trailer: Option<Intent>,
    pub back: BackTarget,
}

impl MoviePage {
    pub fn new(movie: Movie, back: BackTarget, config: &Config) -> Self {
        let trailer = movie
            .trailer_key(&config.video_site)
            .map(|key| Intent::PlayTrailer(TrailerSource::Key(key.to_string())));

        Self {
            id: movie.id,
            release_date: movie.release_text(),
            genres: movie.genres_text(),
            rating: movie.display_rating(),
            runtime: movie.runtime_text(),
            poster_url: config.poster_url(movie.poster_path.as_deref()),
            backdrop_url: config.backdrop_url_for(movie.backdrop_path.as_deref()),
            providers: movie.providers_for(&config.region),
            trailer,
            back,
            tagline: movie.tagline.filter(|t| !t.trim().is_empty()),
            overview: movie
                .overview
                .filter(|o| !o.trim().is_empty())
                .unwrap_or_else(|| NO_MOVIE_OVERVIEW.to_string()),
            title: movie.title,
        }
    }

    pub fn back_intent(&self) -> Intent {
        Intent::GoBack(self.back)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MovieView {
    #[default]
    Idle,
    Loading {
        movie_id: u64,
        back: BackTarget,
        message: String,
    },
    Loaded(MoviePage),
}

impl MovieView {
    pub fn page(&self) -> Option<&MoviePage> {
        match self {
            MovieView::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// Where "back" leads from this view
    pub fn back(&self) -> BackTarget {
        match self {
            MovieView::Idle => BackTarget::Results,
            MovieView::Loading { back, .. } => *back,
            MovieView::Loaded(page) => page.back,
        }
    }
}

impl App {
    /// Open a movie, optionally reached from the series `origin`
    pub fn movie_details(&mut self, movie_id: u64, origin: Option<u64>) -> Option<Request> {
        match origin {
            Some(series_id) => self.nav.enter_series(series_id),
            None => self.nav.clear(),
        }
        let back = BackTarget::from_origin(origin);

        let ticket = self.flows.issue(FlowKind::Movie);
        self.sync_loading();
        self.movie = MovieView::Loading {
            movie_id,
            back,
            message: LOADING_MOVIE.to_string(),
        };
        self.router.show(ViewState::MovieDetail);

        tracing::info!(movie_id, ?origin, generation = ticket.generation, "movie requested");
        Some(Request::Movie {
            ticket,
            id: movie_id,
            origin,
        })
    }

    pub(super) fn complete_movie(
        &mut self,
        ticket: Ticket,
        origin: Option<u64>,
        result: Result<Movie, CatalogError>,
    ) {
        if !self.flows.settle(ticket) {
            tracing::debug!(generation = ticket.generation, "discarding stale movie response");
            return;
        }

        let back = BackTarget::from_origin(origin);
        match result {
            Ok(movie) => {
                tracing::info!(movie_id = movie.id, title = %movie.title, "movie loaded");
                self.movie = MovieView::Loaded(MoviePage::new(movie, back, &self.config));
            }
            Err(e) => {
                tracing::warn!(error = %e, "movie lookup failed");
                self.show_alert(FlowError::network(MOVIE_FAILED, e).to_alert());
                self.movie = MovieView::Idle;
                self.router.show(back.view());
            }
        }
    }
}
