//! Series detail flow

use super::error::FlowError;
use super::flow::{FlowKind, Ticket};
use super::intent::{Intent, TrailerSource};
use super::list::ListState;
use super::request::Request;
use super::router::ViewState;
use super::App;
use crate::api::CatalogError;
use crate::config::Config;
use crate::models::{Collection, MoviePart};

pub const LOADING_SERIES: &str = "Loading series details...";
pub const NO_SERIES_OVERVIEW: &str = "No description available for this series.";

/// Series header block
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesHeader {
    pub name: String,
    pub overview: String,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub part_count: usize,
}

/// One movie of a series, in release order
#[derive(Debug, Clone, PartialEq)]
pub struct PartEntry {
    pub id: u64,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub trailer: Intent,
    pub details: Intent,
}

impl PartEntry {
    fn new(part: MoviePart, series_id: u64, config: &Config) -> Self {
        Self {
            id: part.id,
            year: part.display_year(),
            poster_url: config.poster_url(part.poster_path.as_deref()),
            title: part.title,
            trailer: Intent::PlayTrailer(TrailerSource::Movie(part.id)),
            details: Intent::SelectMovie {
                id: part.id,
                origin: Some(series_id),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPage {
    pub series_id: u64,
    pub header: SeriesHeader,
    pub entries: Vec<PartEntry>,
    pub list: ListState,
}

impl SeriesPage {
    /// Build the page; parts must already be sorted
    pub fn new(collection: Collection, config: &Config) -> Self {
        let series_id = collection.id;
        let header = SeriesHeader {
            overview: collection
                .overview
                .filter(|o| !o.trim().is_empty())
                .unwrap_or_else(|| NO_SERIES_OVERVIEW.to_string()),
            poster_url: config.poster_url(collection.poster_path.as_deref()),
            backdrop_url: config.backdrop_url_for(collection.backdrop_path.as_deref()),
            part_count: collection.parts.len(),
            name: collection.name,
        };
        let entries: Vec<PartEntry> = collection
            .parts
            .into_iter()
            .map(|part| PartEntry::new(part, series_id, config))
            .collect();

        Self {
            series_id,
            header,
            list: ListState::new(entries.len()),
            entries,
        }
    }

    pub fn selected_entry(&self) -> Option<&PartEntry> {
        self.entries.get(self.list.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SeriesView {
    #[default]
    Idle,
    Loading { series_id: u64, message: String },
    Loaded(SeriesPage),
}

impl SeriesView {
    /// The loaded page, when it belongs to `series_id`
    pub fn page_for(&self, series_id: u64) -> Option<&SeriesPage> {
        match self {
            SeriesView::Loaded(page) if page.series_id == series_id => Some(page),
            _ => None,
        }
    }

    pub fn page(&self) -> Option<&SeriesPage> {
        match self {
            SeriesView::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut SeriesPage> {
        match self {
            SeriesView::Loaded(page) => Some(page),
            _ => None,
        }
    }
}

impl App {
    /// Open a series: remember it as the navigation origin and fetch it
    pub fn series_details(&mut self, series_id: u64) -> Option<Request> {
        self.nav.enter_series(series_id);
        let ticket = self.flows.issue(FlowKind::Series);
        self.sync_loading();
        self.series = SeriesView::Loading {
            series_id,
            message: LOADING_SERIES.to_string(),
        };
        self.router.show(ViewState::SeriesDetail);

        tracing::info!(series_id, generation = ticket.generation, "series requested");
        Some(Request::Collection {
            ticket,
            id: series_id,
        })
    }

    pub(super) fn complete_series(
        &mut self,
        ticket: Ticket,
        series_id: u64,
        result: Result<Collection, CatalogError>,
    ) {
        if !self.flows.settle(ticket) {
            tracing::debug!(series_id, generation = ticket.generation, "discarding stale series response");
            return;
        }

        let mut collection = match result {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(series_id, error = %e, "series lookup failed");
                self.abort_series(FlowError::from_collection(e));
                return;
            }
        };

        if collection.parts.is_empty() {
            tracing::info!(series_id, "series has no parts");
            self.abort_series(FlowError::EmptyResult);
            return;
        }

        collection.sort_parts();
        tracing::info!(series_id, parts = collection.parts.len(), "series loaded");
        self.series = SeriesView::Loaded(SeriesPage::new(collection, &self.config));
    }

    /// Alert and fall back to the results; the series is no longer an origin
    fn abort_series(&mut self, error: FlowError) {
        self.show_alert(error.to_alert());
        self.nav.clear();
        self.series = SeriesView::Idle;
        self.router.show(ViewState::Results);
    }

    /// Back to Series(id): re-show the loaded page or fetch it again
    pub fn back_to_series(&mut self, series_id: u64) -> Option<Request> {
        if self.series.page_for(series_id).is_some() {
            self.nav.enter_series(series_id);
            self.router.show(ViewState::SeriesDetail);
            None
        } else {
            self.series_details(series_id)
        }
    }
}
