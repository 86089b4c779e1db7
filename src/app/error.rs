//! Flow error taxonomy
//!
//! Each flow converts catalog failures into a [`FlowError`] and turns that
//! into an alert; nothing propagates past the flow.

use thiserror::Error;

use super::overlay::{Alert, Severity};
use crate::api::CatalogError;

pub const EMPTY_QUERY: &str = "Please enter a search term";
pub const SEARCH_FAILED: &str =
    "An error occurred while fetching search results. Please try again later.";
pub const SERIES_NOT_FOUND: &str =
    "Could not load series details: This collection could not be found.";
pub const SERIES_FAILED: &str =
    "Could not load series details: Network response was not ok for series details.";
pub const SERIES_EMPTY: &str = "No movies found for this series.";
pub const MOVIE_FAILED: &str = "Could not load movie details.";
pub const TRAILER_MISSING: &str = "No trailer found for this movie.";
pub const TRAILER_FAILED: &str = "Could not load trailer.";

#[derive(Debug, Error)]
pub enum FlowError {
    /// Empty or whitespace-only query; never reaches the network
    #[error("{}", EMPTY_QUERY)]
    Validation,

    /// Non-success status or transport failure
    #[error("{message}")]
    Network {
        message: &'static str,
        #[source]
        source: CatalogError,
    },

    /// Collection lookup answered 404
    #[error("{}", SERIES_NOT_FOUND)]
    NotFound,

    /// Collection without parts
    #[error("{}", SERIES_EMPTY)]
    EmptyResult,

    /// No trailer key could be resolved
    #[error("{}", TRAILER_MISSING)]
    MissingData,
}

impl FlowError {
    pub fn network(message: &'static str, source: CatalogError) -> Self {
        FlowError::Network { message, source }
    }

    /// Collection lookups distinguish 404 from every other failure
    pub fn from_collection(source: CatalogError) -> Self {
        if source.is_not_found() {
            FlowError::NotFound
        } else {
            FlowError::network(SERIES_FAILED, source)
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FlowError::Validation | FlowError::Network { .. } | FlowError::NotFound => {
                Severity::Error
            }
            FlowError::EmptyResult | FlowError::MissingData => Severity::Info,
        }
    }

    pub fn to_alert(&self) -> Alert {
        match self.severity() {
            Severity::Error => Alert::error(self.to_string()),
            Severity::Info => Alert::info(self.to_string()),
        }
    }
}
