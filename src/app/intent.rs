//! User intents emitted by the views
//!
//! Rendered items carry the intent they trigger; the event loop hands it to
//! [`App::dispatch`](super::App::dispatch). Views never call flows directly.

use super::navigation::BackTarget;
use super::overlay::AlertDismiss;

/// How a trailer is identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerSource {
    /// A playable video key, used as is
    Key(String),
    /// A movie id whose trailer key must be looked up first
    Movie(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit a search query
    Search(String),
    /// Pick one of the suggested search terms
    QuickSearch(String),
    /// Open a series from the results
    SelectCollection(u64),
    /// Open a movie, remembering the series it was reached from
    SelectMovie { id: u64, origin: Option<u64> },
    PlayTrailer(TrailerSource),
    CloseTrailer,
    /// Back action of the movie view
    GoBack(BackTarget),
    /// Back action of the series view
    BackToResults,
    /// Start over from the search view
    NewSearch,
    DismissAlert(AlertDismiss),
}
