//! Navigation context and back targets

use super::router::ViewState;

/// Session state recording which series the user is browsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationContext {
    current_series_id: Option<u64>,
}

impl NavigationContext {
    /// Record the series being opened
    pub fn enter_series(&mut self, series_id: u64) {
        self.current_series_id = Some(series_id);
    }

    /// Leave any series-derived flow
    pub fn clear(&mut self) {
        self.current_series_id = None;
    }

    pub fn current_series_id(&self) -> Option<u64> {
        self.current_series_id
    }
}

/// Where the movie view's back action leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackTarget {
    #[default]
    Results,
    /// Detail view of the series the movie was opened from
    Series(u64),
}

impl BackTarget {
    pub fn from_origin(series_id: Option<u64>) -> Self {
        series_id.map_or(BackTarget::Results, BackTarget::Series)
    }

    /// View shown when going back without reloading anything
    pub fn view(&self) -> ViewState {
        match self {
            BackTarget::Results => ViewState::Results,
            BackTarget::Series(_) => ViewState::SeriesDetail,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackTarget::Results => "← Back to Results",
            BackTarget::Series(_) => "← Back to Series",
        }
    }
}
