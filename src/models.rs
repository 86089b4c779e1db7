//! Data structures and types for ReelTUI
//!
//! Catalog records as returned by the remote movie API, organized by domain:
//! - **Search**: mixed movie / collection search hits
//! - **Collections**: a movie series and its ordered parts
//! - **Movies**: full movie detail with providers and videos

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Placeholder text for missing years, dates, runtimes and genres
pub const UNKNOWN: &str = "Unknown";

/// Placeholder text for missing ratings
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Search Models
// =============================================================================

/// Media kind discriminator for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A movie series ("collection" in the catalog API)
    Collection,
    Movie,
}

impl MediaKind {
    /// Parse the catalog's `media_type` field; other kinds are not browsable
    pub fn from_api(media_type: &str) -> Option<Self> {
        match media_type {
            "collection" => Some(MediaKind::Collection),
            "movie" => Some(MediaKind::Movie),
            _ => None,
        }
    }

    /// Badge shown on result cards
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Collection => "Series",
            MediaKind::Movie => "Movie",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One hit of a catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl SearchItem {
    /// Whether the item can be rendered as a card
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Year from the release date, falling back to the first air date
    pub fn year(&self) -> Option<u16> {
        non_empty(&self.release_date)
            .or_else(|| non_empty(&self.first_air_date))
            .and_then(extract_year)
    }

    /// Year for display, "Unknown" when no date is usable
    pub fn display_year(&self) -> String {
        self.year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Rating with one decimal, "N/A" when absent
    pub fn display_rating(&self) -> String {
        format_rating(self.vote_average)
    }
}

impl fmt::Display for SearchItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.display_year(), self.kind)
    }
}

// =============================================================================
// Collection Models
// =============================================================================

/// A movie series with its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u64,
    pub name: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub parts: Vec<MoviePart>,
}

impl Collection {
    /// Order parts by release date, oldest first.
    ///
    /// Parts without a parseable date sort before every dated part; ties keep
    /// their catalog order.
    pub fn sort_parts(&mut self) {
        self.parts.sort_by_key(|p| p.release_key());
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} movies", self.name, self.parts.len())
    }
}

/// A movie entry inside a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePart {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
}

impl MoviePart {
    /// Sort key; `None` orders before any date
    pub fn release_key(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(parse_date)
    }

    pub fn display_year(&self) -> String {
        non_empty(&self.release_date)
            .and_then(extract_year)
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

// =============================================================================
// Movie Models
// =============================================================================

/// Full movie record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    /// `None` when the catalog omitted genres entirely
    pub genres: Option<Vec<String>>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Watch providers keyed by region code ("DE", "US", ...)
    pub watch_providers: HashMap<String, RegionProviders>,
    pub videos: Vec<Video>,
}

impl Movie {
    /// Key of the first video that is a trailer hosted on `site`
    pub fn trailer_key(&self, site: &str) -> Option<&str> {
        self.videos
            .iter()
            .find(|v| v.kind == "Trailer" && v.site == site)
            .map(|v| v.key.as_str())
    }

    /// Provider summary for a single region
    pub fn providers_for(&self, region: &str) -> ProviderSummary {
        match self.watch_providers.get(region) {
            Some(providers) if !providers.is_empty() => ProviderSummary::Available {
                stream: providers.flatrate.clone(),
                buy: providers.buy.clone(),
                rent: providers.rent.clone(),
            },
            _ => ProviderSummary::Unavailable,
        }
    }

    /// Genre names joined for display
    pub fn genres_text(&self) -> String {
        match &self.genres {
            Some(genres) if !genres.is_empty() => genres.join(", "),
            _ => UNKNOWN.to_string(),
        }
    }

    pub fn runtime_text(&self) -> String {
        self.runtime
            .filter(|m| *m > 0)
            .map(|m| format!("{} minutes", m))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn release_text(&self) -> String {
        non_empty(&self.release_date)
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn display_rating(&self) -> String {
        format_rating(self.vote_average)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} - ⭐ {}",
            self.title,
            self.release_text(),
            self.runtime_text(),
            self.display_rating()
        )
    }
}

/// Provider names for one region, by offer type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionProviders {
    pub flatrate: Vec<String>,
    pub buy: Vec<String>,
    pub rent: Vec<String>,
}

impl RegionProviders {
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.buy.is_empty() && self.rent.is_empty()
    }
}

/// Where a movie can be watched in the configured region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderSummary {
    Unavailable,
    Available {
        stream: Vec<String>,
        buy: Vec<String>,
        rent: Vec<String>,
    },
}

impl ProviderSummary {
    pub const UNAVAILABLE_MESSAGE: &'static str =
        "Streaming information not available for your region.";

    /// Display lines, one per non-empty offer type
    pub fn lines(&self) -> Vec<String> {
        match self {
            ProviderSummary::Unavailable => vec![Self::UNAVAILABLE_MESSAGE.to_string()],
            ProviderSummary::Available { stream, buy, rent } => [
                ("Stream on", stream),
                ("Buy on", buy),
                ("Rent on", rent),
            ]
            .into_iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
            .collect(),
        }
    }
}

/// A video attached to a movie record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// "Trailer", "Teaser", "Featurette", ...
    pub kind: String,
    /// Hosting site, e.g. "YouTube"
    pub site: String,
    pub key: String,
}

// =============================================================================
// Helpers
// =============================================================================

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Extract year from a date string like "1999-03-30"
pub fn extract_year(date: &str) -> Option<u16> {
    date.get(..4).and_then(|y| y.parse().ok())
}

/// Parse a catalog date ("YYYY-MM-DD")
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// One decimal, or "N/A" for missing and zero ratings
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v > 0.0 => one_decimal(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Round to one decimal place, exact half-way values rounding up
fn one_decimal(value: f64) -> String {
    // x.25 and x.75 are the only values that sit exactly half-way
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
