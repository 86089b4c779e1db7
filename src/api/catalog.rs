//! Movie catalog API client
//!
//! Read-only lookups against the catalog service: multi search, collections,
//! movie detail and trailer keys. Every call is idempotent.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Collection, MediaKind, Movie, MoviePart, RegionProviders, SearchItem, Video};

/// Catalog API error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429), retries exhausted")]
    RateLimited,

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}

/// Lookups the navigation flows depend on
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search movies and collections by free text
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, CatalogError>;

    /// Fetch a collection with its parts (unsorted, catalog order)
    async fn collection(&self, id: u64) -> Result<Collection, CatalogError>;

    /// Fetch full movie detail
    async fn movie(&self, id: u64) -> Result<Movie, CatalogError>;

    /// Resolve the trailer video key for a movie, if the catalog has one
    async fn trailer_key(&self, movie_id: u64) -> Result<Option<String>, CatalogError>;
}

/// HTTP implementation of [`CatalogClient`]
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpCatalogClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://movie-api.sayrz.com/api";

    /// Create a client against the public catalog service
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (self-hosted catalog, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            max_retries: 3,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET with retry logic for rate limits
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut retries = 0;

        loop {
            tracing::debug!(%url, "catalog request");
            let response = self
                .client
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .await?;

            match response.status() {
                status if status.is_success() => {
                    let body = response.text().await?;
                    return serde_json::from_str(&body).map_err(|e| {
                        CatalogError::InvalidResponse(format!("JSON parse error: {}", e))
                    });
                }
                StatusCode::NOT_FOUND => return Err(CatalogError::NotFound),
                StatusCode::TOO_MANY_REQUESTS => {
                    retries += 1;
                    if retries >= self.max_retries {
                        return Err(CatalogError::RateLimited);
                    }

                    let wait_secs = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(2u64.pow(retries));

                    tracing::warn!(%url, wait_secs, "catalog rate limited, backing off");
                    tokio::time::sleep(Duration::from_secs(wait_secs)).await;
                }
                status => return Err(CatalogError::Status(status.as_u16())),
            }
        }
    }
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, CatalogError> {
        let endpoint = format!("/search?query={}", urlencoding::encode(query));
        let response: SearchResponse = self.get(&endpoint).await?;
        Ok(response.into_items())
    }

    async fn collection(&self, id: u64) -> Result<Collection, CatalogError> {
        let response: CollectionResponse = self.get(&format!("/collection/{}", id)).await?;
        Ok(response.into_collection())
    }

    async fn movie(&self, id: u64) -> Result<Movie, CatalogError> {
        let response: MovieResponse = self.get(&format!("/movie/{}", id)).await?;
        Ok(response.into_movie())
    }

    async fn trailer_key(&self, movie_id: u64) -> Result<Option<String>, CatalogError> {
        let response: TrailerResponse = self.get(&format!("/movie/{}/trailer", movie_id)).await?;
        Ok(response.trailer_key.filter(|k| !k.is_empty()))
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<SearchItemRaw>,
}

impl SearchResponse {
    fn into_items(self) -> Vec<SearchItem> {
        self.results
            .into_iter()
            .filter_map(SearchItemRaw::into_item)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchItemRaw {
    id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    media_type: String,
    // Collections use "name", movies use "title"
    name: Option<String>,
    title: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f64>,
}

impl SearchItemRaw {
    fn into_item(self) -> Option<SearchItem> {
        let kind = MediaKind::from_api(&self.media_type)?;
        Some(SearchItem {
            id: self.id,
            kind,
            title: self.name.or(self.title).unwrap_or_default(),
            poster_path: self.poster_path,
            release_date: self.release_date,
            first_air_date: self.first_air_date,
            vote_average: self.vote_average,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    id: u64,
    name: String,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    parts: Vec<PartRaw>,
}

impl CollectionResponse {
    fn into_collection(self) -> Collection {
        Collection {
            id: self.id,
            name: self.name,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            parts: self
                .parts
                .into_iter()
                .map(|p| MoviePart {
                    id: p.id,
                    title: p.title.or(p.name).unwrap_or_default(),
                    release_date: p.release_date,
                    poster_path: p.poster_path,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PartRaw {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    tagline: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    genres: Option<Vec<GenreRaw>>,
    runtime: Option<u32>,
    vote_average: Option<f64>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(rename = "watch/providers")]
    watch_providers: Option<WatchProvidersRaw>,
    videos: Option<VideosRaw>,
}

impl MovieResponse {
    fn into_movie(self) -> Movie {
        let watch_providers: HashMap<String, RegionProviders> = self
            .watch_providers
            .map(|w| {
                w.results
                    .into_iter()
                    .map(|(region, p)| (region, p.into_region()))
                    .collect()
            })
            .unwrap_or_default();

        let videos: Vec<Video> = self
            .videos
            .map(|v| v.results.into_iter().map(VideoRaw::into_video).collect())
            .unwrap_or_default();

        Movie {
            id: self.id,
            title: self.title,
            tagline: self.tagline,
            overview: self.overview,
            release_date: self.release_date,
            genres: self
                .genres
                .map(|g| g.into_iter().map(|g| g.name).collect()),
            runtime: self.runtime,
            vote_average: self.vote_average,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            watch_providers,
            videos,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WatchProvidersRaw {
    #[serde(default, deserialize_with = "null_as_default")]
    results: HashMap<String, RegionProvidersRaw>,
}

#[derive(Debug, Deserialize)]
struct RegionProvidersRaw {
    #[serde(default, deserialize_with = "null_as_default")]
    flatrate: Vec<ProviderRaw>,
    #[serde(default, deserialize_with = "null_as_default")]
    buy: Vec<ProviderRaw>,
    #[serde(default, deserialize_with = "null_as_default")]
    rent: Vec<ProviderRaw>,
}

impl RegionProvidersRaw {
    fn into_region(self) -> RegionProviders {
        let names = |list: Vec<ProviderRaw>| -> Vec<String> {
            list.into_iter().map(|p| p.provider_name).collect()
        };
        RegionProviders {
            flatrate: names(self.flatrate),
            buy: names(self.buy),
            rent: names(self.rent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProviderRaw {
    provider_name: String,
}

#[derive(Debug, Deserialize)]
struct VideosRaw {
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<VideoRaw>,
}

#[derive(Debug, Deserialize)]
struct VideoRaw {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    site: String,
    #[serde(default, deserialize_with = "null_as_default")]
    key: String,
}

impl VideoRaw {
    fn into_video(self) -> Video {
        Video {
            kind: self.kind,
            site: self.site,
            key: self.key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TrailerResponse {
    #[serde(rename = "trailerKey")]
    trailer_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_prefers_name() {
        let raw = SearchItemRaw {
            id: 2344,
            media_type: "collection".into(),
            name: Some("The Matrix Collection".into()),
            title: Some("ignored".into()),
            poster_path: Some("/m.jpg".into()),
            release_date: None,
            first_air_date: None,
            vote_average: None,
        };
        let item = raw.into_item().unwrap();
        assert_eq!(item.kind, MediaKind::Collection);
        assert_eq!(item.title, "The Matrix Collection");
    }

    #[test]
    fn test_unknown_media_type_dropped() {
        let raw = SearchItemRaw {
            id: 6384,
            media_type: "person".into(),
            name: Some("Keanu Reeves".into()),
            title: None,
            poster_path: Some("/k.jpg".into()),
            release_date: None,
            first_air_date: None,
            vote_average: None,
        };
        assert!(raw.into_item().is_none());
    }

    #[test]
    fn test_movie_response_decodes_nested_sections() {
        let body = r#"{
            "id": 603,
            "title": "The Matrix",
            "genres": [{"id": 28, "name": "Action"}],
            "watch/providers": {"results": {"DE": {"flatrate": [{"provider_name": "Netflix"}]}}},
            "videos": {"results": [{"type": "Trailer", "site": "YouTube", "key": "abc123"}]}
        }"#;
        let movie = serde_json::from_str::<MovieResponse>(body).unwrap().into_movie();
        assert_eq!(movie.genres_text(), "Action");
        assert_eq!(movie.watch_providers["DE"].flatrate, vec!["Netflix"]);
        assert_eq!(movie.trailer_key("YouTube"), Some("abc123"));
    }

    #[test]
    fn test_null_sections_decode_as_empty() {
        let body = r#"{
            "id": 603,
            "title": null,
            "genres": null,
            "watch/providers": {"results": {"DE": {"flatrate": null, "rent": [{"provider_name": "Apple TV"}]}}},
            "videos": {"results": null}
        }"#;
        let movie = serde_json::from_str::<MovieResponse>(body).unwrap().into_movie();
        assert_eq!(movie.title, "");
        assert_eq!(movie.genres_text(), "Unknown");
        assert!(movie.watch_providers["DE"].flatrate.is_empty());
        assert_eq!(movie.watch_providers["DE"].rent, vec!["Apple TV"]);
        assert!(movie.videos.is_empty());

        let search = serde_json::from_str::<SearchResponse>(r#"{"results": null}"#).unwrap();
        assert!(search.into_items().is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpCatalogClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
