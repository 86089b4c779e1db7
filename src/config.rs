//! Configuration management for ReelTUI
//!
//! Config is read from ~/.config/reeltui/config.toml (or `--config`), then
//! environment overrides, then command line flags. It is never written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::player::PlayerType;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog service base URL
    pub api_url: String,
    /// Poster image base URL (path is appended)
    pub image_url: String,
    /// Backdrop image base URL (path is appended)
    pub backdrop_url: String,
    /// Shown when a poster is missing
    pub placeholder_url: String,
    /// Video site whose trailers are playable
    pub video_site: String,
    /// Embed base URL of the video site (key is appended)
    pub embed_url: String,
    /// Region code for watch providers
    pub region: String,
    /// Catalog request timeout
    pub request_timeout_secs: u64,
    /// Suggested terms on the search page
    pub quick_searches: Vec<String>,
    /// External player for trailers (none = show the link only)
    pub player: Option<PlayerType>,
    /// Default log filter, overridden by RUST_LOG
    pub log_level: String,
    /// Log file path (default: cache dir)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://movie-api.sayrz.com/api".to_string(),
            image_url: "https://image.tmdb.org/t/p/w500".to_string(),
            backdrop_url: "https://image.tmdb.org/t/p/w1280".to_string(),
            placeholder_url: "https://via.placeholder.com/250x375/2c2c34/a9a9b2?text=No+Image"
                .to_string(),
            video_site: "YouTube".to_string(),
            embed_url: "https://www.youtube.com/embed/".to_string(),
            region: "DE".to_string(),
            request_timeout_secs: 30,
            quick_searches: vec![
                "Harry Potter".to_string(),
                "Star Wars".to_string(),
                "The Lord of the Rings".to_string(),
                "The Matrix".to_string(),
                "Fast & Furious".to_string(),
            ],
            player: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/reeltui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reeltui").join("config.toml"))
    }

    /// Load from the default path; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; the file must exist and parse
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Apply REELTUI_API_URL / REELTUI_REGION overrides
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("REELTUI_API_URL").ok(),
            std::env::var("REELTUI_REGION").ok(),
        );
    }

    fn apply_overrides(&mut self, api_url: Option<String>, region: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        if let Some(region) = region.filter(|r| !r.is_empty()) {
            self.region = region.to_uppercase();
        }
    }

    /// Poster URL, or the placeholder when the item has no poster
    pub fn poster_url(&self, path: Option<&str>) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}{}", self.image_url, path),
            None => self.placeholder_url.clone(),
        }
    }

    pub fn backdrop_url_for(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|path| format!("{}{}", self.backdrop_url, path))
    }

    /// Embed URL for a video key, autoplay on
    pub fn embed_url_for(&self, video_key: &str) -> String {
        format!("{}{}?autoplay=1", self.embed_url, video_key)
    }

    /// Where the log file goes
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("reeltui").join("reeltui.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.region, "DE");
        assert_eq!(config.video_site, "YouTube");
        assert!(config.player.is_none());
        assert!(!config.quick_searches.is_empty());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region = \"US\"\nplayer = \"mpv\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.region, "US");
        assert_eq!(config.player, Some(PlayerType::Mpv));
        assert_eq!(config.api_url, Config::default().api_url);
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region = [").unwrap();
        assert!(Config::load_from(file.path()).is_err());
        assert!(Config::load_from(Path::new("/nonexistent/reeltui.toml")).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some("http://localhost:4000/api".into()), Some("us".into()));
        assert_eq!(config.api_url, "http://localhost:4000/api");
        assert_eq!(config.region, "US");

        config.apply_overrides(Some(String::new()), None);
        assert_eq!(config.api_url, "http://localhost:4000/api");
    }

    #[test]
    fn test_url_helpers() {
        let config = Config::default();
        assert_eq!(
            config.poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(config.poster_url(None), config.placeholder_url);
        assert_eq!(config.backdrop_url_for(Some("")), None);
        assert_eq!(
            config.embed_url_for("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1"
        );
    }
}
