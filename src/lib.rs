//! ReelTUI - terminal browser for a movie catalog
//!
//! Search for movie series and movies, walk a series in release order,
//! inspect a movie's details and watch providers, and play its trailer.
//!
//! # Modules
//!
//! - `models` - Catalog records and display rules
//! - `api` - Catalog client trait and its HTTP implementation
//! - `app` - View routing, navigation flows and overlays
//! - `ui` - TUI rendering
//! - `config`, `cli`, `logging` - Launch configuration
//! - `player` - Optional external trailer player

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod player;
pub mod ui;

// Re-export commonly used types
pub use api::{CatalogClient, CatalogError, HttpCatalogClient};
pub use app::{App, Intent, Request, Response, ViewState};
pub use config::Config;
pub use models::{Collection, MediaKind, Movie, MoviePart, SearchItem};
