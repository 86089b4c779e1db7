//! UI rendering tests for ReelTUI
//!
//! Renders app states into a `TestBackend` and checks what ends up on screen.

use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use reeltui::app::{Alert, App, Intent, TrailerSource, ViewState};
use reeltui::models::{Collection, MediaKind, Movie, MoviePart, SearchItem};
use reeltui::ui::{self, overlay, theme::Theme};

async fn settle(app: &mut App, request: Option<reeltui::app::Request>, catalog: &StaticCatalog) {
    app.settle(catalog, request).await;
}

/// Render `app` and return the screen as text, one line per row
fn screen(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// =============================================================================
// Static catalog
// =============================================================================

struct StaticCatalog;

#[async_trait::async_trait]
impl reeltui::api::CatalogClient for StaticCatalog {
    async fn search(&self, _query: &str) -> Result<Vec<SearchItem>, reeltui::api::CatalogError> {
        Ok(vec![
            SearchItem {
                id: 2344,
                kind: MediaKind::Collection,
                title: "The Matrix Collection".to_string(),
                poster_path: Some("/c.jpg".to_string()),
                release_date: None,
                first_air_date: None,
                vote_average: None,
            },
            SearchItem {
                id: 603,
                kind: MediaKind::Movie,
                title: "The Matrix".to_string(),
                poster_path: Some("/m.jpg".to_string()),
                release_date: Some("1999-03-30".to_string()),
                first_air_date: None,
                vote_average: Some(8.2),
            },
        ])
    }

    async fn collection(&self, id: u64) -> Result<Collection, reeltui::api::CatalogError> {
        Ok(Collection {
            id,
            name: "The Matrix Collection".to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            parts: vec![
                MoviePart {
                    id: 604,
                    title: "The Matrix Reloaded".to_string(),
                    release_date: Some("2003-05-15".to_string()),
                    poster_path: None,
                },
                MoviePart {
                    id: 603,
                    title: "The Matrix".to_string(),
                    release_date: Some("1999-03-30".to_string()),
                    poster_path: None,
                },
            ],
        })
    }

    async fn movie(&self, id: u64) -> Result<Movie, reeltui::api::CatalogError> {
        Ok(Movie {
            id,
            title: "The Matrix".to_string(),
            tagline: Some("Welcome to the Real World.".to_string()),
            runtime: Some(136),
            vote_average: Some(8.2),
            ..Movie::default()
        })
    }

    async fn trailer_key(&self, _movie_id: u64) -> Result<Option<String>, reeltui::api::CatalogError> {
        Ok(None)
    }
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_renders_at_min_and_large_sizes() {
    let app = App::new();
    for (width, height) in [(80, 24), (200, 50), (20, 6)] {
        let text = screen(&app, width, height);
        assert_eq!(text.lines().count(), height as usize);
    }
}

#[test]
fn test_search_view_lists_quick_searches() {
    let app = App::new();
    let text = screen(&app, 100, 30);

    assert!(text.contains("REELTUI"));
    assert!(text.contains("INSERT"));
    for term in &app.config.quick_searches {
        assert!(text.contains(term.as_str()), "missing {}", term);
    }
}

// =============================================================================
// Views
// =============================================================================

#[tokio::test]
async fn test_results_view_shows_heading_and_cards() {
    let mut app = App::new();
    let request = app.dispatch(Intent::Search("Matrix".to_string()));

    let text = screen(&app, 100, 30);
    assert!(text.contains("Search Results for \"Matrix\" (0)"));
    assert!(text.contains("Searching for movies..."));
    assert!(text.contains("Loading..."));

    settle(&mut app, request, &StaticCatalog).await;
    let text = screen(&app, 100, 30);
    assert!(text.contains("Search Results for \"Matrix\" (2)"));
    assert!(text.contains("The Matrix Collection"));
    assert!(text.contains("[Series]"));
    assert!(text.contains("[Movie]"));
    assert!(text.contains("★ N/A"));
    assert!(text.contains("(1999)"));
    assert!(!text.contains("Loading..."));
}

#[tokio::test]
async fn test_series_view_shows_ordered_parts() {
    let mut app = App::new();
    let request = app.dispatch(Intent::SelectCollection(2344));
    assert!(screen(&app, 100, 30).contains("Loading series details..."));

    settle(&mut app, request, &StaticCatalog).await;
    let text = screen(&app, 100, 30);
    assert!(text.contains("← Back to Results"));
    assert!(text.contains("No description available for this series."));
    assert!(text.contains("2 movies"));

    let first = text.find(" 1. The Matrix (1999)").unwrap();
    let second = text.find(" 2. The Matrix Reloaded (2003)").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_movie_view_shows_details() {
    let mut app = App::new();
    let request = app.dispatch(Intent::SelectMovie {
        id: 603,
        origin: Some(2344),
    });
    settle(&mut app, request, &StaticCatalog).await;
    assert_eq!(app.view(), ViewState::MovieDetail);

    let text = screen(&app, 100, 40);
    assert!(text.contains("← Back to Series"));
    assert!(text.contains("Welcome to the Real World."));
    assert!(text.contains("136 minutes"));
    assert!(text.contains("No description available."));
    assert!(text.contains("Streaming information not available for your region."));
    assert!(!text.contains("Watch Trailer"));
}

// =============================================================================
// Overlays
// =============================================================================

#[test]
fn test_alert_overlay_shows_title_and_message() {
    let mut app = App::new();
    app.show_alert(Alert::error("Could not load trailer.").with_title("Trailer"));

    let text = screen(&app, 100, 30);
    assert!(text.contains(" Trailer "));
    assert!(text.contains("Could not load trailer."));
    assert!(text.contains("[ OK ]"));
}

#[test]
fn test_trailer_overlay_shows_embed_url() {
    let mut app = App::new();
    app.dispatch(Intent::PlayTrailer(TrailerSource::Key("abc123".to_string())));

    let text = screen(&app, 100, 30);
    assert!(text.contains("TRAILER"));
    assert!(text.contains("https://www.youtube.com/embed/abc123?autoplay=1"));

    app.dispatch(Intent::CloseTrailer);
    assert!(!screen(&app, 100, 30).contains("TRAILER"));
}

#[test]
fn test_alert_title_colour_follows_severity() {
    let mut app = App::new();
    app.show_alert(Alert::error("boom"));

    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();

    let area = overlay::alert_area(Rect::new(0, 0, 100, 30));
    // Title starts after the corner and a space
    let cell = &terminal.backend().buffer()[(area.x + 2, area.y)];
    assert_eq!(cell.fg, Theme::ERROR);
}
