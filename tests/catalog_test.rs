//! Catalog HTTP client tests
//!
//! Endpoint paths, response decoding and error mapping against a mock server.

use mockito::{Matcher, Server};
use reeltui::api::{CatalogClient, CatalogError, HttpCatalogClient};
use reeltui::models::{MediaKind, ProviderSummary};

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_parses_results() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "results": [
            {
                "id": 2344,
                "media_type": "collection",
                "name": "The Matrix Collection",
                "poster_path": "/bV9qTVHTVf0gkW0j7p7M0ILD4pG.jpg",
                "vote_average": 0
            },
            {
                "id": 603,
                "media_type": "movie",
                "title": "The Matrix",
                "release_date": "1999-03-30",
                "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                "vote_average": 8.2
            },
            {
                "id": 6384,
                "media_type": "person",
                "name": "Keanu Reeves"
            }
        ]
    }"#;

    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("query".into(), "the matrix".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let results = client.search("the matrix").await.unwrap();

    mock.assert_async().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].kind, MediaKind::Collection);
    assert_eq!(results[0].title, "The Matrix Collection");
    assert_eq!(results[0].display_rating(), "N/A");
    assert_eq!(results[1].kind, MediaKind::Movie);
    assert_eq!(results[1].year(), Some(1999));
}

#[tokio::test]
async fn test_search_without_results_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let results = client.search("nothing").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_null_results_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results": null}"#)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let results = client.search("nothing").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let err = client.search("matrix").await.unwrap_err();
    assert!(matches!(err, CatalogError::Status(500)));
}

#[tokio::test]
async fn test_search_invalid_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let err = client.search("matrix").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_rate_limit_retries_then_gives_up() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("Retry-After", "0")
        .expect(3)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let err = client.search("matrix").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, CatalogError::RateLimited));
}

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_collection_parses_parts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/collection/2344")
        .with_status(200)
        .with_body(
            r#"{
                "id": 2344,
                "name": "The Matrix Collection",
                "overview": "The Matrix franchise.",
                "poster_path": "/poster.jpg",
                "backdrop_path": "/backdrop.jpg",
                "parts": [
                    {"id": 604, "title": "The Matrix Reloaded", "release_date": "2003-05-15"},
                    {"id": 603, "title": "The Matrix", "release_date": "1999-03-30", "poster_path": "/m.jpg"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let collection = client.collection(2344).await.unwrap();

    mock.assert_async().await;
    assert_eq!(collection.name, "The Matrix Collection");
    assert_eq!(collection.parts.len(), 2);
    // Catalog order is kept; sorting is the caller's job
    assert_eq!(collection.parts[0].id, 604);
    assert_eq!(collection.parts[1].poster_path.as_deref(), Some("/m.jpg"));
}

#[tokio::test]
async fn test_collection_missing_parts_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/collection/9485")
        .with_status(200)
        .with_body(r#"{"id": 9485, "name": "The Fast and the Furious Collection"}"#)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let collection = client.collection(9485).await.unwrap();
    assert!(collection.parts.is_empty());
}

#[tokio::test]
async fn test_collection_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/collection/1")
        .with_status(404)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let err = client.collection(1).await.unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// Movies
// =============================================================================

#[tokio::test]
async fn test_movie_parses_providers_and_videos() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/movie/603")
        .with_status(200)
        .with_body(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "tagline": "Welcome to the Real World.",
                "overview": "Set in the 22nd century...",
                "release_date": "1999-03-30",
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "runtime": 136,
                "vote_average": 8.2,
                "watch/providers": {
                    "results": {
                        "DE": {
                            "flatrate": [{"provider_name": "Netflix"}],
                            "rent": [{"provider_name": "Apple TV"}, {"provider_name": "Google Play Movies"}]
                        }
                    }
                },
                "videos": {
                    "results": [
                        {"type": "Featurette", "site": "YouTube", "key": "feat1"},
                        {"type": "Trailer", "site": "YouTube", "key": "abc123"}
                    ]
                }
            }"#,
        )
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let movie = client.movie(603).await.unwrap();

    mock.assert_async().await;
    assert_eq!(movie.genres_text(), "Action, Science Fiction");
    assert_eq!(movie.runtime_text(), "136 minutes");
    assert_eq!(movie.trailer_key("YouTube"), Some("abc123"));
    assert_eq!(
        movie.providers_for("DE").lines(),
        vec![
            "Stream on: Netflix".to_string(),
            "Rent on: Apple TV, Google Play Movies".to_string()
        ]
    );
    assert_eq!(movie.providers_for("US"), ProviderSummary::Unavailable);
}

#[tokio::test]
async fn test_movie_minimal_record() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/movie/42")
        .with_status(200)
        .with_body(r#"{"id": 42, "title": "Untitled"}"#)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let movie = client.movie(42).await.unwrap();
    assert_eq!(movie.genres_text(), "Unknown");
    assert_eq!(movie.runtime_text(), "Unknown");
    assert_eq!(movie.release_text(), "Unknown");
    assert_eq!(movie.display_rating(), "N/A");
    assert!(movie.trailer_key("YouTube").is_none());
}

#[tokio::test]
async fn test_movie_null_sections_tolerated() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/movie/603")
        .with_status(200)
        .with_body(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "genres": null,
                "watch/providers": {
                    "results": {
                        "DE": {"flatrate": null, "buy": [{"provider_name": "Amazon Video"}], "rent": null}
                    }
                },
                "videos": {"results": null}
            }"#,
        )
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let movie = client.movie(603).await.unwrap();
    assert_eq!(movie.genres_text(), "Unknown");
    assert_eq!(
        movie.providers_for("DE").lines(),
        vec!["Buy on: Amazon Video".to_string()]
    );
    assert!(movie.trailer_key("YouTube").is_none());
}

#[tokio::test]
async fn test_collection_null_parts_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/collection/9485")
        .with_status(200)
        .with_body(r#"{"id": 9485, "name": "The Fast and the Furious Collection", "parts": null}"#)
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    let collection = client.collection(9485).await.unwrap();
    assert!(collection.parts.is_empty());
}

// =============================================================================
// Trailers
// =============================================================================

#[tokio::test]
async fn test_trailer_key_lookup() {
    let mut server = Server::new_async().await;
    let _found = server
        .mock("GET", "/movie/671/trailer")
        .with_status(200)
        .with_body(r#"{"trailerKey": "VyHV0BRtdxo"}"#)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/movie/672/trailer")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = HttpCatalogClient::with_base_url(server.url());
    assert_eq!(
        client.trailer_key(671).await.unwrap().as_deref(),
        Some("VyHV0BRtdxo")
    );
    assert_eq!(client.trailer_key(672).await.unwrap(), None);
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let client = HttpCatalogClient::with_base_url("http://127.0.0.1:1");
    let err = client.search("matrix").await.unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}
