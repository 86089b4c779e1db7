//! Catalog requests issued by the flows
//!
//! A flow's synchronous half returns a [`Request`]; the runtime executes it
//! against a [`CatalogClient`] (on a background task in the TUI) and feeds
//! the [`Response`] back to [`App::complete`](super::App::complete).

use super::flow::Ticket;
use crate::api::{CatalogClient, CatalogError};
use crate::models::{Collection, Movie, SearchItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search { ticket: Ticket, query: String },
    Collection { ticket: Ticket, id: u64 },
    Movie { ticket: Ticket, id: u64, origin: Option<u64> },
    TrailerKey { ticket: Ticket, movie_id: u64 },
}

/// Result of a request, by kind
#[derive(Debug)]
pub enum Outcome {
    Search(Result<Vec<SearchItem>, CatalogError>),
    Collection(Result<Collection, CatalogError>),
    Movie(Result<Movie, CatalogError>),
    TrailerKey(Result<Option<String>, CatalogError>),
}

#[derive(Debug)]
pub struct Response {
    pub request: Request,
    pub outcome: Outcome,
}

impl Request {
    pub fn ticket(&self) -> Ticket {
        match self {
            Request::Search { ticket, .. }
            | Request::Collection { ticket, .. }
            | Request::Movie { ticket, .. }
            | Request::TrailerKey { ticket, .. } => *ticket,
        }
    }

    /// Perform the catalog call
    pub async fn execute(self, client: &dyn CatalogClient) -> Response {
        let outcome = match &self {
            Request::Search { query, .. } => Outcome::Search(client.search(query).await),
            Request::Collection { id, .. } => Outcome::Collection(client.collection(*id).await),
            Request::Movie { id, .. } => Outcome::Movie(client.movie(*id).await),
            Request::TrailerKey { movie_id, .. } => {
                Outcome::TrailerKey(client.trailer_key(*movie_id).await)
            }
        };
        Response {
            request: self,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::flow::{FlowKind, FlowTracker};
    use async_trait::async_trait;

    struct EchoCatalog;

    #[async_trait]
    impl CatalogClient for EchoCatalog {
        async fn search(&self, _query: &str) -> Result<Vec<SearchItem>, CatalogError> {
            Ok(Vec::new())
        }

        async fn collection(&self, _id: u64) -> Result<Collection, CatalogError> {
            Err(CatalogError::NotFound)
        }

        async fn movie(&self, _id: u64) -> Result<Movie, CatalogError> {
            Err(CatalogError::Status(500))
        }

        async fn trailer_key(&self, movie_id: u64) -> Result<Option<String>, CatalogError> {
            Ok(Some(format!("key-{}", movie_id)))
        }
    }

    #[test]
    fn test_execute_keeps_request_and_ticket() {
        let mut flows = FlowTracker::new();
        let ticket = flows.issue(FlowKind::Trailer);
        let request = Request::TrailerKey {
            ticket,
            movie_id: 671,
        };

        let response = tokio_test::block_on(request.clone().execute(&EchoCatalog));
        assert_eq!(response.request, request);
        assert_eq!(response.request.ticket(), ticket);
        assert!(matches!(
            response.outcome,
            Outcome::TrailerKey(Ok(Some(ref key))) if key == "key-671"
        ));
    }

    #[test]
    fn test_execute_maps_each_kind() {
        let mut flows = FlowTracker::new();
        let collection = Request::Collection {
            ticket: flows.issue(FlowKind::Series),
            id: 1,
        };
        let movie = Request::Movie {
            ticket: flows.issue(FlowKind::Movie),
            id: 2,
            origin: Some(1),
        };

        let response = tokio_test::block_on(collection.execute(&EchoCatalog));
        assert!(matches!(response.outcome, Outcome::Collection(Err(CatalogError::NotFound))));

        let response = tokio_test::block_on(movie.execute(&EchoCatalog));
        assert!(matches!(response.outcome, Outcome::Movie(Err(CatalogError::Status(500)))));
    }
}
