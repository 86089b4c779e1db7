//! Trailer playback flow

use super::error::{FlowError, TRAILER_FAILED};
use super::flow::{FlowKind, Ticket};
use super::intent::TrailerSource;
use super::overlay::TrailerTarget;
use super::request::Request;
use super::App;
use crate::api::CatalogError;

/// Title of alerts raised by trailer lookups
pub const TRAILER_TITLE: &str = "Trailer";

impl App {
    /// Open the trailer overlay on `video_key`
    pub fn play_trailer(&mut self, video_key: &str) {
        let target = TrailerTarget {
            video_key: video_key.to_string(),
            embed_url: self.config.embed_url_for(video_key),
        };
        self.overlay.open_trailer(target);
    }

    /// Play a trailer given either its key or the id of its movie
    pub fn show_movie_trailer(&mut self, source: TrailerSource) -> Option<Request> {
        match source {
            TrailerSource::Key(key) => {
                self.play_trailer(&key);
                None
            }
            TrailerSource::Movie(movie_id) => {
                let ticket = self.flows.issue(FlowKind::Trailer);
                tracing::info!(movie_id, generation = ticket.generation, "trailer lookup");
                Some(Request::TrailerKey { ticket, movie_id })
            }
        }
    }

    /// Close the overlay; safe when nothing is playing
    pub fn close_trailer(&mut self) {
        self.overlay.close_trailer();
    }

    pub(super) fn complete_trailer(
        &mut self,
        ticket: Ticket,
        movie_id: u64,
        result: Result<Option<String>, CatalogError>,
    ) {
        if !self.flows.settle(ticket) {
            tracing::debug!(movie_id, "discarding stale trailer lookup");
            return;
        }

        match result {
            Ok(Some(key)) if !key.is_empty() => self.play_trailer(&key),
            Ok(_) => {
                tracing::info!(movie_id, "no trailer key");
                self.show_alert(FlowError::MissingData.to_alert().with_title(TRAILER_TITLE));
            }
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "trailer lookup failed");
                let alert = FlowError::network(TRAILER_FAILED, e).to_alert();
                self.show_alert(alert.with_title(TRAILER_TITLE));
            }
        }
    }
}
