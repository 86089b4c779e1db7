//! Overlays composed above the main view
//!
//! The loading indicator, the alert dialog and the trailer modal. None of
//! them touch the active main view; they only stack on top of it.

use std::fmt;

/// Default alert title
pub const DEFAULT_ALERT_TITLE: &str = "Notice";

/// Alert severity; drives the title colour only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// Alert dialog content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub title: String,
    pub severity: Severity,
}

impl Alert {
    /// Informational alert with the default title
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: DEFAULT_ALERT_TITLE.to_string(),
            severity: Severity::Info,
        }
    }

    /// Error alert with the default title
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::info(message)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Ways the user can dismiss the alert dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDismiss {
    /// The dialog's OK action
    Acknowledge,
    /// Interaction with the area around the dialog
    Backdrop,
    /// Escape
    Cancel,
}

impl fmt::Display for AlertDismiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertDismiss::Acknowledge => "acknowledge",
            AlertDismiss::Backdrop => "backdrop",
            AlertDismiss::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// What the trailer modal is playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerTarget {
    pub video_key: String,
    /// Embeddable URL with autoplay enabled
    pub embed_url: String,
}

/// Owns loading, alert and trailer visibility
#[derive(Debug, Default)]
pub struct OverlayManager {
    loading: bool,
    alert: Option<Alert>,
    trailer: Option<TrailerTarget>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Show `alert`, replacing any alert already visible
    pub fn show_alert(&mut self, alert: Alert) {
        tracing::info!(severity = ?alert.severity, message = %alert.message, "alert");
        self.alert = Some(alert);
    }

    pub fn close_alert(&mut self) {
        self.alert = None;
    }

    /// Every dismissal path ends in [`close_alert`](Self::close_alert)
    pub fn dismiss_alert(&mut self, reason: AlertDismiss) {
        if self.alert.is_some() {
            tracing::debug!(%reason, "alert dismissed");
        }
        self.close_alert();
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn open_trailer(&mut self, target: TrailerTarget) {
        tracing::info!(key = %target.video_key, "trailer opened");
        self.trailer = Some(target);
    }

    /// Drop the playback target entirely, not just the modal
    pub fn close_trailer(&mut self) {
        if let Some(target) = self.trailer.take() {
            tracing::info!(key = %target.video_key, "trailer closed");
        }
    }

    pub fn trailer(&self) -> Option<&TrailerTarget> {
        self.trailer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_defaults() {
        let alert = Alert::info("No movies found for this series.");
        assert_eq!(alert.title, "Notice");
        assert!(!alert.is_error());

        let alert = Alert::error("Could not load trailer.").with_title("Trailer");
        assert_eq!(alert.title, "Trailer");
        assert!(alert.is_error());
    }

    #[test]
    fn test_every_dismissal_closes_alert() {
        let mut overlay = OverlayManager::new();
        for reason in [AlertDismiss::Acknowledge, AlertDismiss::Backdrop, AlertDismiss::Cancel] {
            overlay.show_alert(Alert::info("hello"));
            overlay.dismiss_alert(reason);
            assert!(overlay.alert().is_none(), "{} should close the alert", reason);
        }
    }

    #[test]
    fn test_close_trailer_when_never_opened() {
        let mut overlay = OverlayManager::new();
        overlay.close_trailer();
        assert!(overlay.trailer().is_none());
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut overlay = OverlayManager::new();
        overlay.set_loading(true);
        overlay.open_trailer(TrailerTarget {
            video_key: "abc123".into(),
            embed_url: "https://www.youtube.com/embed/abc123?autoplay=1".into(),
        });
        overlay.show_alert(Alert::error("boom"));

        overlay.close_alert();
        assert!(overlay.is_loading());
        assert_eq!(overlay.trailer().map(|t| t.video_key.as_str()), Some("abc123"));
    }
}
