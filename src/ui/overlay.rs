//! Overlays drawn over any main view: trailer modal, alert dialog and the
//! loading badge. Also maps mouse clicks on the backdrop to intents.

use ratatui::{
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Theme};
use crate::app::{Alert, AlertDismiss, App, Intent, TrailerTarget};

const ALERT_WIDTH: u16 = 60;
const ALERT_HEIGHT: u16 = 8;
const TRAILER_WIDTH: u16 = 72;
const TRAILER_HEIGHT: u16 = 9;

pub fn alert_area(area: Rect) -> Rect {
    centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area)
}

pub fn trailer_area(area: Rect) -> Rect {
    centered_rect(TRAILER_WIDTH, TRAILER_HEIGHT, area)
}

/// Draw every active overlay; the alert stays on top
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.overlay.is_loading() && app.overlay.alert().is_none() {
        render_loading(frame, area);
    }
    if let Some(target) = app.overlay.trailer() {
        render_trailer(frame, trailer_area(area), target);
    }
    if let Some(alert) = app.overlay.alert() {
        render_alert(frame, alert_area(area), alert);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let width = 16.min(area.width);
    let badge = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 3,
        width,
        height: 1.min(area.height.saturating_sub(3)),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" ⟳ Loading... ", Theme::loading()))
            .style(Theme::status_bar())
            .alignment(Alignment::Center),
        badge,
    );
}

fn render_trailer(frame: &mut Frame, area: Rect, target: &TrailerTarget) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("▶ Now playing trailer", Theme::title())),
        Line::from(""),
        Line::from(Span::styled(target.embed_url.clone(), Theme::link())),
        Line::from(""),
        Line::from(vec![
            Span::styled("x", Theme::keybind()),
            Span::styled(" / ", Theme::keybind_desc()),
            Span::styled("Esc", Theme::keybind()),
            Span::styled(" close", Theme::keybind_desc()),
        ]),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Theme::border_focused())
                .title(Span::styled(" TRAILER ", Theme::title()))
                .style(Theme::text()),
        );
    frame.render_widget(modal, area);
}

fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(alert.message.clone())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ OK ]", Theme::list_item_selected()),
            Span::styled("  Enter ok · Esc cancel", Theme::keybind_desc()),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(
                    format!(" {} ", alert.title),
                    Theme::alert_title(alert.severity),
                ))
                .style(Theme::input()),
        );
    frame.render_widget(dialog, area);
}

/// Intent for a left click at (`column`, `row`) in a frame of size `area`.
///
/// Clicking outside an open dialog dismisses it, like clicking a modal's
/// backdrop; the alert takes precedence over the trailer.
pub fn click_intent(app: &App, area: Rect, column: u16, row: u16) -> Option<Intent> {
    let position = Position::new(column, row);
    if app.overlay.alert().is_some() {
        return (!alert_area(area).contains(position))
            .then_some(Intent::DismissAlert(AlertDismiss::Backdrop));
    }
    if app.overlay.trailer().is_some() && !trailer_area(area).contains(position) {
        return Some(Intent::CloseTrailer);
    }
    None
}
