//! Terminal UI components
//!
//! Pure rendering of [`App`] state with ratatui. Renderers never mutate the
//! app; anything actionable on screen is an [`Intent`](crate::app::Intent)
//! already stored in the view data.

pub mod movie;
pub mod overlay;
pub mod results;
pub mod search;
pub mod series;
pub mod theme;

pub use overlay::click_intent;
pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, ViewState};

/// Main render function - dispatches to view-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    overlay::render(frame, area, app);
}

/// Logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("REEL", Theme::title()),
        Span::styled("TUI", Theme::kind_label()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let editing = app.input_mode == InputMode::Editing && app.view() == ViewState::Search;
    let line = if editing {
        let (before, after) = app.search.split_at_cursor();
        Line::from(vec![
            Span::raw("⌕ "),
            Span::raw(before.to_string()),
            Span::styled("│", Theme::input_cursor()),
            Span::raw(after.to_string()),
        ])
    } else if app.search.query.is_empty() {
        Line::from(Span::styled("⌕ Press / to search...", Theme::dimmed()))
    } else {
        Line::from(format!("⌕ {}", app.search.query))
    };

    let search_box = Paragraph::new(line).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if editing {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(" SEARCH ", Theme::title())),
    );
    frame.render_widget(search_box, header_chunks[1]);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.view() {
        ViewState::Search => search::render(frame, area, app),
        ViewState::Results => results::render(frame, area, &app.results),
        ViewState::SeriesDetail => series::render(frame, area, &app.series),
        ViewState::MovieDetail => movie::render(frame, area, &app.movie, app.router.scroll()),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let view_indicator = Span::styled(format!(" {} ", app.view()), Theme::muted());

    let loading = if app.overlay.is_loading() {
        Span::styled(" ⟳ Loading... ", Theme::loading())
    } else {
        Span::raw("")
    };

    let help = Span::styled(format!(" {} ", help_text(app)), Theme::keybind_desc());

    let status_line = Line::from(vec![mode_indicator, view_indicator, loading, Span::raw("│"), help]);
    frame.render_widget(Paragraph::new(status_line).style(Theme::status_bar()), area);
}

fn help_text(app: &App) -> &'static str {
    if app.overlay.alert().is_some() {
        return "Enter:ok  Esc:cancel";
    }
    if app.overlay.trailer().is_some() {
        return "x/Esc:close trailer";
    }
    match (app.view(), app.input_mode) {
        (ViewState::Search, InputMode::Editing) => "Enter:search  ↓:suggestions  Esc:leave input",
        (ViewState::Search, InputMode::Normal) => "Enter:quick search  i:type  q:quit",
        (ViewState::Results, _) => "Enter:open  /:new search  q:quit",
        (ViewState::SeriesDetail, _) => "Enter:details  t:trailer  b:back  q:quit",
        (ViewState::MovieDetail, _) => "t:trailer  j/k:scroll  b:back  q:quit",
    }
}

/// Rect of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Shared bordered block for the main views
pub(crate) fn view_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(title, Theme::title()))
}

/// Centered one-line notice inside `area`
pub(crate) fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let notice = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text.to_string(), style))])
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}
