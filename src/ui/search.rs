//! Search view: intro text and quick-search suggestions

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{view_block, Theme};
use crate::app::{App, InputMode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = view_block(" FIND A MOVIE OR SERIES ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Search the catalog for movie series and single movies.",
            Theme::text(),
        )),
        Line::from(Span::styled("Quick searches:", Theme::muted())),
    ]);
    frame.render_widget(intro, chunks[0]);

    let focused = app.input_mode == InputMode::Normal;
    let items: Vec<ListItem> = app
        .config
        .quick_searches
        .iter()
        .map(|term| ListItem::new(Line::from(format!("  {}", term))))
        .collect();

    let mut state = ListState::default();
    if focused && !items.is_empty() {
        state.select(Some(app.search.suggestions.selected));
    }

    let list = List::new(items)
        .style(Theme::text())
        .highlight_style(Theme::list_item_selected())
        .highlight_symbol("▸");
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
