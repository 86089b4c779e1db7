//! Series detail: header block and the ordered list of parts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_notice, view_block, Theme};
use crate::app::{BackTarget, PartEntry, SeriesPage, SeriesView};

pub fn render(frame: &mut Frame, area: Rect, view: &SeriesView) {
    match view {
        SeriesView::Idle => {
            let block = view_block(" SERIES ".to_string());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_notice(frame, inner, "No series selected", Theme::dimmed());
        }
        SeriesView::Loading { message, .. } => {
            let block = view_block(" SERIES ".to_string());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_notice(frame, inner, message, Theme::loading());
        }
        SeriesView::Loaded(page) => render_page(frame, area, page),
    }
}

fn render_page(frame: &mut Frame, area: Rect, page: &SeriesPage) {
    let block = view_block(format!(" {} ", page.header.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(BackTarget::Results.label(), Theme::link())),
        Line::from(vec![
            Span::styled(page.header.name.clone(), Theme::title()),
            Span::styled(
                format!("  {} movies", page.header.part_count),
                Theme::muted(),
            ),
        ]),
        Line::from(page.header.overview.clone()),
    ];
    if let Some(backdrop) = &page.header.backdrop_url {
        lines.push(Line::from(Span::styled(backdrop.clone(), Theme::dimmed())));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).style(Theme::text()),
        chunks[0],
    );

    let items: Vec<ListItem> = page
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry_item(i, entry))
        .collect();
    let mut state = ListState::default();
    state.select(Some(page.list.selected));

    let list = List::new(items)
        .style(Theme::text())
        .highlight_style(Theme::list_item_selected())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn entry_item(index: usize, entry: &PartEntry) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:>2}. ", index + 1), Theme::muted()),
        Span::raw(entry.title.clone()),
        Span::styled(format!(" ({})", entry.year), Theme::year()),
        Span::styled("   ▶ Trailer  ⓘ Details", Theme::keybind_desc()),
    ]))
}
