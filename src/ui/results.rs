//! Search results list

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::{render_notice, view_block, Theme};
use crate::app::{ResultCard, ResultsBody, ResultsView};

pub fn render(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let block = view_block(format!(" {} ({}) ", view.heading(), view.count()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &view.body {
        ResultsBody::Loading(message) => render_notice(frame, inner, message, Theme::loading()),
        ResultsBody::Empty(message) => render_notice(frame, inner, message, Theme::dimmed()),
        ResultsBody::Failed(message) => render_notice(frame, inner, message, Theme::error()),
        ResultsBody::Items(cards) => {
            let items: Vec<ListItem> = cards.iter().map(card_item).collect();
            let mut state = ListState::default();
            state.select(Some(view.list.selected));

            let list = List::new(items)
                .style(Theme::text())
                .highlight_style(Theme::list_item_selected())
                .highlight_symbol("▸ ");
            frame.render_stateful_widget(list, inner, &mut state);
        }
    }
}

// Format: Title (Year)  [Series]  ★ 8.2
fn card_item(card: &ResultCard) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw(card.title.clone()),
        Span::styled(format!(" ({})", card.year), Theme::year()),
        Span::raw("  "),
        Span::styled(format!("[{}]", card.kind.label()), Theme::kind_label()),
        Span::raw("  "),
        Span::styled(format!("★ {}", card.rating), Theme::rating()),
    ]))
}
