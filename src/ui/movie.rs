//! Movie detail page

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{render_notice, view_block, Theme};
use crate::app::{MoviePage, MovieView};

pub fn render(frame: &mut Frame, area: Rect, view: &MovieView, scroll: u16) {
    match view {
        MovieView::Loaded(page) => render_page(frame, area, page, scroll),
        MovieView::Loading { message, .. } => {
            let block = view_block(" MOVIE ".to_string());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_notice(frame, inner, message, Theme::loading());
        }
        MovieView::Idle => {
            let block = view_block(" MOVIE ".to_string());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_notice(frame, inner, "No movie selected", Theme::dimmed());
        }
    }
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Theme::muted()),
        Span::raw(value.to_string()),
    ])
}

fn render_page(frame: &mut Frame, area: Rect, page: &MoviePage, scroll: u16) {
    let mut lines = vec![
        Line::from(Span::styled(page.back.label(), Theme::link())),
        Line::from(""),
        Line::from(Span::styled(page.title.clone(), Theme::title())),
    ];
    if let Some(tagline) = &page.tagline {
        lines.push(Line::from(Span::styled(tagline.clone(), Theme::tagline())));
    }
    lines.push(Line::from(""));
    lines.push(field("Released", &page.release_date));
    lines.push(field("Genres", &page.genres));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Rating"), Theme::muted()),
        Span::styled(format!("★ {}", page.rating), Theme::rating()),
    ]));
    lines.push(field("Runtime", &page.runtime));
    lines.push(Line::from(""));
    lines.push(Line::from(page.overview.clone()));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Where to watch", Theme::title())));
    lines.extend(page.providers.lines().into_iter().map(Line::from));

    if page.trailer.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("▶ Watch Trailer", Theme::link()),
            Span::styled("  (t)", Theme::keybind_desc()),
        ]));
    }
    if let Some(backdrop) = &page.backdrop_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(backdrop.clone(), Theme::dimmed())));
    }

    let paragraph = Paragraph::new(lines)
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(view_block(" MOVIE ".to_string()));
    frame.render_widget(paragraph, area);
}
