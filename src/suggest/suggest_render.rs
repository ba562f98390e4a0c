//! Suggestion list rendering
//!
//! Draws the rendered suggestion links as a dropdown under the input field:
//! the label in full brightness, the link target dimmed after it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::list::RenderedSuggestionList;
use crate::widgets::popup;

const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_POPUP_WIDTH: usize = 24;
const MAX_POPUP_WIDTH: usize = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const HREF_SPACING: usize = 2;

/// Render the suggestion dropdown below `input_area`, staying inside `bounds`
pub fn render_suggestions(
    list: &RenderedSuggestionList,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) {
    if list.is_empty() {
        return;
    }

    let links = &list.links()[..list.len().min(MAX_VISIBLE_SUGGESTIONS)];

    let max_label_width = links.iter().map(|l| l.text.width()).max().unwrap_or(0);
    let content_width = links
        .iter()
        .map(|l| max_label_width + HREF_SPACING + l.href.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);

    let popup_width = content_width as u16 + POPUP_PADDING;
    let popup_height = links.len() as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(input_area, bounds, popup_width, popup_height, POPUP_OFFSET_X);
    if area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let items: Vec<ListItem> = links
        .iter()
        .map(|link| {
            let padding = " ".repeat(max_label_width.saturating_sub(link.text.width()) + HREF_SPACING);
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", link.text), Style::default().fg(Color::White)),
                Span::raw(padding),
                Span::styled(link.href.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = if list.len() > MAX_VISIBLE_SUGGESTIONS {
        format!(" Suggestions ({} of {}) ", MAX_VISIBLE_SUGGESTIONS, list.len())
    } else {
        " Suggestions ".to_string()
    };

    popup::clear_area(frame, area);

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(widget, area);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
