use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::AlertState;
use crate::widgets::popup;

const MIN_ALERT_WIDTH: u16 = 30;
const ALERT_PADDING: u16 = 6;
const ALERT_HEIGHT: u16 = 6;
const DISMISS_HINT: &str = "Enter/Esc to dismiss";

/// Render the alert centered over `area` when one is visible
pub fn render_alert(alert: &AlertState, frame: &mut Frame, area: Rect) {
    let Some(message) = alert.message() else {
        return;
    };

    let width = (message.width() as u16 + ALERT_PADDING).max(MIN_ALERT_WIDTH);
    let popup_area = popup::centered_popup(area, width, ALERT_HEIGHT);

    popup::clear_area(frame, popup_area);

    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(DISMISS_HINT, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alert ")
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(paragraph, popup_area);
}
