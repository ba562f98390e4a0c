use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::notification::render_alert;
use crate::suggest::suggest_render::render_suggestions;

const KEY_HINTS: &str = " Enter submit  Esc quit";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Room for the suggestion dropdown
            Constraint::Length(1), // Hint line
        ])
        .split(frame.area());

        let input_area = layout[0];
        let hint_area = layout[2];
        let dropdown_bounds = Rect {
            height: input_area.height + layout[1].height,
            ..input_area
        };

        frame.render_widget(&self.input.textarea, input_area);
        render_suggestions(self.suggest.suggestions(), frame, input_area, dropdown_bounds);
        self.render_hint_line(frame, hint_area);

        render_alert(&self.alert, frame, frame.area());
    }

    fn render_hint_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => {
                let mut spans = vec![Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))];
                if self.suggest.in_flight_request_id().is_some() {
                    spans.push(Span::styled("  searching…", Style::default().fg(Color::Cyan)));
                }
                Line::from(spans)
            }
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
