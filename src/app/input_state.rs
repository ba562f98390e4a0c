use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Single-line text field bound to the suggestion controller
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Title ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        textarea.set_placeholder_text("Start typing a book title, author or ISBN");
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
