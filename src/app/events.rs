use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The alert blocks everything until dismissed
        if self.alert.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert.dismiss();
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        if self.input.textarea.input(key) {
            self.on_value_changed();
        }
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                true
            }
            KeyCode::Esc => {
                self.quit();
                true
            }
            // Ctrl+M and Ctrl+J would insert a newline into the field
            KeyCode::Enter => {
                self.submit();
                true
            }
            KeyCode::Char('m' | 'j') if ctrl => {
                self.submit();
                true
            }
            // Tab would insert spaces into the single-line field
            KeyCode::Tab | KeyCode::BackTab => true,
            _ => false,
        }
    }

    /// Insert pasted text; only the first non-empty line is kept
    ///
    /// Terminals may separate pasted lines with a lone `\r`.
    pub fn handle_paste_event(&mut self, text: String) {
        if self.alert.is_visible() {
            return;
        }

        let Some(line) = text.split(['\r', '\n']).find(|line| !line.is_empty()) else {
            return;
        };

        self.input.textarea.insert_str(line);
        self.on_value_changed();
    }

    fn on_value_changed(&mut self) {
        let value = self.input.value().to_string();
        self.suggest.on_input(&value);
    }
}
