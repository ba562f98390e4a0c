use super::input_state::InputState;
use crate::notification::AlertState;
use crate::suggest::SuggestionController;
use crate::validate::{ReferenceList, validate_submission};

/// An accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub value: String,
    /// Link target of the rendered suggestion with the same label, if any
    pub href: Option<String>,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestionController,
    pub reference: ReferenceList,
    pub alert: AlertState,
    /// Shown in the hint line when the config file could not be used
    pub config_warning: Option<String>,
    pub(super) submission: Option<Submission>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(suggest: SuggestionController, config_warning: Option<String>) -> Self {
        Self {
            input: InputState::new(),
            suggest,
            reference: ReferenceList::new(),
            alert: AlertState::new(),
            config_warning,
            submission: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Apply finished suggestion requests
    ///
    /// Keeps the reference list in step with the rendered suggestions.
    /// Returns true if the list changed.
    pub fn poll_suggestions(&mut self) -> bool {
        if !self.suggest.poll_responses() {
            return false;
        }
        self.reference.mirror(self.suggest.suggestions());
        true
    }

    /// Try to submit the current value
    ///
    /// On success the submission is recorded and the app quits; otherwise the
    /// validator has raised the alert and nothing else changes.
    pub fn submit(&mut self) -> bool {
        let value = self.input.value().to_string();
        if !validate_submission(&value, &self.reference, &mut self.alert) {
            return false;
        }

        let href = self
            .suggest
            .suggestions()
            .find_by_label(&value)
            .map(|link| link.href.clone());
        self.submission = Some(Submission { value, href });
        self.quit();
        true
    }

    pub(super) fn quit(&mut self) {
        self.suggest.cancel_pending();
        self.should_quit = true;
    }
}
