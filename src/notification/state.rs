use crate::validate::Notifier;

/// Currently displayed alert, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Notifier for AlertState {
    fn alert(&mut self, message: &str) {
        self.show(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alert_is_hidden() {
        let alert = AlertState::new();
        assert!(!alert.is_visible());
        assert_eq!(alert.message(), None);
    }

    #[test]
    fn test_show_and_dismiss() {
        let mut alert = AlertState::new();
        alert.show("input is invalid");
        assert!(alert.is_visible());
        assert_eq!(alert.message(), Some("input is invalid"));

        alert.dismiss();
        assert!(!alert.is_visible());
    }

    #[test]
    fn test_notifier_shows_message() {
        let mut alert = AlertState::new();
        Notifier::alert(&mut alert, "input is invalid");
        assert_eq!(alert.message(), Some("input is invalid"));
    }

    #[test]
    fn test_newer_alert_replaces_older() {
        let mut alert = AlertState::new();
        alert.show("first");
        alert.show("second");
        assert_eq!(alert.message(), Some("second"));
    }
}
