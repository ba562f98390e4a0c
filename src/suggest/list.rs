use super::types::{Suggestion, SuggestionLink};

/// Links from the most recent successful suggestion response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSuggestionList {
    links: Vec<SuggestionLink>,
}

impl RenderedSuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the list and rebuild it from `suggestions`, keeping their order
    pub fn replace_all(&mut self, suggestions: &[Suggestion], link_prefix: &str) {
        self.links.clear();
        self.links.extend(
            suggestions
                .iter()
                .map(|s| SuggestionLink::from_suggestion(s, link_prefix)),
        );
    }

    pub fn links(&self) -> &[SuggestionLink] {
        &self.links
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.text.as_str())
    }

    /// First link whose visible text is exactly `label`
    pub fn find_by_label(&self, label: &str) -> Option<&SuggestionLink> {
        self.links.iter().find(|link| link.text == label)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
