use thiserror::Error;

/// One autocomplete option as returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A rendered suggestion: visible text plus the target it navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionLink {
    pub text: String,
    pub href: String,
}

impl SuggestionLink {
    pub fn from_suggestion(suggestion: &Suggestion, link_prefix: &str) -> Self {
        Self {
            text: suggestion.label.clone(),
            href: format!("{}{}", link_prefix, suggestion.id),
        }
    }
}

/// Errors that can occur while fetching suggestions
///
/// None of these reach the user; the controller logs them and keeps the
/// last rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Transport failure (connection refused, reset, body read error)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Body was not a `{"results": [[id, label], ...]}` document
    #[error("Malformed suggestion payload: {0}")]
    Parse(String),

    /// A newer keystroke superseded this request
    #[error("Request cancelled")]
    Cancelled,
}

/// Completion message sent from a fetch task back to the UI loop
#[derive(Debug)]
pub struct SuggestResponse {
    /// Request this completion belongs to
    pub request_id: u64,
    pub outcome: Result<Vec<Suggestion>, SuggestError>,
}
