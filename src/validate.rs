//! Submit-time validation
//!
//! A submission is accepted only when the typed value exactly equals one of
//! the reference values currently offered. Anything else raises the
//! "input is invalid" alert and blocks the submit.

use crate::suggest::RenderedSuggestionList;

pub const INVALID_INPUT_MESSAGE: &str = "input is invalid";

/// Receiver of user-facing alerts
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Acceptable values for the input field
///
/// Mirrors the labels of the rendered suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    values: Vec<String>,
}

impl ReferenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace all values with the labels of `list`
    pub fn mirror(&mut self, list: &RenderedSuggestionList) {
        self.values.clear();
        self.values.extend(list.labels().map(str::to_string));
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check `input` against the reference values
///
/// Comparison is exact: no case folding, no trimming. Returns true when the
/// submit may proceed; otherwise alerts through `notifier` and returns false.
pub fn validate_submission(
    input: &str,
    reference: &ReferenceList,
    notifier: &mut impl Notifier,
) -> bool {
    if reference.values().iter().any(|value| value == input) {
        return true;
    }

    log::debug!("Rejected submission {:?}", input);
    notifier.alert(INVALID_INPUT_MESSAGE);
    false
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
