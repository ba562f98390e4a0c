//! hinter: live autocomplete for a book-title field.
//!
//! As the user types, a [`suggest::SuggestionController`] fetches matching
//! titles from a suggestion endpoint, cancelling the previous request on every
//! keystroke so only the latest answer can reach the screen. On submit,
//! [`validate::validate_submission`] accepts the value only when it exactly
//! matches one of the offered suggestions.

pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod suggest;
pub mod validate;
pub mod widgets;

#[cfg(test)]
mod test_utils;
