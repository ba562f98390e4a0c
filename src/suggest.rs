//! Suggestion fetching and the rendered suggestion list
//!
//! The controller owns a single pending-request slot. Every accepted
//! keystroke cancels the previous request and starts a new one; completions
//! travel back over a channel tagged with their request id, and only the
//! current request may replace the list.

pub mod client;
pub mod controller;
pub mod list;
pub mod payload;
pub mod pending;
pub mod suggest_render;
mod types;
pub mod worker;

pub use client::{SuggestClient, SuggestionSource};
pub use controller::{InputOutcome, SuggestSettings, SuggestionController};
pub use list::RenderedSuggestionList;
pub use pending::PendingRequest;
pub use types::{SuggestError, SuggestResponse, Suggestion, SuggestionLink};
