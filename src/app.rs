//! Terminal host for the autocomplete widget
//!
//! Owns the input field, the suggestion controller, the reference list the
//! validator checks against, and the alert. Built once per run.

mod events;
mod input_state;
mod render;
mod state;

pub use input_state::InputState;
pub use state::{App, Submission};
