//! Blocking alert notifications
//!
//! An alert stays on screen until the user dismisses it; while it is up the
//! application swallows every other key.

mod render;
mod state;

pub use render::render_alert;
pub use state::AlertState;
