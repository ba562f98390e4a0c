//! Suggestion controller
//!
//! Runs on the UI thread. Keystrokes go in through [`SuggestionController::on_input`],
//! completions come back through [`SuggestionController::poll_responses`].

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::client::SuggestionSource;
use super::list::RenderedSuggestionList;
use super::pending::PendingRequest;
use super::types::{SuggestError, SuggestResponse};
use super::worker::spawn_fetch;
use crate::config::SuggestConfig;

/// Controller settings derived from the `[suggest]` config section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestSettings {
    pub min_chars: usize,
    pub link_prefix: String,
}

impl From<&SuggestConfig> for SuggestSettings {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            min_chars: config.min_chars,
            link_prefix: config.link_prefix.clone(),
        }
    }
}

/// What `on_input` did with a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Value shorter than the minimum; nothing was requested or changed
    BelowThreshold,
    /// Previous request cancelled, new request issued
    Requested { request_id: u64 },
}

pub struct SuggestionController {
    settings: SuggestSettings,
    source: Arc<dyn SuggestionSource>,
    runtime: Handle,
    pending: PendingRequest,
    list: RenderedSuggestionList,
    response_tx: UnboundedSender<SuggestResponse>,
    response_rx: UnboundedReceiver<SuggestResponse>,
}

impl SuggestionController {
    pub fn new(config: &SuggestConfig, source: Arc<dyn SuggestionSource>, runtime: Handle) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            settings: SuggestSettings::from(config),
            source,
            runtime,
            pending: PendingRequest::new(),
            list: RenderedSuggestionList::new(),
            response_tx,
            response_rx,
        }
    }

    /// Handle a change of the input value
    ///
    /// Values shorter than `min_chars` are ignored entirely, so a list built
    /// from a longer value stays visible. Anything else cancels the pending
    /// request and issues a new one.
    pub fn on_input(&mut self, value: &str) -> InputOutcome {
        if value.chars().count() < self.settings.min_chars {
            return InputOutcome::BelowThreshold;
        }

        let (request_id, cancel_token) = self.pending.replace();
        log::debug!("Request {} for {:?}", request_id, value);

        spawn_fetch(
            &self.runtime,
            Arc::clone(&self.source),
            value.to_string(),
            request_id,
            cancel_token,
            self.response_tx.clone(),
        );

        InputOutcome::Requested { request_id }
    }

    /// Apply every completion queued since the last poll
    ///
    /// Returns true if the rendered list was replaced.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.response_rx.try_recv() {
            changed |= self.handle_response(response);
        }
        changed
    }

    /// Apply one completion; stale or failed completions leave the list alone
    pub(crate) fn handle_response(&mut self, response: SuggestResponse) -> bool {
        let SuggestResponse {
            request_id,
            outcome,
        } = response;

        if !self.pending.is_live(request_id) {
            log::debug!(
                "Ignoring stale response {} (current: {})",
                request_id,
                self.pending.current_request_id()
            );
            return false;
        }
        self.pending.settle(request_id);

        match outcome {
            Ok(suggestions) => {
                log::debug!("Request {} returned {} results", request_id, suggestions.len());
                self.list
                    .replace_all(&suggestions, &self.settings.link_prefix);
                true
            }
            Err(SuggestError::Cancelled) => false,
            Err(SuggestError::Parse(reason)) => {
                log::warn!("Skipping malformed response {}: {}", request_id, reason);
                false
            }
            Err(e) => {
                log::debug!("Request {} failed: {}", request_id, e);
                false
            }
        }
    }

    /// Cancel the in-flight request, if any
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.cancel()
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.pending.in_flight()
    }

    pub fn suggestions(&self) -> &RenderedSuggestionList {
        &self.list
    }

    pub fn settings(&self) -> &SuggestSettings {
        &self.settings
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.pending.cancel();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
