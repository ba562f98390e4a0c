//! The single pending-request slot
//!
//! Holds the id and cancellation token of the one request that is allowed to
//! update the suggestion list. `replace()` cancels the previous occupant and
//! installs a new one in a single step.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct PendingRequest {
    /// Id of the most recently issued request, incremented for each new one
    request_id: u64,
    /// Token of the live request; `None` once it settled or was cancelled
    token: Option<CancellationToken>,
}

impl PendingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the current request (if any) and start tracking a new one
    ///
    /// Returns the new request id and a token the fetch task must observe.
    pub fn replace(&mut self) -> (u64, CancellationToken) {
        self.cancel();
        self.request_id = self.request_id.wrapping_add(1);
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        (self.request_id, token)
    }

    /// Cancel the live request
    ///
    /// Returns false when there was nothing to cancel. Calling this on a
    /// settled or already-cancelled request is a no-op.
    pub fn cancel(&mut self) -> bool {
        match self.token.take() {
            Some(token) => {
                token.cancel();
                log::debug!("Cancelled request {}", self.request_id);
                true
            }
            None => false,
        }
    }

    /// Whether `request_id` is the current request and has not been cancelled
    pub fn is_live(&self, request_id: u64) -> bool {
        request_id == self.request_id
            && self
                .token
                .as_ref()
                .is_some_and(|token| !token.is_cancelled())
    }

    /// Mark the current request as finished
    ///
    /// Ignored for any id other than the current one.
    pub fn settle(&mut self, request_id: u64) {
        if request_id == self.request_id {
            self.token = None;
        }
    }

    /// Id of the live request, if one is in flight
    pub fn in_flight(&self) -> Option<u64> {
        self.token.as_ref().map(|_| self.request_id)
    }

    /// Id of the most recently issued request (0 before the first one)
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod pending_tests;
