//! Suggestion fetch tasks
//!
//! Each request runs as its own task on the tokio runtime. The task races the
//! fetch against its cancellation token and reports back over the response
//! channel; it never touches UI state.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::client::SuggestionSource;
use super::types::{SuggestError, SuggestResponse, Suggestion};

/// Fetch suggestions unless the token is cancelled first
///
/// Cancellation is checked before the request starts and wins any tie with a
/// completed fetch. Dropping the fetch future aborts the HTTP request on our
/// side; the server may still finish its work.
pub async fn fetch_with_cancel(
    source: &dyn SuggestionSource,
    value: &str,
    cancel_token: &CancellationToken,
) -> Result<Vec<Suggestion>, SuggestError> {
    if cancel_token.is_cancelled() {
        return Err(SuggestError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel_token.cancelled() => Err(SuggestError::Cancelled),
        result = source.fetch(value) => result,
    }
}

/// Spawn a fetch task for `value` tagged with `request_id`
pub fn spawn_fetch(
    runtime: &Handle,
    source: Arc<dyn SuggestionSource>,
    value: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: UnboundedSender<SuggestResponse>,
) {
    runtime.spawn(async move {
        let outcome = fetch_with_cancel(source.as_ref(), &value, &cancel_token).await;

        if response_tx
            .send(SuggestResponse {
                request_id,
                outcome,
            })
            .is_err()
        {
            // Controller dropped, nobody is listening anymore
            log::debug!("Dropping response for request {}", request_id);
        }
    });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
