#[cfg(test)]
pub mod test_helpers {
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::oneshot;

    use crate::app::App;
    use crate::config::SuggestConfig;
    use crate::suggest::{SuggestError, Suggestion, SuggestionController, SuggestionSource};

    pub type FetchResult = Result<Vec<Suggestion>, SuggestError>;

    /// In-memory source whose responses are released by the test
    ///
    /// Each `fetch(value)` waits on its own gate until the test calls
    /// `release(value, ..)`, so completion order is fully under the test's
    /// control. Gates for the same value queue up in request order. Every
    /// requested value is recorded in order.
    #[derive(Default)]
    pub struct GatedSource {
        gates: Mutex<HashMap<String, VecDeque<oneshot::Sender<FetchResult>>>>,
        requests: Mutex<Vec<String>>,
    }

    impl GatedSource {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Complete the oldest fetch for `value` that is still waiting
        ///
        /// Gates of fetches whose task was cancelled are skipped. Returns false
        /// if no fetch for `value` is waiting.
        pub fn release(&self, value: &str, result: FetchResult) -> bool {
            let mut gates = self.gates.lock().unwrap();
            let Some(queue) = gates.get_mut(value) else {
                return false;
            };

            while let Some(tx) = queue.pop_front() {
                if tx.is_closed() {
                    continue;
                }
                return tx.send(result).is_ok();
            }
            false
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SuggestionSource for GatedSource {
        async fn fetch(&self, value: &str) -> FetchResult {
            let (tx, rx) = oneshot::channel();
            self.requests.lock().unwrap().push(value.to_string());
            self.gates
                .lock()
                .unwrap()
                .entry(value.to_string())
                .or_default()
                .push_back(tx);
            rx.await
                .unwrap_or_else(|_| Err(SuggestError::Network("gate dropped".to_string())))
        }
    }

    /// Source that answers immediately with a fixed result
    pub struct FixedSource(pub FetchResult);

    #[async_trait]
    impl SuggestionSource for FixedSource {
        async fn fetch(&self, _value: &str) -> FetchResult {
            self.0.clone()
        }
    }

    pub fn dune_and_foundation() -> Vec<Suggestion> {
        vec![Suggestion::new("42", "Dune"), Suggestion::new("7", "Foundation")]
    }

    pub fn test_settings() -> SuggestConfig {
        SuggestConfig::default()
    }

    pub fn test_controller(source: Arc<dyn SuggestionSource>) -> SuggestionController {
        SuggestionController::new(&test_settings(), source, tokio::runtime::Handle::current())
    }

    pub fn test_app(source: Arc<dyn SuggestionSource>) -> App {
        App::new(test_controller(source), None)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Let spawned fetch tasks run until the gated source has seen `count`
    /// requests
    pub async fn wait_for_requests(source: &GatedSource, count: usize) {
        wait_until(|| source.requests().len() >= count).await;
    }

    /// Yield to the runtime until `condition` holds
    ///
    /// Panics after two seconds so a broken test fails instead of hanging.
    pub async fn wait_until(mut condition: impl FnMut() -> bool) {
        let start = Instant::now();
        while !condition() {
            assert!(
                start.elapsed() < Duration::from_secs(2),
                "Condition not met within timeout"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    /// Poll the controller until a completion changes the list
    pub async fn poll_until_applied(controller: &mut SuggestionController) {
        let start = Instant::now();
        while !controller.poll_responses() {
            assert!(
                start.elapsed() < Duration::from_secs(2),
                "No response applied within timeout"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    /// Give in-flight tasks a chance to deliver, then drain everything
    pub async fn settle(controller: &mut SuggestionController) -> bool {
        let mut changed = false;
        for _ in 0..10 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            changed |= controller.poll_responses();
        }
        changed
    }
}
