use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dwell_core::{DwellError, ParameterId, Sample, TrendSource, Window};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DwellError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    sample_rules: HashMap<ParameterId, MockBehavior<Vec<Sample>>>,
    requests: Vec<(ParameterId, Window)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `retrieve_samples` calls for a specific parameter.
    pub async fn set_samples_behavior(
        &self,
        parameter: ParameterId,
        behavior: MockBehavior<Vec<Sample>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.sample_rules.insert(parameter, behavior);
    }

    /// Return a copy of the request log, oldest first.
    pub async fn get_requests(&self) -> Vec<(ParameterId, Window)> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.sample_rules.clear();
        guard.requests.clear();
    }
}

/// A trend source that defers all behavior to an external controller.
///
/// Parameters without a configured behavior have no trending data.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TrendSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TrendSource>, controller)
    }
}

#[async_trait]
impl TrendSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn retrieve_samples(
        &self,
        parameter: &ParameterId,
        window: &Window,
    ) -> Result<Vec<Sample>, DwellError> {
        // Log the request and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((parameter.clone(), *window));
            guard.sample_rules.get(parameter).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(samples)) => Ok(samples),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(Vec::new()),
        }
    }
}
