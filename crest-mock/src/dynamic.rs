use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crest_core::{CrestError, PriceSeries, SeriesSource};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(CrestError),
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<String, MockBehavior<PriceSeries>>,
    requests: Vec<String>,
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `series` calls for a specific symbol.
    pub fn set_series_behavior(&self, symbol: &str, behavior: MockBehavior<PriceSeries>) {
        lock(&self.state)
            .series_rules
            .insert(symbol.to_string(), behavior);
    }

    /// Symbols requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        lock(&self.state).requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub fn clear_all_behaviors(&self) {
        let mut guard = lock(&self.state);
        guard.series_rules.clear();
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Symbols without a configured behavior are `NotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SeriesSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesSource>, controller)
    }
}

impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn series(&self, symbol: &str) -> Result<PriceSeries, CrestError> {
        let behavior = {
            let mut guard = lock(&self.state);
            guard.requests.push(symbol.to_string());
            guard.series_rules.get(symbol).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(CrestError::not_found(format!(
                "series for {symbol} at {}",
                self.name
            ))),
        }
    }
}
