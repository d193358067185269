use crate::assistant::{Assistant, CompletionProvider};
use crate::compare::ComparisonOrchestrator;
use crate::domain::SelectionOption;
use crate::prediction::PricePredictor;
use std::sync::Arc;
use tokio::runtime::Handle;

/// What every request handler gets: the comparison, the assistant, and a
/// handle for driving their async work from the blocking server threads.
pub struct AppState {
    pub runtime: Handle,
    pub orchestrator: Arc<ComparisonOrchestrator>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(
        runtime: Handle,
        options: Vec<SelectionOption>,
        predictor: Arc<dyn PricePredictor>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            runtime,
            orchestrator: Arc::new(ComparisonOrchestrator::new(options, predictor)),
            assistant: Arc::new(Assistant::new(provider)),
        }
    }
}
