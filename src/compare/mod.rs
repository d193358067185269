mod orchestrator;
mod state;

pub use orchestrator::{ComparisonOrchestrator, ComparisonWatcher};
pub use state::{ComparisonSnapshot, Phase, Slot};
