mod chat;
mod completion_error;
mod context;
mod provider;

pub use chat::{Assistant, ChatMessage, Role, FALLBACK_REPLY};
pub use completion_error::CompletionError;
pub use context::{build_property_context, NO_PROPERTIES_CONTEXT};
pub use provider::{CompletionProvider, OpenAiCompletionProvider};
