//! Pluggable chat model backends
//!
//! The assistant talks to a model through the [`ChatBackend`] trait and
//! never cares which implementation answers. Providers are selected by
//! name from configuration; the demo ships a deterministic scripted
//! backend, and a real inference client slots in behind the same trait.

pub mod scripted;

use crate::errors::{AssistantError, Result};
use crate::types::ChatMessage;
use async_trait::async_trait;

pub use scripted::ScriptedBackend;

/// A chat-completion backend the assistant delegates to
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce an assistant reply for the given conversation
    ///
    /// `messages` is the full request: system prompt, recent history,
    /// and the current user turn, in order.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Backend display name, shown in status output
    fn name(&self) -> &str;
}

/// Build a backend from its configured provider name
pub fn from_provider(provider: &str) -> Result<Box<dyn ChatBackend>> {
    match provider {
        "scripted" => Ok(Box::new(ScriptedBackend::new())),
        other => Err(AssistantError::Config(format!(
            "unsupported backend provider: {other}"
        ))),
    }
}
