//! Bounded conversation memory
//!
//! Fixed-size buffer of chat turns with FIFO eviction. The cap keeps a
//! long-running session from growing the model request without bound.

use crate::types::ChatMessage;
use std::collections::VecDeque;

/// Maximum number of stored messages
pub const MAX_HISTORY_MESSAGES: usize = 20;

/// Number of recent messages included in each model request
pub const CONTEXT_WINDOW_MESSAGES: usize = 10;

/// Conversation history with bounded storage
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    /// Stored turns, oldest first
    messages: VecDeque<ChatMessage>,

    /// Maximum allowed messages
    max_messages: usize,
}

impl ConversationMemory {
    /// Create memory with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_MESSAGES)
    }

    /// Create memory with a custom capacity
    pub fn with_capacity(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(max_messages),
            max_messages,
        }
    }

    /// Append a turn, evicting the oldest when at capacity
    pub fn push(&mut self, message: ChatMessage) {
        if self.messages.len() >= self.max_messages {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// The last `n` turns, oldest first
    pub fn recent(&self, n: usize) -> Vec<&ChatMessage> {
        let start = self.messages.len().saturating_sub(n);
        self.messages.range(start..).collect()
    }

    /// Number of stored turns
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the memory is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every stored turn
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}
