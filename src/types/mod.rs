//! Shared types for assistant communication

pub mod messages;

pub use messages::{ChatMessage, Role};
