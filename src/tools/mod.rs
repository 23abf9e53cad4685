//! Tool registry and invocation framework
//!
//! Exposes plain functions as callable tools with declared schemas:
//! - Explicit parameter declaration through a builder
//! - Argument validation with single-step type coercion
//! - Categorized lookup and deterministic listing
//! - Guarded synchronous execution
//! - Builtin travel tools (time, budget, currency, transit, seasons)

pub mod builder;
pub mod builtin;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use builder::ToolBuilder;
pub use registry::ToolRegistry;
pub use types::{ParameterSpec, Tool, ToolCategory, ToolHandler, ValueKind};
