//! Explicit tool declaration
//!
//! Registration metadata that a dynamic language would derive from a
//! function signature is declared here instead: name, typed parameter
//! specs, return shape, and the handler closure.

use crate::errors::ToolError;
use crate::tools::types::{ParameterSpec, Tool, ToolCategory, ToolHandler, ValueKind};
use serde_json::{Map, Value};

/// Builder producing an immutable [`Tool`]
///
/// Defaults mirror the registration surface: category `Utility`,
/// string return, empty descriptions.
pub struct ToolBuilder {
    name: String,
    description: String,
    category: ToolCategory,
    parameters: Vec<ParameterSpec>,
    return_kind: ValueKind,
    return_description: String,
    handler: Option<ToolHandler>,
}

impl Tool {
    /// Start declaring a tool with the given name
    pub fn builder(name: impl Into<String>) -> ToolBuilder {
        ToolBuilder::new(name)
    }
}

impl ToolBuilder {
    /// Create a builder for a tool with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: ToolCategory::Utility,
            parameters: Vec::new(),
            return_kind: ValueKind::String,
            return_description: String::new(),
            handler: None,
        }
    }

    /// Set the human-readable description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the domain category
    pub fn category(mut self, category: ToolCategory) -> Self {
        self.category = category;
        self
    }

    /// Append one parameter spec; declaration order is preserved
    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Declare the return kind and its description
    pub fn returns(mut self, kind: ValueKind, description: impl Into<String>) -> Self {
        self.return_kind = kind;
        self.return_description = description.into();
        self
    }

    /// Attach the invocation handler
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Finalize the declaration
    ///
    /// Rejects empty names, duplicate parameter names, required
    /// parameters carrying defaults, and missing handlers.
    pub fn build(self) -> std::result::Result<Tool, ToolError> {
        if self.name.trim().is_empty() {
            return Err(ToolError::InvalidDefinition {
                name: self.name,
                reason: "tool name must not be empty".to_string(),
            });
        }

        for (index, param) in self.parameters.iter().enumerate() {
            if self.parameters[..index].iter().any(|p| p.name == param.name) {
                return Err(ToolError::InvalidDefinition {
                    name: self.name,
                    reason: format!("duplicate parameter name '{}'", param.name),
                });
            }
            if param.required && param.default.is_some() {
                return Err(ToolError::InvalidDefinition {
                    name: self.name,
                    reason: format!("required parameter '{}' carries a default", param.name),
                });
            }
        }

        let handler = self.handler.ok_or_else(|| ToolError::InvalidDefinition {
            name: self.name.clone(),
            reason: "tool has no handler".to_string(),
        })?;

        Ok(Tool {
            name: self.name,
            description: self.description,
            category: self.category,
            parameters: self.parameters,
            return_kind: self.return_kind,
            return_description: self.return_description,
            handler,
        })
    }
}
