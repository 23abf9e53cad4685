//! Tool registry: catalog, categorized lookup, guarded execution
//!
//! A single registry instance is created at startup and passed to the
//! components that need it. Registration keeps two indices consistent:
//! the name catalog and the per-category name buckets. Execution
//! validates and coerces arguments before the handler runs and wraps
//! handler failures with tool-name context.

use crate::errors::ToolError;
use crate::tools::builtin;
use crate::tools::types::{Tool, ToolCategory};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Catalog of registered tools
#[derive(Debug)]
pub struct ToolRegistry {
    /// Name index
    tools: HashMap<String, Tool>,

    /// Registration order, for deterministic listing
    order: Vec<String>,

    /// Category buckets, one per category, each in registration order
    categories: HashMap<ToolCategory, Vec<String>>,
}

impl ToolRegistry {
    /// Create an empty registry with one bucket per category
    pub fn new() -> Self {
        let mut categories = HashMap::new();
        for category in ToolCategory::ALL {
            categories.insert(category, Vec::new());
        }

        Self {
            tools: HashMap::new(),
            order: Vec::new(),
            categories,
        }
    }

    /// Create a registry with all builtin travel tools installed
    pub fn with_builtin_tools() -> std::result::Result<Self, ToolError> {
        let mut registry = Self::new();
        builtin::install(&mut registry)?;
        Ok(registry)
    }

    /// Register a tool, rejecting duplicate names
    pub fn register(&mut self, tool: Tool) -> std::result::Result<(), ToolError> {
        if self.tools.contains_key(&tool.name) {
            return Err(ToolError::DuplicateTool {
                name: tool.name.clone(),
            });
        }
        self.insert(tool);
        Ok(())
    }

    /// Register a tool, replacing any prior entry under the same name
    ///
    /// The stale entry is removed from its category bucket before the
    /// new one is inserted, so both indices stay consistent.
    pub fn register_replacing(&mut self, tool: Tool) {
        if let Some(previous) = self.tools.remove(&tool.name) {
            if let Some(bucket) = self.categories.get_mut(&previous.category) {
                bucket.retain(|name| name != &previous.name);
            }
            self.order.retain(|name| name != &tool.name);
        }
        self.insert(tool);
    }

    fn insert(&mut self, tool: Tool) {
        self.order.push(tool.name.clone());
        self.categories
            .entry(tool.category)
            .or_default()
            .push(tool.name.clone());
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All tool names, in registration order
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Total number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas of every registered tool, in registration order
    pub fn list_tools(&self) -> Vec<Value> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(Tool::schema)
            .collect()
    }

    /// Schemas of the tools in one category
    ///
    /// Names present in the bucket but missing from the catalog are
    /// skipped rather than erroring; the read path tolerates drift the
    /// mutation paths are designed to prevent.
    pub fn list_tools_by_category(&self, category: ToolCategory) -> Vec<Value> {
        self.categories
            .get(&category)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.tools.get(name))
                    .map(Tool::schema)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Execute a tool by name with the supplied arguments
    ///
    /// Lookup, then validation (which coerces values in place), then a
    /// single synchronous handler call. Handler failures are wrapped
    /// with the tool name; the original error stays attached as the
    /// source.
    pub fn execute(
        &self,
        name: &str,
        mut args: Map<String, Value>,
    ) -> std::result::Result<Value, ToolError> {
        let tool = self.tools.get(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
        })?;

        if !tool.validate_arguments(&mut args) {
            return Err(ToolError::InvalidArguments {
                name: name.to_string(),
            });
        }

        tool.call(&args).map_err(|source| ToolError::ExecutionFailed {
            name: name.to_string(),
            source,
        })
    }

    /// Remove every tool; category buckets remain, empty
    pub fn clear(&mut self) {
        self.tools.clear();
        self.order.clear();
        for bucket in self.categories.values_mut() {
            bucket.clear();
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::types::{ParameterSpec, ValueKind};
    use serde_json::json;

    fn repeat_tool(name: &str, category: ToolCategory) -> Tool {
        Tool::builder(name)
            .description("repeat a message")
            .category(category)
            .parameter(ParameterSpec::required(
                "message",
                ValueKind::String,
                "text to repeat",
            ))
            .parameter(ParameterSpec::optional(
                "count",
                ValueKind::Integer,
                "number of repetitions",
                json!(1),
            ))
            .returns(ValueKind::String, "the repeated message")
            .handler(|args| {
                let message = args.get("message").and_then(Value::as_str).unwrap_or("");
                let count = args.get("count").and_then(Value::as_i64).unwrap_or(1);
                Ok(json!(vec![message; count.max(0) as usize].join(" ")))
            })
            .build()
            .unwrap()
    }

    fn failing_tool(name: &str) -> Tool {
        Tool::builder(name)
            .description("always fails")
            .handler(|_| anyhow::bail!("boom"))
            .build()
            .unwrap()
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_register_and_execute() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        let result = registry
            .execute("repeat", args(json!({"message": "hi", "count": 3})))
            .unwrap();
        assert_eq!(result, json!("hi hi hi"));
    }

    #[test]
    fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry.execute("non_existent_tool", Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::NotFound { .. }));
    }

    #[test]
    fn test_execute_missing_required_argument() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        let err = registry.execute("repeat", Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn test_execute_coerces_string_count() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        // "2" is coerced to integer 2 before the handler runs
        let result = registry
            .execute("repeat", args(json!({"message": "go", "count": "2"})))
            .unwrap();
        assert_eq!(result, json!("go go"));

        let err = registry
            .execute("repeat", args(json!({"message": "go", "count": "many"})))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn test_execute_wraps_handler_failure() {
        let mut registry = ToolRegistry::new();
        registry.register(failing_tool("broken")).unwrap();

        let err = registry.execute("broken", Map::new()).unwrap_err();
        match err {
            ToolError::ExecutionFailed { name, source } => {
                assert_eq!(name, "broken");
                assert!(source.to_string().contains("boom"));
            }
            other => panic!("expected ExecutionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        let err = registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_replacing_cleans_stale_bucket() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        registry.register_replacing(repeat_tool("repeat", ToolCategory::Information));

        assert_eq!(registry.len(), 1);
        assert!(registry
            .list_tools_by_category(ToolCategory::Utility)
            .is_empty());
        assert_eq!(
            registry
                .list_tools_by_category(ToolCategory::Information)
                .len(),
            1
        );
    }

    #[test]
    fn test_list_tools_is_ordered_and_idempotent() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("alpha", ToolCategory::Utility))
            .unwrap();
        registry
            .register(repeat_tool("beta", ToolCategory::Information))
            .unwrap();
        registry
            .register(repeat_tool("gamma", ToolCategory::Utility))
            .unwrap();

        let first = registry.list_tools();
        let second = registry.list_tools();
        assert_eq!(first, second);

        let names: Vec<&str> = first
            .iter()
            .filter_map(|schema| schema["name"].as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_clear_empties_all_indices() {
        let mut registry = ToolRegistry::new();
        registry
            .register(repeat_tool("repeat", ToolCategory::Utility))
            .unwrap();

        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.list_tools().is_empty());
        for category in ToolCategory::ALL {
            assert!(registry.list_tools_by_category(category).is_empty());
        }
    }

    #[test]
    fn test_empty_bucket_for_every_category() {
        let registry = ToolRegistry::new();
        for category in ToolCategory::ALL {
            assert!(registry.list_tools_by_category(category).is_empty());
        }
    }
}
