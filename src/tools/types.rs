//! Core types for the tool framework
//!
//! Defines the declared value kinds, per-parameter schemas, the tool
//! category enumeration, and the `Tool` descriptor itself.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// Declared type of a tool parameter or return value
///
/// Only the four primitive kinds participate in argument coercion;
/// `Object` is used for structured return values and passes validation
/// only on an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Object,
}

impl ValueKind {
    /// Display name used in emitted schemas
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
        }
    }

    /// Check whether a supplied value already has this kind
    ///
    /// An integer satisfies a declared `Float` as-is; it widens
    /// losslessly when the handler reads it.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Object => value.is_object(),
        }
    }

    /// Attempt a single coercion step to this kind
    ///
    /// Lenient casts in the string/number/bool family: `"7"` becomes
    /// integer `7`, `1` becomes `1.0`, a non-empty string is truthy.
    /// Returns `None` when the value cannot represent this kind.
    /// `Object` is never a coercion target.
    pub fn coerce(&self, value: &Value) -> Option<Value> {
        match self {
            ValueKind::String => match value {
                Value::Number(n) => Some(Value::String(n.to_string())),
                Value::Bool(b) => Some(Value::String(b.to_string())),
                _ => None,
            },
            ValueKind::Integer => match value {
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Some(Value::from(i))
                    } else {
                        // Fractional input truncates toward zero
                        n.as_f64().map(|f| Value::from(f as i64))
                    }
                }
                Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
                Value::Bool(b) => Some(Value::from(*b as i64)),
                _ => None,
            },
            ValueKind::Float => match value {
                Value::Number(n) => n.as_f64().map(Value::from),
                Value::String(s) => s.trim().parse::<f64>().ok().map(Value::from),
                Value::Bool(b) => Some(Value::from(if *b { 1.0 } else { 0.0 })),
                _ => None,
            },
            ValueKind::Boolean => match value {
                Value::String(s) => Some(Value::Bool(!s.is_empty())),
                Value::Number(n) => {
                    Some(Value::Bool(n.as_f64().map(|f| f != 0.0).unwrap_or(false)))
                }
                Value::Null => Some(Value::Bool(false)),
                _ => None,
            },
            ValueKind::Object => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain grouping for registered tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Travel,
    Calculation,
    Information,
    Utility,
    Weather,
    Transportation,
    Accommodation,
}

impl ToolCategory {
    /// Every category, in declaration order
    pub const ALL: [ToolCategory; 7] = [
        ToolCategory::Travel,
        ToolCategory::Calculation,
        ToolCategory::Information,
        ToolCategory::Utility,
        ToolCategory::Weather,
        ToolCategory::Transportation,
        ToolCategory::Accommodation,
    ];

    /// Display name used in emitted schemas and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Travel => "travel",
            ToolCategory::Calculation => "calculation",
            ToolCategory::Information => "information",
            ToolCategory::Utility => "utility",
            ToolCategory::Weather => "weather",
            ToolCategory::Transportation => "transportation",
            ToolCategory::Accommodation => "accommodation",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ToolCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown tool category: {s}"))
    }
}

/// Schema for a single tool parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within the owning tool
    pub name: String,

    /// Declared value kind
    pub kind: ValueKind,

    /// Human-readable description
    pub description: String,

    /// Whether the caller must supply this parameter
    pub required: bool,

    /// Default value the tool applies when the parameter is absent
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// Declare a required parameter (no default)
    pub fn required(
        name: impl Into<String>,
        kind: ValueKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: true,
            default: None,
        }
    }

    /// Declare an optional parameter with a default value
    pub fn optional(
        name: impl Into<String>,
        kind: ValueKind,
        description: impl Into<String>,
        default: Value,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
            default: Some(default),
        }
    }
}

/// Handler signature for tool invocation
///
/// Handlers receive the validated (possibly coerced) argument map and
/// return a structured result. They are synchronous and expected to be
/// prompt; failures propagate to the registry which wraps them with
/// tool-name context.
pub type ToolHandler = Box<dyn Fn(&Map<String, Value>) -> anyhow::Result<Value> + Send + Sync>;

/// A named, schema-described, synchronously invocable unit
///
/// Created once through [`ToolBuilder`](crate::tools::ToolBuilder) and
/// never mutated afterwards.
pub struct Tool {
    /// Unique registry key
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Domain grouping
    pub category: ToolCategory,

    /// Parameter schemas, in declaration order
    pub parameters: Vec<ParameterSpec>,

    /// Declared return kind
    pub return_kind: ValueKind,

    /// Description of the returned value
    pub return_description: String,

    /// Exclusively owned invocation handler
    pub(crate) handler: ToolHandler,
}

impl Tool {
    /// Emit the JSON schema record for this tool
    ///
    /// Pure and deterministic; this shape is the stable contract shown
    /// to callers and to a model-facing function-calling layer.
    pub fn schema(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "category": self.category.as_str(),
            "parameters": self
                .parameters
                .iter()
                .map(|param| {
                    json!({
                        "name": param.name,
                        "type": param.kind.as_str(),
                        "description": param.description,
                        "required": param.required,
                        "default": param.default.clone().unwrap_or(Value::Null),
                    })
                })
                .collect::<Vec<_>>(),
            "returns": {
                "type": self.return_kind.as_str(),
                "description": self.return_description,
            },
        })
    }

    /// Validate supplied arguments against the declared parameters
    ///
    /// Walks parameters in declaration order. A missing required
    /// parameter fails before any coercion of it is attempted. A
    /// present value that does not match its declared kind gets exactly
    /// one coercion attempt; the coerced value replaces the original in
    /// `args` so the eventual invocation sees it. The first failure
    /// stops the walk.
    pub fn validate_arguments(&self, args: &mut Map<String, Value>) -> bool {
        for param in &self.parameters {
            match args.get(&param.name) {
                None => {
                    if param.required {
                        return false;
                    }
                }
                Some(value) => {
                    if param.kind.matches(value) {
                        continue;
                    }
                    match param.kind.coerce(value) {
                        Some(coerced) => {
                            args.insert(param.name.clone(), coerced);
                        }
                        None => return false,
                    }
                }
            }
        }
        true
    }

    /// Invoke the underlying handler with validated arguments
    pub fn call(&self, args: &Map<String, Value>) -> anyhow::Result<Value> {
        (self.handler)(args)
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("parameters", &self.parameters)
            .field("return_kind", &self.return_kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_display_names() {
        assert_eq!(ValueKind::String.as_str(), "string");
        assert_eq!(ValueKind::Integer.as_str(), "integer");
        assert_eq!(ValueKind::Float.as_str(), "float");
        assert_eq!(ValueKind::Boolean.as_str(), "boolean");
        assert_eq!(ValueKind::Object.as_str(), "object");
    }

    #[test]
    fn test_integer_matches_declared_float() {
        assert!(ValueKind::Float.matches(&json!(3)));
        assert!(ValueKind::Float.matches(&json!(3.5)));
        assert!(!ValueKind::Integer.matches(&json!(3.5)));
    }

    #[test]
    fn test_coerce_numeric_string_to_integer() {
        let coerced = ValueKind::Integer.coerce(&json!("7")).unwrap();
        assert_eq!(coerced, json!(7));

        let padded = ValueKind::Integer.coerce(&json!(" 42 ")).unwrap();
        assert_eq!(padded, json!(42));
    }

    #[test]
    fn test_coerce_non_numeric_string_fails() {
        assert!(ValueKind::Integer.coerce(&json!("seven")).is_none());
        assert!(ValueKind::Float.coerce(&json!("not a number")).is_none());
    }

    #[test]
    fn test_coerce_truncates_fractional_input() {
        let coerced = ValueKind::Integer.coerce(&json!(3.9)).unwrap();
        assert_eq!(coerced, json!(3));
    }

    #[test]
    fn test_coerce_boolean_truthiness() {
        assert_eq!(ValueKind::Boolean.coerce(&json!("yes")), Some(json!(true)));
        assert_eq!(ValueKind::Boolean.coerce(&json!("")), Some(json!(false)));
        assert_eq!(ValueKind::Boolean.coerce(&json!(0)), Some(json!(false)));
        assert_eq!(ValueKind::Boolean.coerce(&json!(2)), Some(json!(true)));
    }

    #[test]
    fn test_object_is_never_a_coercion_target() {
        assert!(ValueKind::Object.coerce(&json!("{}")).is_none());
        assert!(ValueKind::Object.coerce(&json!(1)).is_none());
    }

    #[test]
    fn test_category_round_trip() {
        for category in ToolCategory::ALL {
            let parsed: ToolCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("cuisine".parse::<ToolCategory>().is_err());
    }

    #[test]
    fn test_parameter_spec_constructors() {
        let required = ParameterSpec::required("days", ValueKind::Integer, "trip length");
        assert!(required.required);
        assert!(required.default.is_none());

        let optional =
            ParameterSpec::optional("travelers", ValueKind::Integer, "party size", json!(1));
        assert!(!optional.required);
        assert_eq!(optional.default, Some(json!(1)));
    }
}
