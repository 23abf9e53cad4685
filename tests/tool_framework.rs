//! End-to-end tests for the tool framework
//!
//! Exercises the builtin registry the way the agent and CLI do:
//! registration census, categorized listing, execution of every tool,
//! the error taxonomy, and argument coercion.

use serde_json::{json, Map, Value};
use tripbuddy::tools::{ParameterSpec, Tool, ToolCategory, ToolRegistry, ValueKind};
use tripbuddy::ToolError;

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn builtin_tools_are_registered() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    assert_eq!(registry.len(), 5);
    for name in [
        "get_current_time",
        "calculate_budget",
        "convert_currency",
        "estimate_travel_time",
        "get_season_info",
    ] {
        assert!(registry.contains(name), "missing tool: {name}");
    }
}

#[test]
fn categories_partition_the_builtins() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    let calculation = registry.list_tools_by_category(ToolCategory::Calculation);
    assert_eq!(calculation.len(), 2);

    let utility = registry.list_tools_by_category(ToolCategory::Utility);
    assert_eq!(utility.len(), 1);
    assert_eq!(utility[0]["name"], "get_current_time");

    // No builtin claims these categories
    assert!(registry.list_tools_by_category(ToolCategory::Weather).is_empty());
    assert!(registry
        .list_tools_by_category(ToolCategory::Accommodation)
        .is_empty());

    let spread: usize = ToolCategory::ALL
        .iter()
        .map(|category| registry.list_tools_by_category(*category).len())
        .sum();
    assert_eq!(spread, registry.len());
}

#[test]
fn every_tool_executes() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    let time = registry
        .execute("get_current_time", args(json!({"timezone": "Asia/Tokyo"})))
        .unwrap();
    assert!(time.as_str().unwrap().contains("Asia/Tokyo"));

    let budget = registry
        .execute(
            "calculate_budget",
            args(json!({"days": 3, "destination": "东京", "travelers": 2})),
        )
        .unwrap();
    assert!(budget["total_budget"].as_f64().unwrap() > 0.0);

    let conversion = registry
        .execute(
            "convert_currency",
            args(json!({"amount": 100, "from_currency": "USD", "to_currency": "JPY"})),
        )
        .unwrap();
    assert_eq!(conversion["converted_amount"], json!(15000.0));

    let travel_time = registry
        .execute(
            "estimate_travel_time",
            args(json!({"origin": "北京", "destination": "上海", "mode": "高铁"})),
        )
        .unwrap();
    assert!(travel_time["estimated_time"].as_str().unwrap().contains("小时"));

    let season = registry
        .execute(
            "get_season_info",
            args(json!({"destination": "东京", "month": 4})),
        )
        .unwrap();
    assert!(season["season"].as_str().unwrap().contains("春季"));
}

#[test]
fn budget_formula_matches_tables() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    let budget = registry
        .execute(
            "calculate_budget",
            args(json!({
                "days": 7,
                "destination": "东京",
                "travelers": 2,
                "budget_level": "中等",
            })),
        )
        .unwrap();

    // base 150 * multiplier 1.0 * 7 days * 2 travelers
    assert_eq!(budget["total_budget"], json!(2100.0));

    let total = budget["total_budget"].as_f64().unwrap();
    let breakdown_sum: f64 = budget["breakdown"]
        .as_object()
        .unwrap()
        .values()
        .filter_map(Value::as_f64)
        .sum();
    assert!((breakdown_sum - total).abs() < 0.01);
}

#[test]
fn currency_conversion_is_case_insensitive() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    let conversion = registry
        .execute(
            "convert_currency",
            args(json!({"amount": 100, "from_currency": "usd", "to_currency": "cny"})),
        )
        .unwrap();
    assert_eq!(conversion["rate"], json!(7.2));
    assert_eq!(conversion["converted_amount"], json!(720.0));

    let unknown = registry
        .execute(
            "convert_currency",
            args(json!({"amount": 55, "from_currency": "USD", "to_currency": "CHF"})),
        )
        .unwrap();
    assert_eq!(unknown["rate"], json!(1.0));
    assert_eq!(unknown["converted_amount"], json!(55.0));
    assert!(unknown["note"].as_str().is_some());
}

#[test]
fn unknown_tool_is_not_found() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();
    let err = registry.execute("non_existent_tool", Map::new()).unwrap_err();
    assert!(matches!(err, ToolError::NotFound { .. }));
}

#[test]
fn missing_required_arguments_fail_validation() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();
    let err = registry.execute("calculate_budget", Map::new()).unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { .. }));
}

#[test]
fn string_numeral_is_coerced_before_invocation() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();

    // "7" arrives as a string but the tool sees integer 7
    let budget = registry
        .execute(
            "calculate_budget",
            args(json!({"days": "7", "destination": "东京", "travelers": 2})),
        )
        .unwrap();
    assert_eq!(budget["days"], json!(7));

    let err = registry
        .execute(
            "calculate_budget",
            args(json!({"days": "一周", "destination": "东京"})),
        )
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { .. }));
}

#[test]
fn handler_failures_are_wrapped_with_tool_name() {
    let mut registry = ToolRegistry::new();
    registry
        .register(
            Tool::builder("always_fails")
                .description("fails on purpose")
                .handler(|_| anyhow::bail!("tableflip"))
                .build()
                .unwrap(),
        )
        .unwrap();

    let err = registry.execute("always_fails", Map::new()).unwrap_err();
    match err {
        ToolError::ExecutionFailed { name, source } => {
            assert_eq!(name, "always_fails");
            assert!(source.to_string().contains("tableflip"));
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }
}

#[test]
fn schema_shape_is_stable() {
    let registry = ToolRegistry::with_builtin_tools().unwrap();
    let tool = registry.get("calculate_budget").unwrap();
    let schema = tool.schema();

    for field in ["name", "description", "category", "parameters", "returns"] {
        assert!(schema.get(field).is_some(), "schema missing field: {field}");
    }

    let parameters = schema["parameters"].as_array().unwrap();
    assert_eq!(parameters.len(), tool.parameters.len());
    assert_eq!(parameters[0]["name"], "days");
    assert_eq!(parameters[0]["required"], json!(true));
    assert_eq!(parameters[2]["default"], json!(1));
    assert_eq!(schema["returns"]["type"], "object");
}

#[test]
fn listing_is_deterministic_and_clear_empties_everything() {
    let mut registry = ToolRegistry::with_builtin_tools().unwrap();

    let first = registry.list_tools();
    let second = registry.list_tools();
    assert_eq!(first, second);

    registry.clear();
    assert!(registry.list_tools().is_empty());
    for category in ToolCategory::ALL {
        assert!(registry.list_tools_by_category(category).is_empty());
    }
}

#[test]
fn custom_tool_registers_alongside_builtins() {
    let mut registry = ToolRegistry::with_builtin_tools().unwrap();

    registry
        .register(
            Tool::builder("packing_list")
                .description("suggest what to pack")
                .category(ToolCategory::Travel)
                .parameter(ParameterSpec::required(
                    "destination",
                    ValueKind::String,
                    "where the trip goes",
                ))
                .parameter(ParameterSpec::optional(
                    "days",
                    ValueKind::Integer,
                    "trip length",
                    json!(3),
                ))
                .returns(ValueKind::Object, "packing suggestions")
                .handler(|args| {
                    let destination = args
                        .get("destination")
                        .and_then(Value::as_str)
                        .unwrap_or("");
                    let days = args.get("days").and_then(Value::as_i64).unwrap_or(3);
                    Ok(json!({
                        "destination": destination,
                        "items": ["护照", "充电器", "舒适的鞋"],
                        "outfits": days,
                    }))
                })
                .build()
                .unwrap(),
        )
        .unwrap();

    assert_eq!(registry.len(), 6);

    let result = registry
        .execute(
            "packing_list",
            args(json!({"destination": "巴黎", "days": "5"})),
        )
        .unwrap();
    assert_eq!(result["outfits"], json!(5));

    let travel = registry.list_tools_by_category(ToolCategory::Travel);
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0]["name"], "packing_list");
}
