//! Budget and currency tools
//!
//! Deterministic calculators over fixed price and rate tables. Rates
//! are snapshots for the demo, not live market data.

use crate::errors::ToolError;
use crate::tools::builtin::round_to;
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{ParameterSpec, Tool, ToolCategory, ValueKind};
use serde_json::{json, Map, Value};

/// Baseline price per person per day, in USD
fn base_price(destination: &str) -> f64 {
    match destination {
        "东京" => 150.0,
        "巴黎" => 200.0,
        "纽约" => 250.0,
        "曼谷" => 80.0,
        "巴厘岛" => 100.0,
        "悉尼" => 180.0,
        "伦敦" => 220.0,
        "新加坡" => 160.0,
        _ => 120.0,
    }
}

/// Budget-level multiplier (经济/中等/豪华)
fn level_multiplier(budget_level: &str) -> f64 {
    match budget_level {
        "经济" => 0.7,
        "中等" => 1.0,
        "豪华" => 1.8,
        _ => 1.0,
    }
}

/// Spend allocation ratios; they sum to 1.0
const ALLOCATION: [(&str, f64); 5] = [
    ("住宿", 0.35),
    ("餐饮", 0.25),
    ("交通", 0.20),
    ("景点门票", 0.15),
    ("购物其他", 0.05),
];

/// Compute a trip budget with a per-category breakdown
pub fn calculate_budget(days: i64, destination: &str, travelers: i64, budget_level: &str) -> Value {
    let daily_price = base_price(destination) * level_multiplier(budget_level);
    let total = daily_price * days as f64 * travelers as f64;

    let mut breakdown = Map::new();
    for (category, ratio) in ALLOCATION {
        breakdown.insert(category.to_string(), json!(round_to(total * ratio, 2)));
    }

    json!({
        "destination": destination,
        "days": days,
        "travelers": travelers,
        "budget_level": budget_level,
        "daily_per_person": round_to(daily_price, 2),
        "total_budget": round_to(total, 2),
        "breakdown": breakdown,
    })
}

/// Fixed exchange-rate snapshot over USD/CNY/JPY/EUR/GBP
fn exchange_rate(from: &str, to: &str) -> Option<f64> {
    let rate = match (from, to) {
        ("USD", "CNY") => 7.2,
        ("USD", "JPY") => 150.0,
        ("USD", "EUR") => 0.92,
        ("USD", "GBP") => 0.79,
        ("CNY", "USD") => 0.14,
        ("CNY", "JPY") => 21.0,
        ("CNY", "EUR") => 0.13,
        ("CNY", "GBP") => 0.11,
        ("JPY", "USD") => 0.0067,
        ("JPY", "CNY") => 0.048,
        ("JPY", "EUR") => 0.0061,
        ("JPY", "GBP") => 0.0052,
        ("EUR", "USD") => 1.09,
        ("EUR", "CNY") => 7.85,
        ("EUR", "JPY") => 163.0,
        ("EUR", "GBP") => 0.86,
        ("GBP", "USD") => 1.27,
        ("GBP", "CNY") => 9.15,
        ("GBP", "JPY") => 190.0,
        ("GBP", "EUR") => 1.16,
        _ => return None,
    };
    Some(rate)
}

/// Convert an amount between currencies
///
/// Codes are case-insensitive. Unknown pairs fall back to a 1.0 rate
/// with an explanatory note instead of failing.
pub fn convert_currency(amount: f64, from_currency: &str, to_currency: &str) -> Value {
    let from = from_currency.to_uppercase();
    let to = to_currency.to_uppercase();

    match exchange_rate(&from, &to) {
        Some(rate) => json!({
            "amount": amount,
            "from_currency": from,
            "to_currency": to,
            "rate": round_to(rate, 4),
            "converted_amount": round_to(amount * rate, 2),
        }),
        None => json!({
            "amount": amount,
            "from_currency": from,
            "to_currency": to,
            "rate": 1.0,
            "converted_amount": amount,
            "note": "使用默认汇率，实际请查询最新汇率",
        }),
    }
}

/// Register the budget and currency tools
pub fn register(registry: &mut ToolRegistry) -> std::result::Result<(), ToolError> {
    let budget = Tool::builder("calculate_budget")
        .description("计算旅行预算")
        .category(ToolCategory::Calculation)
        .parameter(ParameterSpec::required(
            "days",
            ValueKind::Integer,
            "旅行天数",
        ))
        .parameter(ParameterSpec::required(
            "destination",
            ValueKind::String,
            "目的地",
        ))
        .parameter(ParameterSpec::optional(
            "travelers",
            ValueKind::Integer,
            "旅行者人数",
            json!(1),
        ))
        .parameter(ParameterSpec::optional(
            "budget_level",
            ValueKind::String,
            "预算级别（经济/中等/豪华）",
            json!("中等"),
        ))
        .returns(ValueKind::Object, "详细的预算分析")
        .handler(|args| {
            let days = args.get("days").and_then(Value::as_i64).unwrap_or(1);
            let destination = args
                .get("destination")
                .and_then(Value::as_str)
                .unwrap_or("");
            let travelers = args.get("travelers").and_then(Value::as_i64).unwrap_or(1);
            let budget_level = args
                .get("budget_level")
                .and_then(Value::as_str)
                .unwrap_or("中等");
            Ok(calculate_budget(days, destination, travelers, budget_level))
        })
        .build()?;
    registry.register(budget)?;

    let currency = Tool::builder("convert_currency")
        .description("货币转换")
        .category(ToolCategory::Calculation)
        .parameter(ParameterSpec::required(
            "amount",
            ValueKind::Float,
            "要转换的金额",
        ))
        .parameter(ParameterSpec::optional(
            "from_currency",
            ValueKind::String,
            "源货币代码",
            json!("USD"),
        ))
        .parameter(ParameterSpec::optional(
            "to_currency",
            ValueKind::String,
            "目标货币代码",
            json!("CNY"),
        ))
        .returns(ValueKind::Object, "转换后的金额")
        .handler(|args| {
            let amount = args.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
            let from = args
                .get("from_currency")
                .and_then(Value::as_str)
                .unwrap_or("USD");
            let to = args
                .get("to_currency")
                .and_then(Value::as_str)
                .unwrap_or("CNY");
            Ok(convert_currency(amount, from, to))
        })
        .build()?;
    registry.register(currency)
}
