//! Scripted tool walkthrough
//!
//! Exercises the registry end to end: budget, currency conversion on
//! the computed total, travel time, season lookup, and the tool
//! listing. Run with `tripbuddy demo`.

use crate::tools::ToolRegistry;
use anyhow::Result;
use colored::Colorize;
use serde_json::{json, Map, Value};

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn section(number: usize, title: &str) {
    println!("\n{}", format!("{number}. {title}").cyan().bold());
    println!("{}", "-".repeat(30).dimmed());
}

/// Run the walkthrough against the given registry
pub fn run(registry: &ToolRegistry) -> Result<()> {
    println!("{}", "🛠️ 工具演示".cyan().bold());
    println!("{}", "=".repeat(50).dimmed());

    section(1, "📊 旅行预算计算");
    let budget = registry.execute(
        "calculate_budget",
        args(json!({
            "days": 7,
            "destination": "东京",
            "travelers": 2,
            "budget_level": "中等",
        })),
    )?;

    println!("目的地: {}", budget["destination"].as_str().unwrap_or("?"));
    println!("天数: {}天", budget["days"]);
    println!("人数: {}人", budget["travelers"]);
    println!("预算级别: {}", budget["budget_level"].as_str().unwrap_or("?"));
    println!("每人每天: ${}", budget["daily_per_person"]);
    println!("总预算: ${}", budget["total_budget"]);

    println!("\n详细分配:");
    if let Some(breakdown) = budget["breakdown"].as_object() {
        for (category, amount) in breakdown {
            println!("  {category}: ${amount}");
        }
    }

    section(2, "💱 货币转换");
    let conversion = registry.execute(
        "convert_currency",
        args(json!({
            "amount": budget["total_budget"],
            "from_currency": "USD",
            "to_currency": "CNY",
        })),
    )?;

    println!("${} USD", conversion["amount"]);
    println!("汇率: {}", conversion["rate"]);
    println!("= ¥{} CNY", conversion["converted_amount"]);

    section(3, "🚅 旅行时间估算");
    let travel_time = registry.execute(
        "estimate_travel_time",
        args(json!({
            "origin": "北京",
            "destination": "东京",
            "mode": "飞机",
        })),
    )?;

    println!(
        "{} → {}",
        travel_time["origin"].as_str().unwrap_or("?"),
        travel_time["destination"].as_str().unwrap_or("?")
    );
    println!("交通方式: {}", travel_time["mode"].as_str().unwrap_or("?"));
    println!("距离: {}公里", travel_time["distance_km"]);
    println!(
        "时间: {}",
        travel_time["estimated_time"].as_str().unwrap_or("?")
    );

    section(4, "🌸 季节信息");
    let season_info = registry.execute(
        "get_season_info",
        args(json!({
            "destination": "东京",
            "month": 4,
        })),
    )?;

    println!(
        "目的地: {}",
        season_info["destination"].as_str().unwrap_or("?")
    );
    println!("月份: {}", season_info["month"].as_str().unwrap_or("?"));
    println!("季节: {}", season_info["season"].as_str().unwrap_or("?"));
    println!("特点: {}", season_info["highlights"].as_str().unwrap_or("?"));
    println!(
        "推荐活动: {}",
        season_info["recommended_activities"]
            .as_str()
            .unwrap_or("?")
    );

    section(5, "📋 所有可用工具");
    let tools = registry.list_tools();
    println!("共 {} 个工具:", tools.len());
    for (i, tool) in tools.iter().enumerate() {
        let param_count = tool["parameters"].as_array().map(Vec::len).unwrap_or(0);
        println!(
            "  {:2}. {:20} ({:15}) - 参数: {}",
            i + 1,
            tool["name"].as_str().unwrap_or("?"),
            tool["category"].as_str().unwrap_or("?"),
            param_count
        );
    }

    println!("\n{}", "=".repeat(50).dimmed());
    println!("{}", "✅ 演示完成！工具框架工作正常。".green());
    Ok(())
}
