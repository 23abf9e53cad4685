//! Season information tool
//!
//! Per-destination season tables with recommended activities and a
//! best-time-to-visit lookup. With a month the answer narrows to the
//! matching season; without one the full table is returned.

use crate::errors::ToolError;
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{ParameterSpec, Tool, ToolCategory, ValueKind};
use serde_json::{json, Map, Value};

type SeasonTable = &'static [(&'static str, &'static str)];

const TOKYO_SEASONS: SeasonTable = &[
    ("春季 (3-5月)", "樱花盛开，气候宜人，最佳旅游季节"),
    ("夏季 (6-8月)", "炎热潮湿，有花火大会，适合室内活动"),
    ("秋季 (9-11月)", "枫叶季节，天气凉爽，适合户外活动"),
    ("冬季 (12-2月)", "寒冷干燥，可滑雪，适合温泉旅行"),
];

const PARIS_SEASONS: SeasonTable = &[
    ("春季 (3-5月)", "气候温和，鲜花盛开，游客较少"),
    ("夏季 (6-8月)", "旅游旺季，天气温暖，适合户外咖啡"),
    ("秋季 (9-11月)", "天气凉爽，树叶变色，浪漫季节"),
    ("冬季 (12-2月)", "寒冷但节日气氛浓厚，圣诞市场"),
];

const BANGKOK_SEASONS: SeasonTable = &[
    ("凉季 (11-2月)", "最佳旅游季节，气候凉爽干燥"),
    ("热季 (3-5月)", "非常炎热，注意防暑"),
    ("雨季 (6-10月)", "经常下雨，但物价较低"),
];

const SYDNEY_SEASONS: SeasonTable = &[
    ("夏季 (12-2月)", "海滩季节，适合水上活动"),
    ("秋季 (3-5月)", "天气温和，适合户外活动"),
    ("冬季 (6-8月)", "凉爽但阳光充足，适合城市游览"),
    ("春季 (9-11月)", "野花盛开，气候宜人"),
];

const DEFAULT_SEASONS: SeasonTable = &[
    ("春季 (3-5月)", "气候温和，适合旅行"),
    ("夏季 (6-8月)", "旅游旺季，天气温暖"),
    ("秋季 (9-11月)", "天气凉爽，风景优美"),
    ("冬季 (12-2月)", "寒冷季节，可能有雪"),
];

fn season_table(destination: &str) -> SeasonTable {
    match destination {
        "东京" => TOKYO_SEASONS,
        "巴黎" => PARIS_SEASONS,
        "曼谷" => BANGKOK_SEASONS,
        "悉尼" => SYDNEY_SEASONS,
        _ => DEFAULT_SEASONS,
    }
}

/// Map a month number to a season label
fn month_season(month: i64) -> &'static str {
    match month {
        3..=5 => "春季",
        6..=8 => "夏季",
        9..=11 => "秋季",
        _ => "冬季",
    }
}

fn recommended_activities(destination: &str, season: &str) -> &'static str {
    match (destination, season) {
        ("东京", "春季") => "赏樱花、逛公园、日式庭院游览",
        ("东京", "夏季") => "花火大会、神社祭典、室内购物",
        ("东京", "秋季") => "赏红叶、登山、温泉旅行",
        ("东京", "冬季") => "滑雪、温泉、圣诞灯光秀",
        ("巴黎", "春季") => "公园野餐、博物馆参观、塞纳河漫步",
        ("巴黎", "夏季") => "户外咖啡、音乐节、巴黎海滩",
        ("巴黎", "秋季") => "葡萄园游览、艺术展览、美食节",
        ("巴黎", "冬季") => "圣诞市场、滑冰场、室内音乐会",
        _ => "城市观光、美食体验、文化探索",
    }
}

fn best_time_to_visit(destination: &str) -> &'static str {
    match destination {
        "东京" => "春季（3-5月）和秋季（9-11月）",
        "巴黎" => "春季（4-6月）和秋季（9-10月）",
        "曼谷" => "凉季（11-2月）",
        "悉尼" => "春季（9-11月）和秋季（3-5月）",
        _ => "春季和秋季",
    }
}

/// Look up season information for a destination
///
/// Destinations with non-standard season labels (e.g. 曼谷's dry/hot/
/// wet split) fall through to the full table even when a month is
/// given, since no label matches the month's season name.
pub fn get_season_info(destination: &str, month: Option<i64>) -> Value {
    let seasons = season_table(destination);

    if let Some(month) = month {
        let season = month_season(month);
        for (label, description) in seasons {
            if label.contains(season) {
                return json!({
                    "destination": destination,
                    "month": format!("{month}月"),
                    "season": label,
                    "highlights": description,
                    "recommended_activities": recommended_activities(destination, season),
                });
            }
        }
    }

    let mut all_seasons = Map::new();
    for (label, description) in seasons {
        all_seasons.insert(label.to_string(), json!(description));
    }

    json!({
        "destination": destination,
        "seasons": all_seasons,
        "best_time_to_visit": best_time_to_visit(destination),
    })
}

/// Register the season-info tool
pub fn register(registry: &mut ToolRegistry) -> std::result::Result<(), ToolError> {
    let tool = Tool::builder("get_season_info")
        .description("获取目的地的季节信息")
        .category(ToolCategory::Information)
        .parameter(ParameterSpec::required(
            "destination",
            ValueKind::String,
            "目的地",
        ))
        .parameter(ParameterSpec::optional(
            "month",
            ValueKind::Integer,
            "月份（1-12），不提供则返回所有季节信息",
            Value::Null,
        ))
        .returns(ValueKind::Object, "季节特点和推荐")
        .handler(|args| {
            let destination = args
                .get("destination")
                .and_then(Value::as_str)
                .unwrap_or("");
            let month = args.get("month").and_then(Value::as_i64);
            Ok(get_season_info(destination, month))
        })
        .build()?;

    registry.register(tool)
}
