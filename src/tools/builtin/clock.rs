//! Current-time tool
//!
//! Renders the current date and time for a handful of known zones
//! using a fixed offset table; a proper timezone database is out of
//! scope for the demo.

use crate::errors::ToolError;
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{ParameterSpec, Tool, ToolCategory, ValueKind};
use chrono::Utc;
use serde_json::{json, Value};

/// Hour offsets from UTC for the supported zone names
fn zone_offset(timezone: &str) -> i64 {
    match timezone {
        "Asia/Shanghai" => 8,
        "Asia/Tokyo" => 9,
        "Europe/London" => 0,
        "America/New_York" => -5,
        "America/Los_Angeles" => -8,
        _ => 8,
    }
}

/// Format the current time in the given zone
pub fn current_time(timezone: &str) -> String {
    let offset = zone_offset(timezone);
    let adjusted = Utc::now() + chrono::Duration::hours(offset);
    let sign = if offset >= 0 { "+" } else { "" };

    format!(
        "{} ({} UTC{}{})",
        adjusted.format("%Y年%m月%d日 %H:%M:%S"),
        timezone,
        sign,
        offset
    )
}

/// Register the current-time tool
pub fn register(registry: &mut ToolRegistry) -> std::result::Result<(), ToolError> {
    let tool = Tool::builder("get_current_time")
        .description("获取当前时间和日期")
        .category(ToolCategory::Utility)
        .parameter(ParameterSpec::optional(
            "timezone",
            ValueKind::String,
            "时区名称，默认为Asia/Shanghai",
            json!("Asia/Shanghai"),
        ))
        .returns(ValueKind::String, "当前日期时间字符串")
        .handler(|args| {
            let timezone = args
                .get("timezone")
                .and_then(Value::as_str)
                .unwrap_or("Asia/Shanghai");
            Ok(json!(current_time(timezone)))
        })
        .build()?;

    registry.register(tool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zone_offsets() {
        assert_eq!(zone_offset("Asia/Tokyo"), 9);
        assert_eq!(zone_offset("America/Los_Angeles"), -8);
        // Unknown zones fall back to Shanghai
        assert_eq!(zone_offset("Mars/Olympus_Mons"), 8);
    }

    #[test]
    fn test_current_time_mentions_zone() {
        let rendered = current_time("Asia/Tokyo");
        assert!(rendered.contains("Asia/Tokyo"));
        assert!(rendered.contains("UTC+9"));
    }

    #[test]
    fn test_negative_offset_rendering() {
        let rendered = current_time("America/New_York");
        assert!(rendered.contains("UTC-5"));
    }
}
