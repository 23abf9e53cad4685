//! Deterministic scripted backend
//!
//! Answers from a small keyword table instead of a model. Used by the
//! default configuration, the demo, and the tests: same input, same
//! reply, no network.

use crate::backend::ChatBackend;
use crate::errors::Result;
use crate::types::{ChatMessage, Role};
use async_trait::async_trait;

/// Keyword-keyed canned replies, checked in order
const REPLIES: [(&[&str], &str); 5] = [
    (
        &["你好", "介绍", "你是谁"],
        "你好！我是你的专属旅行助手，可以帮你推荐目的地、规划行程、估算预算。想去哪里玩呢？✈️",
    ),
    (
        &["日本", "东京"],
        "日本是个很棒的选择！东京适合初次到访：春季可以赏樱，秋季有红叶。建议安排5-7天，\
         把浅草、涩谷和镰仓一日游都排进去。需要我帮你算一下预算吗？🌸",
    ),
    (
        &["预算", "多少钱", "花费"],
        "预算取决于目的地、天数和出行人数。以东京为例，中等预算大约每人每天150美元。\
         告诉我具体计划，我可以用预算工具帮你详细测算。💰",
    ),
    (
        &["行程", "规划", "安排"],
        "好的！规划行程时我建议先定节奏：每天1-2个主要景点，留出吃饭和休息的时间。\
         告诉我目的地和天数，我来帮你排一个大致的日程。🗓️",
    ),
    (
        &["天气", "季节", "什么时候"],
        "出行时间很关键！大多数目的地春秋两季最舒服。告诉我你想去的城市，\
         我可以查一下各个季节的特点和推荐活动。🌤️",
    ),
];

const FALLBACK: &str =
    "这个问题很有意思！作为旅行助手，我最擅长目的地推荐、行程规划和预算估算。\
     可以告诉我你的旅行计划吗？😊";

/// Backend producing canned travel-assistant replies
#[derive(Debug, Default)]
pub struct ScriptedBackend;

impl ScriptedBackend {
    /// Create a scripted backend
    pub fn new() -> Self {
        Self
    }

    fn reply_for(&self, user_message: &str) -> &'static str {
        for (keywords, reply) in REPLIES {
            if keywords.iter().any(|keyword| user_message.contains(keyword)) {
                return reply;
            }
        }
        FALLBACK
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let last_user_turn = messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or("");

        Ok(self.reply_for(last_user_turn).to_string())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
