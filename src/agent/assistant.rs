//! Travel assistant persona
//!
//! A thin chat wrapper over a pluggable backend: builds each request
//! from the persona's system prompt plus a window of recent history,
//! records both turns, and absorbs backend failures into the persona's
//! apology line so the conversation loop never breaks.

use crate::agent::memory::{ConversationMemory, CONTEXT_WINDOW_MESSAGES};
use crate::backend::ChatBackend;
use crate::types::{ChatMessage, Role};
use uuid::Uuid;

/// Default persona name
pub const DEFAULT_ASSISTANT_NAME: &str = "Aria";

/// Number of messages shown in the conversation summary
const SUMMARY_MESSAGES: usize = 6;

/// Maximum characters of a message shown in the summary
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// Conversational travel assistant
pub struct TravelAssistant {
    name: String,
    session_id: Uuid,
    system_prompt: String,
    memory: ConversationMemory,
    backend: Box<dyn ChatBackend>,
}

impl TravelAssistant {
    /// Create an assistant with the given persona name and backend
    pub fn new(name: impl Into<String>, backend: Box<dyn ChatBackend>) -> Self {
        let name = name.into();
        let system_prompt = build_system_prompt(&name);

        Self {
            name,
            session_id: Uuid::new_v4(),
            system_prompt,
            memory: ConversationMemory::new(),
            backend,
        }
    }

    /// Persona name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique id of this conversation session
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Display name of the underlying backend
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Number of stored history messages
    pub fn history_len(&self) -> usize {
        self.memory.len()
    }

    /// Hold one conversation turn
    ///
    /// The request is system prompt + last ten history messages + the
    /// current user message. On success both turns are recorded; on
    /// backend failure the persona apologizes and the history is left
    /// untouched.
    pub async fn chat(&mut self, user_message: &str) -> String {
        let mut messages = vec![ChatMessage::system(self.system_prompt.clone())];
        messages.extend(
            self.memory
                .recent(CONTEXT_WINDOW_MESSAGES)
                .into_iter()
                .cloned(),
        );
        messages.push(ChatMessage::user(user_message));

        match self.backend.complete(&messages).await {
            Ok(reply) => {
                self.memory.push(ChatMessage::user(user_message));
                self.memory.push(ChatMessage::assistant(reply.clone()));
                reply
            }
            Err(err) => format!("抱歉，我暂时遇到了问题：{err}"),
        }
    }

    /// Forget the conversation so far
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    /// Short summary of the most recent turns
    pub fn conversation_summary(&self) -> String {
        if self.memory.is_empty() {
            return "对话历史为空".to_string();
        }

        let mut summary = format!("最近对话摘要（共{}条消息）:\n", self.memory.len());
        for (i, message) in self.memory.recent(SUMMARY_MESSAGES).iter().enumerate() {
            let speaker = match message.role {
                Role::User => "用户",
                _ => self.name.as_str(),
            };
            summary.push_str(&format!(
                "{}. {}: {}\n",
                i + 1,
                speaker,
                preview(&message.content)
            ));
        }
        summary
    }
}

/// Truncate a message for summary display, counting characters rather
/// than bytes so multi-byte text is never split
fn preview(content: &str) -> String {
    if content.chars().count() <= SUMMARY_PREVIEW_CHARS {
        return content.to_string();
    }
    let truncated: String = content.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    format!("{truncated}...")
}

fn build_system_prompt(name: &str) -> String {
    format!(
        "你是一位专业的旅行助手，名叫{name}。你热情、细心、知识渊博。\n\n\
         你的能力：\n\
         1. 提供旅行建议和推荐\n\
         2. 帮助规划行程\n\
         3. 回答关于目的地的问题\n\
         4. 给出预算建议\n\
         5. 提醒旅行注意事项\n\n\
         回答风格：\n\
         - 友好、热情、有帮助\n\
         - 提供具体、实用的建议\n\
         - 当信息不足时，诚实地说明\n\
         - 一次专注于回答一个问题\n\
         - 使用适当的emoji让回答更生动\n\n\
         请用中文回答所有问题。"
    )
}
