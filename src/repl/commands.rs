//! Slash commands for the chat session
//!
//! Anything starting with `/` is a session command; everything else is
//! a chat message for the assistant.

/// Parsed session commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show command help
    Help,

    /// Clear conversation history
    Reset,

    /// Show session status
    Status,

    /// Show a summary of recent turns
    Summary,

    /// List the registered tools
    Tools,

    /// Replace the assistant with a fresh persona
    New { name: Option<String> },

    /// Leave the session
    Exit,

    /// A chat message for the assistant
    Chat { message: String },

    /// Unrecognized slash command
    Unknown { input: String },
}

impl Command {
    /// Parse one line of input
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Chat {
                message: trimmed.to_string(),
            };
        }

        let mut parts = trimmed[1..].split_whitespace();
        let head = parts.next().unwrap_or("").to_lowercase();

        match head.as_str() {
            "help" | "h" => Command::Help,
            "reset" | "r" => Command::Reset,
            "status" | "s" => Command::Status,
            "summary" => Command::Summary,
            "tools" | "t" => Command::Tools,
            "new" => Command::New {
                name: parts.next().map(str::to_string),
            },
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown {
                input: trimmed.to_string(),
            },
        }
    }
}

/// Help text shown by `/help`
pub const HELP_TEXT: &str = "\
可用命令：
  直接输入问题，与助手聊天
  /help 或 /h     显示此帮助信息
  /reset 或 /r    重置对话历史
  /status 或 /s   显示当前状态
  /summary        显示对话摘要
  /tools 或 /t    列出可用工具
  /new [名字]     创建新的助手实例
  /exit 或 /quit  退出程序

示例问题：
  我想去日本旅游，有什么推荐吗？
  帮我规划一个3天的北京行程
  预算1万元能去哪里玩？";
