//! Interactive chat session
//!
//! Wires the assistant, the tool registry, and the readline input into
//! a terminal loop: slash commands for session management, everything
//! else forwarded to the assistant with a thinking spinner.

pub mod commands;
pub mod input;

use crate::agent::{TravelAssistant, DEFAULT_ASSISTANT_NAME};
use crate::backend;
use crate::repl::commands::{Command, HELP_TEXT};
use crate::repl::input::{InputHandler, ReadOutcome};
use crate::tools::ToolRegistry;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Interactive session state
pub struct ReplSession {
    assistant: TravelAssistant,
    registry: ToolRegistry,
    provider: String,
    input: InputHandler,
    quiet: bool,
}

impl ReplSession {
    /// Create a session with persistent input history
    pub fn new(
        assistant: TravelAssistant,
        registry: ToolRegistry,
        provider: String,
        quiet: bool,
    ) -> Result<Self> {
        let input = match history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(Self {
            assistant,
            registry,
            provider,
            input,
            quiet,
        })
    }

    /// Run the session loop until the user exits
    pub async fn run(&mut self) -> Result<()> {
        if !self.quiet {
            self.print_banner();
            println!("{}", "输入 /help 查看可用命令\n".dimmed());
        }

        loop {
            match self.input.read_line()? {
                ReadOutcome::Eof => break,
                ReadOutcome::Interrupted => {
                    println!("{}", "（输入 /exit 退出）".dimmed());
                }
                ReadOutcome::Line(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    if !self.handle(&line).await? {
                        break;
                    }
                }
            }
        }

        self.input.save_history();
        if !self.quiet {
            println!("{}", format!("感谢使用{}旅行助手，再见！", self.assistant.name()).cyan());
        }
        Ok(())
    }

    /// Handle one line; returns false when the session should end
    async fn handle(&mut self, line: &str) -> Result<bool> {
        match Command::parse(line) {
            Command::Help => {
                println!("{}", HELP_TEXT.magenta());
            }
            Command::Reset => {
                self.assistant.reset();
                println!("{}", "对话历史已重置".yellow());
            }
            Command::Status => {
                self.print_status();
            }
            Command::Summary => {
                println!("{}", self.assistant.conversation_summary().magenta());
            }
            Command::Tools => {
                self.print_tools();
            }
            Command::New { name } => {
                let name = name.unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string());
                let backend = backend::from_provider(&self.provider)?;
                self.assistant = TravelAssistant::new(name.as_str(), backend);
                println!("{}", format!("{name}旅行助手已就绪！").cyan());
            }
            Command::Exit => return Ok(false),
            Command::Chat { message } => {
                let spinner = self.start_thinking();
                let reply = self.assistant.chat(&message).await;
                spinner.finish_and_clear();
                println!(
                    "{} {}\n",
                    format!("{}:", self.assistant.name()).yellow().bold(),
                    reply
                );
            }
            Command::Unknown { input } => {
                println!("{}", format!("未知命令: {input}").red());
                println!("输入 {} 查看可用命令", "/help".cyan());
            }
        }
        Ok(true)
    }

    fn start_thinking(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("思考中...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }

    fn print_banner(&self) {
        let banner = format!(
            "╔══════════════════════════════════════════════╗\n\
             ║           🧭 {}旅行助手 🧭                  ║\n\
             ║     智能旅行规划助手 - 终端版本              ║\n\
             ╚══════════════════════════════════════════════╝",
            self.assistant.name()
        );
        println!("{}", banner.cyan());
    }

    fn print_status(&self) {
        let rounds = self.assistant.history_len() / 2;
        let status = format!(
            "当前状态：\n\
             - 助手名称: {}\n\
             - 模型后端: {}\n\
             - 会话ID: {}\n\
             - 对话轮数: {rounds}\n\
             - 记忆长度: {} 条消息\n\
             - 可用工具: {} 个",
            self.assistant.name(),
            self.assistant.backend_name(),
            self.assistant.session_id(),
            self.assistant.history_len(),
            self.registry.len(),
        );
        println!("{}", status.magenta());
    }

    fn print_tools(&self) {
        let schemas = self.registry.list_tools();
        println!("{}", format!("共 {} 个工具:", schemas.len()).magenta());

        for (i, schema) in schemas.iter().enumerate() {
            let name = schema["name"].as_str().unwrap_or("?");
            let category = schema["category"].as_str().unwrap_or("?");
            let description = schema["description"].as_str().unwrap_or("");
            let param_count = schema["parameters"]
                .as_array()
                .map(Vec::len)
                .unwrap_or_default();

            println!(
                "  {:2}. {} {} - {} (参数: {})",
                i + 1,
                name.bold(),
                format!("({category})").dimmed(),
                description,
                param_count
            );
        }
    }
}

/// History file location: `~/.tripbuddy/history`
fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tripbuddy").join("history"))
}
