//! TripBuddy - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tripbuddy::agent::{TravelAssistant, DEFAULT_ASSISTANT_NAME};
use tripbuddy::backend;
use tripbuddy::cli::{Args, Commands, Verbosity};
use tripbuddy::config::Config;
use tripbuddy::demo;
use tripbuddy::repl::ReplSession;
use tripbuddy::tools::{ToolCategory, ToolRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let registry = ToolRegistry::with_builtin_tools()?;

    match args.command.as_ref().unwrap_or(&Commands::Start) {
        Commands::Start => {
            let provider = args
                .backend
                .clone()
                .unwrap_or_else(|| config.provider().to_string());
            let name = args
                .name
                .clone()
                .or_else(|| config.assistant_name().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string());

            let backend = backend::from_provider(&provider)?;
            let assistant = TravelAssistant::new(name, backend);

            let quiet = args.verbosity() == Verbosity::Quiet;
            let mut session = ReplSession::new(assistant, registry, provider, quiet)?;
            session.run().await?;
        }
        Commands::Demo => {
            demo::run(&registry)?;
        }
        Commands::Tools { category } => {
            print_tools(&registry, category.as_deref())?;
        }
        Commands::Config => {
            print_config(&config)?;
        }
    }

    Ok(())
}

fn print_tools(registry: &ToolRegistry, category: Option<&str>) -> Result<()> {
    let schemas = match category {
        Some(raw) => {
            let category: ToolCategory = raw.parse().map_err(|err: String| {
                anyhow::anyhow!("{err} (expected one of: travel, calculation, information, utility, weather, transportation, accommodation)")
            })?;
            registry.list_tools_by_category(category)
        }
        None => registry.list_tools(),
    };

    if schemas.is_empty() {
        println!("{}", "该分类下没有工具".yellow());
        return Ok(());
    }

    for schema in &schemas {
        println!(
            "{} {}",
            schema["name"].as_str().unwrap_or("?").bold(),
            format!("({})", schema["category"].as_str().unwrap_or("?")).dimmed()
        );
        println!("  {}", schema["description"].as_str().unwrap_or(""));

        if let Some(parameters) = schema["parameters"].as_array() {
            for param in parameters {
                let required = if param["required"].as_bool().unwrap_or(false) {
                    "必填"
                } else {
                    "可选"
                };
                println!(
                    "    - {} ({}, {}): {}",
                    param["name"].as_str().unwrap_or("?"),
                    param["type"].as_str().unwrap_or("?"),
                    required,
                    param["description"].as_str().unwrap_or("")
                );
            }
        }
        println!();
    }

    Ok(())
}

fn print_config(config: &Config) -> Result<()> {
    let path = Config::config_path()?;
    println!("{} {}", "配置文件:".bold(), path.display());
    println!(
        "{} {}",
        "助手名称:".bold(),
        config.assistant_name().unwrap_or(DEFAULT_ASSISTANT_NAME)
    );
    println!("{} {}", "模型后端:".bold(), config.provider());
    Ok(())
}
