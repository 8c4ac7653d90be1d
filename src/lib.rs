pub mod catalog;
pub mod cli;
pub mod config;
pub mod prompt_engine;
pub mod render;
pub mod session;

pub use catalog::{LabModule, ReplyStance, ToolId};
pub use config::LabConfig;
pub use prompt_engine::{EngineError, EngineMode, LabResult, PromptLab, ToolRequest};
pub use session::{AppTab, ModuleSession, Workshop};

use clap::Parser;

pub fn run() {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(cli::execute(args)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
