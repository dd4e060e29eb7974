//! Storebridge agent - interactive store assistant.
//!
//! Connects to the storebridge MCP server, loads its tool catalog, and runs
//! a Claude-powered chat loop on stdin/stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

mod agent;
mod claude;
mod config;
mod mcp;

use agent::Agent;
use claude::ClaudeClient;
use config::AgentConfig;
use mcp::McpSession;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    // Initialize tracing; default to warnings so tool chatter stays out of
    // the conversation.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storebridge_agent=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AgentConfig::from_env().expect("Failed to load configuration");

    if let Err(e) = run(config).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
async fn run(config: AgentConfig) -> Result<()> {
    let claude = ClaudeClient::new(&config);
    let mcp = McpSession::connect(&config.mcp_server_url).await?;
    let mut agent = Agent::new(claude, mcp).await?;

    println!("Store assistant ready. Type a message, or 'quit' to exit.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        match agent.handle(input).await {
            Ok(reply) => println!("{reply}\n"),
            Err(e) => eprintln!("error: {e:#}\n"),
        }
    }

    agent.shutdown().await?;
    println!("Goodbye.");
    Ok(())
}
