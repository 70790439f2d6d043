//! Cmd MCP - Policy-gated host shell execution
//!
//! Serves the command engine over MCP stdio (default) or over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::{transport::io::stdio, ServiceExt};

use cmd_mcp::config::load_config;
use cmd_mcp::{http, CmdMcpServer, CommandEngine};

#[derive(Parser)]
#[command(name = "cmd-mcp")]
#[command(about = "Run host shell commands behind a command and path denylist")]
struct Cli {
    /// Config file (otherwise the standard locations are searched)
    #[arg(long, env = "CMD_MCP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio
    Stdio,
    /// Serve the JSON HTTP endpoint
    Http {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    mcp_common::init_tracing("cmd_mcp")?;

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => {
            tracing::info!("Starting cmd_mcp MCP Server");

            let server = CmdMcpServer::with_config(&config)?;
            let service = server.serve(stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
        }
        Commands::Http { host, port } => {
            let host = host.unwrap_or_else(|| config.http.host.clone());
            let port = port.unwrap_or(config.http.port);
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

            let engine = CommandEngine::new(&config)?;
            http::serve(engine, addr).await?;
        }
    }

    Ok(())
}
