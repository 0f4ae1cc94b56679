//! Switchyard - OpenAI-compatible chat gateway
//!
//! Routes chat completions across Groq, Cerebras and OpenRouter.

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use switchyard::utils::init_logging;
use switchyard::{Config, Result, server};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Args {
    /// Configuration file; environment configuration is used when it is missing
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

async fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(&args.config).await?;

    if let Some(host) = &args.host {
        config.gateway.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, to keep multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
