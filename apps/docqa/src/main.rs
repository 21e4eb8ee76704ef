use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpDocumentQaService, InteractionController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod presenter;

use commands::{dispatch, parse_command, CommandParseError, UserCommand, HELP};
use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "docqa", about = "Upload a document and ask questions about it")]
struct Args {
    /// TOML config file (defaults to ./docqa.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    server_url: Option<String>,
    /// Document to select on startup
    #[arg(long)]
    document: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let base_url = settings.server_base_url()?;
    let service =
        HttpDocumentQaService::with_endpoints(&base_url, &settings.upload_path, &settings.ask_path)
            .context("failed to build service endpoints")?;
    info!(
        upload_url = %service.upload_url(),
        ask_url = %service.ask_url(),
        "document q&a client starting"
    );

    let controller = InteractionController::new(Arc::new(service));
    let presenter = tokio::spawn(presenter::run(controller.subscribe_events()));

    if let Some(path) = args.document {
        if let Some(output) = dispatch(&controller, UserCommand::Open { path }).await {
            println!("{output}");
        }
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(UserCommand::Quit) => break,
            Ok(command) => {
                if let Some(output) = dispatch(&controller, command).await {
                    println!("{output}");
                }
            }
            Err(CommandParseError::Empty) => {}
            Err(err) => println!("[blocked] {err}"),
        }
    }

    presenter.abort();
    Ok(())
}
