use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use edugenie_api::{CompletionClient, CompletionError, ProviderFactory};
use edugenie_chat::{run_feature, FeatureKind};

mod cli;
mod config;
mod repl;

use cli::{Cli, Commands};
use config::Settings;

/// Render an error the way the UI contract requires: configuration problems
/// verbatim, everything else as a generic failure with the detail preserved.
pub(crate) fn render_chat_error(err: &CompletionError) -> String {
    match err {
        CompletionError::Configuration(detail) => format!("Configuration error: {}", detail),
        other => format!(
            "Something went wrong while contacting the AI service. Details: {}",
            other
        ),
    }
}

pub(crate) fn render_tool_error(err: &CompletionError) -> String {
    match err {
        CompletionError::Configuration(detail) => format!("Configuration error: {}", detail),
        other => format!("Smart tool request failed. Details: {}", other),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli);

    let provider = ProviderFactory::create(settings.provider, Some(settings.api_key.clone()), None);
    let client = CompletionClient::new(provider);

    // One-shot smart tools exit without entering the REPL
    if let Some(ref command) = cli.command {
        let (kind, topic) = match command {
            Commands::Quiz { topic } => (FeatureKind::Quiz, topic),
            Commands::Summary { topic } => (FeatureKind::Summary, topic),
            Commands::Plan { topic } => (FeatureKind::Plan, topic),
        };
        match run_feature(&client, &settings.model, kind, topic).await {
            Ok(output) => println!("{}", output),
            Err(err) => {
                eprintln!("{}", render_tool_error(&err).red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    repl::run_repl_mode(&cli, &settings, &client).await
}
