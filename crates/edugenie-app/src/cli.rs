use clap::{Parser, Subcommand};

/// CLI arguments for edugenie
#[derive(Parser)]
#[command(name = "edugenie")]
#[command(about = "EduGenie - AI academic assistant for smarter study and faster preparation")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the model identifier (defaults to the free-tier model)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Provider backend to use (openrouter, gemini); auto-detected from the
    /// environment when omitted
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// API key override (otherwise read from the provider's environment
    /// variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Start in simplified-explanation mode ("Explain Like I'm 10")
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub simple: bool,
}

/// One-shot smart tools; without a subcommand the interactive REPL starts
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a 5-question multiple-choice quiz on a topic
    Quiz {
        /// Topic to quiz on
        topic: String,
    },
    /// Summarize a topic with structured bullet points
    Summary {
        /// Topic to summarize
        topic: String,
    },
    /// Generate a 7-day study plan with a revision strategy
    Plan {
        /// Topic to plan for
        topic: String,
    },
}
