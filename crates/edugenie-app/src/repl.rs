use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use edugenie_api::CompletionClient;
use edugenie_chat::{chat_turn, run_feature, ChatSession, FeatureKind};
use edugenie_topics::TopicTracker;

use crate::cli::Cli;
use crate::config::Settings;
use crate::{render_chat_error, render_tool_error};

const NO_TOPIC_NOTICE: &str =
    "Please send at least one message first. Smart Tools use your latest question/topic.";

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli, settings: &Settings, client: &CompletionClient) -> Result<()> {
    println!("{}", "🎓 EduGenie - AI Academic Assistant".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Provider: {} • Model: {}",
            client.provider_name(),
            settings.model
        )
        .bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to exit. Commands: /quiz, /summary, /plan, /topics, /simple, /clear\n"
            .bright_black()
    );

    let mut session = ChatSession::new();
    let mut tracker = TopicTracker::new();
    let mut simple_mode = cli.simple;

    if simple_mode {
        println!("{}", "Simplified-explanation mode is ON".yellow());
    }

    println!("{} {}\n", "🤖".cyan(), session.messages()[0].content);

    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            "exit" | "quit" => break,
            "/clear" => {
                session.reset();
                println!("{}", "Chat history reset.".yellow());
                println!("{} {}\n", "🤖".cyan(), session.messages()[0].content);
            }
            "/simple" => {
                simple_mode = !simple_mode;
                let state = if simple_mode { "ON" } else { "OFF" };
                println!("{}", format!("Simplified-explanation mode is {}", state).yellow());
            }
            "/topics" => print_topic_insights(&tracker),
            _ => {
                if let Some((command, rest)) = split_command(input) {
                    match FeatureKind::from_str(command) {
                        Some(kind) => {
                            run_smart_tool(client, settings, &mut session, kind, rest).await;
                        }
                        None => {
                            println!("{}", format!("Unknown command: /{}", command).red());
                        }
                    }
                } else {
                    run_chat_message(client, settings, &mut session, &mut tracker, input, simple_mode)
                        .await;
                }
            }
        }
    }

    println!("{}", "Good luck with your studies! 👋".bright_cyan());
    Ok(())
}

/// Split "/quiz electric fields" into ("quiz", Some("electric fields"))
fn split_command(input: &str) -> Option<(&str, Option<&str>)> {
    let stripped = input.strip_prefix('/')?;
    let mut parts = stripped.splitn(2, char::is_whitespace);
    let command = parts.next()?;
    let rest = parts.next().map(str::trim).filter(|s| !s.is_empty());
    Some((command, rest))
}

async fn run_chat_message(
    client: &CompletionClient,
    settings: &Settings,
    session: &mut ChatSession,
    tracker: &mut TopicTracker,
    input: &str,
    simple_mode: bool,
) {
    let reply = match chat_turn(client, &settings.model, session, tracker, input, simple_mode).await
    {
        Ok(reply) => reply,
        Err(err) => {
            // Failures become visible text and stay in the transcript
            let rendered = render_chat_error(&err);
            session.push_assistant(&rendered);
            rendered
        }
    };
    println!("{} {}\n", "🤖".cyan(), reply);
}

async fn run_smart_tool(
    client: &CompletionClient,
    settings: &Settings,
    session: &mut ChatSession,
    kind: FeatureKind,
    topic_arg: Option<&str>,
) {
    let topic = match topic_arg {
        Some(topic) => topic.to_string(),
        None => match session.last_user_message() {
            Some(topic) => topic.to_string(),
            None => {
                println!("{}\n", NO_TOPIC_NOTICE.yellow());
                return;
            }
        },
    };

    println!(
        "{}",
        format!("Running {} tool on \"{}\"...", kind.as_str(), topic).bright_black()
    );

    let output = match run_feature(client, &settings.model, kind, &topic).await {
        Ok(output) => output,
        Err(err) => render_tool_error(&err),
    };

    // Tool output behaves like an assistant message and remains in memory
    session.push_assistant(&output);
    println!("{} {}\n", "🤖".cyan(), output);
}

fn print_topic_insights(tracker: &TopicTracker) {
    if tracker.is_empty() {
        println!("{}\n", "No topics tracked yet. Start chatting to see insights.".bright_black());
        return;
    }

    println!("{}", "Your Weak Topics".bright_cyan().bold());
    for (topic, count) in tracker.top_n(3) {
        println!("  - {} ({})", topic, count);
    }

    println!("{}", "Topic Frequency (Top 5)".bright_cyan().bold());
    for (topic, count) in tracker.top_n(5) {
        let bar = "█".repeat(count as usize);
        println!("  {:<20} {} {}", topic, bar, count);
    }
    println!();
}
