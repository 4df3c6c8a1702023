//! Spindle CLI entry point.
//!
//! Provides `chat`, `ask`, and `validate` subcommands for running the
//! interactive assistant, answering a single utterance, or checking the
//! knowledge catalog for inconsistencies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use spindle::config::SpindleConfig;
use spindle::dialogue::{ConversationContext, Reply, Router};
use spindle::kb::KnowledgeBase;
use spindle::logging;

/// Spindle — the Spindle Yarns support assistant.
#[derive(Parser)]
#[command(name = "spindle", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session.
    Chat,
    /// Answer a single utterance and exit.
    Ask {
        /// The utterance to answer.
        text: String,
        /// Load and update session context from this file.
        #[arg(long)]
        context_file: Option<PathBuf>,
    },
    /// Check the knowledge catalog for inconsistencies.
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chat => handle_chat(),
        Command::Ask { text, context_file } => handle_ask(&text, context_file),
        Command::Validate => handle_validate(),
    }
}

/// Run the interactive chat loop until EOF or an exit command.
fn handle_chat() -> anyhow::Result<()> {
    let config = SpindleConfig::load().context("failed to load configuration")?;
    let logs_dir = config.logs_dir()?;
    let _logging_guard = logging::init_session(&logs_dir, &config.chat.log_level)?;

    let kb = Arc::new(KnowledgeBase::load());
    let mut router = Router::new(kb).with_threshold(config.engine.similarity_threshold);

    let context_path = config.context_file()?;
    let mut context = load_context(&context_path)?;
    info!(path = %context_path.display(), "chat session started");

    println!("Spindle Yarns assistant. Type your question, or 'quit' to leave.");
    let mut last_reply: Option<String> = None;

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        context.record_message();
        let reply = router.respond(input, &context, last_reply.as_deref());
        show_reply(&reply);

        context = reply.context;
        last_reply = Some(reply.text);
        save_context(&context_path, &context)?;
    }

    save_context(&context_path, &context)?;
    println!("Goodbye!");
    Ok(())
}

/// Answer a single utterance, optionally carrying context across runs.
fn handle_ask(text: &str, context_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = SpindleConfig::load().context("failed to load configuration")?;
    logging::init_cli(&config.chat.log_level);

    let kb = Arc::new(KnowledgeBase::load());
    let mut router = Router::new(kb).with_threshold(config.engine.similarity_threshold);

    let mut context = match &context_file {
        Some(path) => load_context(path)?,
        None => ConversationContext::new(),
    };
    context.record_message();

    let reply = router.respond(text, &context, None);
    show_reply(&reply);

    if let Some(path) = context_file {
        save_context(&path, &reply.context)?;
    }
    Ok(())
}

/// Report catalog validation findings.
fn handle_validate() -> anyhow::Result<()> {
    let config = SpindleConfig::load().context("failed to load configuration")?;
    logging::init_cli(&config.chat.log_level);

    let kb = KnowledgeBase::load();
    let issues = kb.validate();
    if issues.is_empty() {
        println!("knowledge catalog OK ({} topics)", kb.entries().len());
    } else {
        for issue in &issues {
            println!("warning: {issue}");
        }
        println!(
            "{} issue(s) across {} topics",
            issues.len(),
            kb.entries().len()
        );
    }
    Ok(())
}

/// Print a reply and its follow-up suggestions.
fn show_reply(reply: &Reply) {
    println!("{}", reply.text);
    if let Some(suggestions) = &reply.suggestions {
        for suggestion in suggestions {
            println!("  - {suggestion}");
        }
    }
}

/// Load persisted session context, or start fresh when the file is
/// missing or unreadable as JSON.
fn load_context(path: &Path) -> anyhow::Result<ConversationContext> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(context) => Ok(context),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable context file");
                Ok(ConversationContext::new())
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConversationContext::new()),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Persist session context as JSON, creating parent directories.
fn save_context(path: &Path, context: &ConversationContext) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(context).context("failed to encode context")?;
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
