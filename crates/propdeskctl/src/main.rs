//! Propdesk CLI - exercise the routing engine from a terminal.
//!
//! The embedding model stays external: image turns are simulated by feeding
//! a JSON score file as produced by the scorer service. Everything else runs
//! the same engine the transport layer would.

mod cli;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use propdesk_core::{route, scores_from_json, ChatRequest, LabelScore, RouteReply, SessionState};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Ask {
            message,
            image_ref,
            scores,
            json,
        }) => ask(message, cli.location, image_ref, scores.as_deref(), json),
        Some(Commands::Chat) | None => chat(cli.location),
    }
}

fn ask(
    message: String,
    location: Option<String>,
    image_ref: Option<String>,
    scores: Option<&Path>,
    json: bool,
) -> Result<()> {
    let image_scores = scores.map(load_scores).transpose()?;
    let request = ChatRequest {
        message,
        image_ref,
        image_scores,
        location,
    };

    let mut session = SessionState::new();
    let reply = route(&mut session, &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print_reply(&reply);
    }
    Ok(())
}

fn chat(location: Option<String>) -> Result<()> {
    println!("{}", "Propdesk property assistant".bold());
    println!("Type a message, ':image <scores.json> [image-ref]' to attach an analysis, ':quit' to exit.\n");

    let mut session = SessionState::new();
    let stdin = io::stdin();

    loop {
        print!("{} ", "you>".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" || line == ":q" {
            break;
        }

        let request = match parse_turn(line, &location) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("{} {err:#}", "error:".red().bold());
                continue;
            }
        };

        let reply = route(&mut session, &request);
        print_reply(&reply);
    }
    Ok(())
}

/// Turn one chat line into a request. `:image` lines simulate an upload.
fn parse_turn(line: &str, location: &Option<String>) -> Result<ChatRequest> {
    let request = if let Some(rest) = line.strip_prefix(":image") {
        let mut parts = rest.split_whitespace();
        let path = parts
            .next()
            .context("usage: :image <scores.json> [image-ref]")?;
        let image_ref = parts.next().map(str::to_string);
        ChatRequest {
            message: String::new(),
            image_ref,
            image_scores: Some(load_scores(Path::new(path))?),
            location: location.clone(),
        }
    } else {
        ChatRequest {
            message: line.to_string(),
            location: location.clone(),
            ..Default::default()
        }
    };
    Ok(request)
}

fn load_scores(path: &Path) -> Result<Vec<LabelScore>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading score file {}", path.display()))?;
    Ok(scores_from_json(&text)?)
}

fn print_reply(reply: &RouteReply) {
    println!("{} {}", format!("[{}]", reply.agent.as_str()).cyan(), reply.response);
    if let Some(analysis) = &reply.analysis {
        for issue in &analysis.issues {
            println!(
                "  {} {} ({:.1}%)",
                "•".dimmed(),
                issue.category,
                issue.confidence * 100.0
            );
        }
    }
    println!();
}
