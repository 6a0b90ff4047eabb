//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Propdesk CLI
#[derive(Parser)]
#[command(name = "propdeskctl")]
#[command(about = "Propdesk - property issue and tenancy assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Location used for jurisdiction-specific notes
    #[arg(long, global = true)]
    pub location: Option<String>,

    /// Subcommand (if not provided, starts an interactive chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Route a single message and print the reply
    Ask {
        /// The message text
        message: String,

        /// Reference to an already-uploaded image
        #[arg(long)]
        image_ref: Option<String>,

        /// JSON score file from the image scorer
        /// (format: [{"label": "mold growth", "confidence": 0.81}, ...])
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Output the structured reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat session
    Chat,
}
