//! Error types for the Propdesk engine.
//!
//! Public operations are total: no-match conditions are answered with fixed
//! user-facing strings, never errors. `CoreError` only travels between
//! internal rendering helpers and the follow-up catch boundary, where it is
//! logged and replaced by an apology string.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("score file error: {0}")]
    ScoreFile(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}
