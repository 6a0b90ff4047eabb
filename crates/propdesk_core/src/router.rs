//! Top-level message dispatch.
//!
//! The priority policy is an explicit ordered rule table evaluated top to
//! bottom; the first rule whose predicate fires handles the request. The
//! order encodes policy, not accident: visual evidence always outranks text
//! keywords, and tenancy-legal topics outrank generic issue keywords because
//! they are higher-value and less ambiguous. Each rule is one unit test.

use serde::Serialize;
use tracing::debug;

use crate::analysis::{features_from_scores, AnalysisPayload, LabelScore};
use crate::knowledge::find_best_match;
use crate::session::SessionState;
use crate::tenancy::{location_note, variant_answer};

pub const TENANCY_KEYWORDS: &[&str] = &[
    "rent", "lease", "landlord", "tenant", "evict", "deposit", "notice", "contract", "agreement",
];

pub const ISSUE_KEYWORDS: &[&str] = &[
    "damage", "broken", "leak", "mold", "crack", "repair", "fix", "issue", "problem", "wrong",
];

/// Fixed prompt when issue keywords appear without pixels to look at.
pub const UPLOAD_PROMPT: &str =
    "I can help you better if you upload an image of the issue. Could you please share a photo?";

/// Fixed prompt when nothing matches.
pub const CLARIFY_PROMPT: &str = "I can help you with property issues (please share an image) or \
tenancy questions. Could you clarify if this is about a property issue or a tenancy matter?";

/// Which specialized responder produced the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    IssueDetector,
    TenancyFaq,
    Router,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::IssueDetector => "issue-detector",
            AgentKind::TenancyFaq => "tenancy-faq",
            AgentKind::Router => "router",
        }
    }
}

/// One inbound conversational turn, as handed over by the transport layer.
///
/// `image_scores` is the embedding-model boundary: when an image accompanies
/// the message, the transport has already run the model over the candidate
/// vocabulary and passes the raw scores through untouched.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    pub image_ref: Option<String>,
    pub image_scores: Option<Vec<LabelScore>>,
    pub location: Option<String>,
}

/// Response text plus structured metadata for the calling layer.
#[derive(Debug, Serialize)]
pub struct RouteReply {
    pub agent: AgentKind,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisPayload>,
}

struct RouteRule {
    name: &'static str,
    applies: fn(&SessionState, &ChatRequest) -> bool,
    handle: fn(&mut SessionState, &ChatRequest) -> RouteReply,
}

/// Evaluated top to bottom; the last rule always fires.
static RULES: &[RouteRule] = &[
    RouteRule {
        name: "image",
        applies: |_, request| request.image_ref.is_some() || request.image_scores.is_some(),
        handle: handle_image,
    },
    RouteRule {
        name: "tenancy",
        applies: |_, request| contains_any(&request.message, TENANCY_KEYWORDS),
        handle: handle_tenancy,
    },
    RouteRule {
        name: "followup",
        applies: |session, request| session.followup_applies(&request.message),
        handle: handle_followup,
    },
    RouteRule {
        name: "issue-prompt",
        applies: |_, request| contains_any(&request.message, ISSUE_KEYWORDS),
        handle: |_, _| RouteReply {
            agent: AgentKind::IssueDetector,
            response: UPLOAD_PROMPT.to_string(),
            analysis: None,
        },
    },
    RouteRule {
        name: "clarify",
        applies: |_, _| true,
        handle: |_, _| RouteReply {
            agent: AgentKind::Router,
            response: CLARIFY_PROMPT.to_string(),
            analysis: None,
        },
    },
];

/// Dispatch one message. Total: every input produces a reply.
pub fn route(session: &mut SessionState, request: &ChatRequest) -> RouteReply {
    for rule in RULES {
        if (rule.applies)(session, request) {
            debug!(rule = rule.name, "route rule matched");
            return (rule.handle)(session, request);
        }
    }
    // The clarify rule is unconditional; this is the total fallback anyway.
    RouteReply {
        agent: AgentKind::Router,
        response: CLARIFY_PROMPT.to_string(),
        analysis: None,
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    let message = message.to_lowercase();
    keywords.iter().any(|k| message.contains(k))
}

fn handle_image(session: &mut SessionState, request: &ChatRequest) -> RouteReply {
    let scores = request.image_scores.as_deref().unwrap_or(&[]);
    let features = features_from_scores(scores);
    let response = session.record_analysis(features, request.image_ref.clone());
    let analysis = session.snapshot().map(AnalysisPayload::from_snapshot);
    RouteReply {
        agent: AgentKind::IssueDetector,
        response,
        analysis,
    }
}

fn handle_tenancy(_session: &mut SessionState, request: &ChatRequest) -> RouteReply {
    let mut response = match variant_answer(&request.message) {
        Some(variant) => format!("{}\n\n{}", variant.answer, variant.follow_up),
        None => find_best_match(&request.message).to_string(),
    };
    if let Some(location) = &request.location {
        response.push_str(&location_note(location));
    }
    RouteReply {
        agent: AgentKind::TenancyFaq,
        response,
        analysis: None,
    }
}

fn handle_followup(session: &mut SessionState, request: &ChatRequest) -> RouteReply {
    RouteReply {
        agent: AgentKind::IssueDetector,
        response: session.answer_followup(&request.message),
        analysis: None,
    }
}
