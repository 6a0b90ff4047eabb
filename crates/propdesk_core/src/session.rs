//! Per-session conversation state.
//!
//! Everything here is scoped to one conversation. A session starts with no
//! analysis, transitions when a snapshot is recorded, and stays there until a
//! newer snapshot replaces it; session end is external. Sessions are
//! independent values, so concurrent conversations cannot interfere; within a
//! session the `&mut` receivers enforce the single-writer, read-after-write
//! contract.

use std::collections::VecDeque;

use tracing::error;

use crate::analysis::{AnalysisSnapshot, DetectedFeature};
use crate::error::CoreError;
use crate::followup::{render, FollowupIntent, FOLLOWUP_CUE_KEYWORDS};

/// Context window size; oldest turns are evicted first.
pub const CONTEXT_CAPACITY: usize = 5;

/// Returned when a follow-up arrives before any analysis.
pub const NO_ANALYSIS_MESSAGE: &str =
    "I don't have any recent property analysis to reference. Please upload an image first.";

/// Returned when the stored analysis found nothing.
pub const NO_ISSUES_IN_ANALYSIS_MESSAGE: &str = "No issues were detected in the last analysis.";

/// Returned by `record_analysis` when no feature survived the threshold.
pub const NO_ISSUES_DETECTED_MESSAGE: &str =
    "I didn't detect any significant issues in this image. Would you like me to look for something specific?";

/// The one string an internal fault is allowed to surface as.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I encountered an error processing your request. Please try asking your question again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ContextTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Bounded ring buffer of recent turns, used only to bias responses; never
/// persisted beyond the session.
#[derive(Debug, Default)]
pub struct ConversationContext {
    turns: VecDeque<ContextTurn>,
}

impl ConversationContext {
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        if self.turns.len() == CONTEXT_CAPACITY {
            self.turns.pop_front();
        }
        self.turns.push_back(ContextTurn {
            speaker,
            text: text.into(),
        });
    }

    pub fn turns(&self) -> impl Iterator<Item = &ContextTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// State owned by one conversation session.
#[derive(Debug, Default)]
pub struct SessionState {
    snapshot: Option<AnalysisSnapshot>,
    context: ConversationContext,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_analysis(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&AnalysisSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Record a new analysis, replacing any previous snapshot wholesale, and
    /// synthesize the human-readable summary.
    ///
    /// An empty feature list still transitions the session: a clean image
    /// must not leave a stale diagnosis behind.
    pub fn record_analysis(
        &mut self,
        features: Vec<DetectedFeature>,
        image_ref: Option<String>,
    ) -> String {
        let snapshot = AnalysisSnapshot::new(features, image_ref);

        let response = if snapshot.features.is_empty() {
            NO_ISSUES_DETECTED_MESSAGE.to_string()
        } else {
            let mut parts = Vec::new();
            for feature in &snapshot.features {
                let qualifier = if feature.confidence > 0.7 { "high" } else { "moderate" };
                parts.push(format!(
                    "I've detected {} with {qualifier} confidence.",
                    feature.category
                ));
                parts.push(format!("Quick assessment: {}", feature.recommendation));
            }
            parts.push(
                "\nI can provide more specific details about repair steps, prevention measures, \
                 or cost breakdown for any of these issues. What would you like to know more about?"
                    .to_string(),
            );
            parts.join(" ")
        };

        self.snapshot = Some(snapshot);
        self.context.push(Speaker::User, "Image uploaded for analysis");
        self.context.push(Speaker::Assistant, response.clone());
        response
    }

    /// Answer a structured follow-up question against the stored snapshot.
    ///
    /// Total: no-analysis and empty-analysis conditions come back as fixed
    /// strings, and any internal rendering fault is caught here, logged, and
    /// replaced by the apology string. The conversational surface is never
    /// interrupted.
    pub fn answer_followup(&mut self, question: &str) -> String {
        let response = match self.try_answer_followup(question) {
            Ok(text) => text,
            Err(err) => {
                error!(%err, "follow-up response generation failed");
                APOLOGY_MESSAGE.to_string()
            }
        };
        self.context.push(Speaker::User, question);
        self.context.push(Speaker::Assistant, response.clone());
        response
    }

    fn try_answer_followup(&self, question: &str) -> Result<String, CoreError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(NO_ANALYSIS_MESSAGE.to_string());
        };
        let Some(current) = snapshot.top_feature() else {
            return Ok(NO_ISSUES_IN_ANALYSIS_MESSAGE.to_string());
        };
        let intent = FollowupIntent::classify(question);
        render(intent, current.category)
    }

    /// Whether a message should be treated as a follow-up to the stored
    /// analysis: there is a non-empty snapshot and the message names a
    /// detected category or contains a follow-up cue keyword.
    pub fn followup_applies(&self, message: &str) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        if snapshot.features.is_empty() {
            return false;
        }
        let message = message.to_lowercase();
        snapshot
            .features
            .iter()
            .any(|f| message.contains(f.category.display_name()))
            || FOLLOWUP_CUE_KEYWORDS.iter().any(|k| message.contains(k))
    }
}
