//! Propdesk core - routing and classification engine for the property
//! assistant.
//!
//! Decides, per incoming message, which specialized responder answers, which
//! knowledge entry or issue category matches free text, and how image-derived
//! feature scores become a prioritized, stateful diagnosis that can be
//! drilled into over multiple turns. No I/O, no locking, no persistence:
//! transport, storage, and the embedding model are external collaborators.

pub mod analysis;
pub mod category;
pub mod error;
pub mod followup;
pub mod knowledge;
pub mod router;
pub mod session;
pub mod store;
pub mod tenancy;

pub use analysis::{
    features_from_scores, scores_from_json, AnalysisPayload, AnalysisSnapshot, DetectedFeature,
    LabelScore, CONFIDENCE_THRESHOLD,
};
pub use category::{classify_label, IssueCategory, CANDIDATE_LABELS};
pub use error::CoreError;
pub use router::{route, AgentKind, ChatRequest, RouteReply};
pub use session::SessionState;
pub use store::SessionStore;
