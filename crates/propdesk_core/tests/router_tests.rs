//! End-to-end routing scenarios through the public API.

use propdesk_core::router::{CLARIFY_PROMPT, UPLOAD_PROMPT};
use propdesk_core::{route, AgentKind, ChatRequest, LabelScore, SessionState};

fn text_request(message: &str) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        ..Default::default()
    }
}

fn image_request(message: &str, pairs: &[(&str, f32)]) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        image_ref: Some("cloud://upload-42".to_string()),
        image_scores: Some(
            pairs
                .iter()
                .map(|(label, confidence)| LabelScore {
                    label: label.to_string(),
                    confidence: *confidence,
                })
                .collect(),
        ),
        location: None,
    }
}

#[test]
fn eviction_emergency_scenario() {
    let mut session = SessionState::new();
    let reply = route(&mut session, &text_request("My landlord wants to evict me immediately"));
    assert_eq!(reply.agent, AgentKind::TenancyFaq);
    assert!(reply.response.contains("emergency cases like non-payment"));
}

#[test]
fn image_analysis_scenario() {
    let mut session = SessionState::new();
    let reply = route(
        &mut session,
        &image_request("what's wrong here?", &[("mold", 0.81), ("water stains", 0.45)]),
    );
    assert_eq!(reply.agent, AgentKind::IssueDetector);
    assert!(reply.response.contains("mold with high confidence"));
    assert!(reply.response.contains("water damage with moderate confidence"));

    let analysis = reply.analysis.expect("image pathway returns a payload");
    assert_eq!(analysis.issues.len(), 2);
    assert_eq!(analysis.issues[0].label, "mold");
    assert!(analysis.issues[0].confidence > analysis.issues[1].confidence);
}

#[test]
fn cost_followup_scenario() {
    let mut session = SessionState::new();
    route(
        &mut session,
        &image_request("", &[("mold", 0.81), ("water stains", 0.45)]),
    );

    let reply = route(&mut session, &text_request("how much will it cost?"));
    assert_eq!(reply.agent, AgentKind::IssueDetector);
    // The top-ranked issue (mold) answers; its cost range verbatim.
    assert!(reply.response.contains("Cost breakdown for mold repair"));
    assert!(reply.response.contains("$500 - $6,000"));
}

#[test]
fn unrelated_chatter_gets_clarification() {
    let mut session = SessionState::new();
    let reply = route(&mut session, &text_request("what's the weather"));
    assert_eq!(reply.agent, AgentKind::Router);
    assert_eq!(reply.response, CLARIFY_PROMPT);
}

#[test]
fn tenancy_keyword_never_routes_to_issue_pathway() {
    let messages = [
        "my rent is due",
        "questions about the lease",
        "my landlord is ignoring me",
        "tenant rights please",
        "can they evict me",
        "deposit not returned",
        "I got a notice yesterday",
        "the contract says otherwise",
        "before signing the agreement",
    ];
    for message in messages {
        let mut session = SessionState::new();
        let reply = route(&mut session, &text_request(message));
        assert_eq!(reply.agent, AgentKind::TenancyFaq, "message: {message}");
    }
}

#[test]
fn image_outranks_tenancy_and_issue_keywords() {
    let mut session = SessionState::new();
    let reply = route(
        &mut session,
        &image_request("my landlord won't repair this broken mold damage", &[("mold", 0.9)]),
    );
    assert_eq!(reply.agent, AgentKind::IssueDetector);
    assert!(reply.analysis.is_some());
}

#[test]
fn issue_keyword_without_pixels_prompts_for_upload() {
    let mut session = SessionState::new();
    let reply = route(&mut session, &text_request("something is broken in the bathroom"));
    assert_eq!(reply.agent, AgentKind::IssueDetector);
    assert_eq!(reply.response, UPLOAD_PROMPT);
    assert!(reply.analysis.is_none());
}

#[test]
fn threshold_boundary_filters_exact_point_two() {
    let mut session = SessionState::new();
    let reply = route(
        &mut session,
        &image_request("", &[("mold", 0.2), ("water stains", 0.2000001)]),
    );
    let analysis = reply.analysis.unwrap();
    assert_eq!(analysis.issues.len(), 1);
    assert_eq!(analysis.issues[0].label, "water stains");
}

#[test]
fn clean_image_then_followup() {
    let mut session = SessionState::new();
    let reply = route(&mut session, &image_request("is this ok?", &[("mold", 0.1)]));
    assert!(reply.response.contains("didn't detect any significant issues"));

    // Snapshot exists but is empty; the follow-up rule does not fire, and the
    // issue-keyword rule asks for another image.
    let reply = route(&mut session, &text_request("so no problem at all?"));
    assert_eq!(reply.response, UPLOAD_PROMPT);
}

#[test]
fn reply_serializes_for_the_transport_layer() {
    let mut session = SessionState::new();
    let reply = route(&mut session, &image_request("", &[("mold", 0.81)]));
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["agent"], "issue_detector");
    assert_eq!(json["analysis"]["issues"][0]["category"], "mold");
}
