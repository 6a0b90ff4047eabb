//! Follow-up intent classification and detail rendering.
//!
//! After an image analysis, the user can drill into the top-ranked issue.
//! Intent is keyword-set membership over the lowercased question, tested in
//! fixed priority order: professional, repair, cost, timeline, prevention,
//! then a category overview as the fallback. Every branch renders a
//! deterministic text block from the category's static detail record; none
//! of them consult the embedding model again.

use std::fmt::Write;

use crate::category::{CategoryDetails, IssueCategory};
use crate::error::CoreError;

const PROFESSIONAL_KEYWORDS: &[&str] = &["who", "contact", "professional", "expert", "call", "hire"];
const REPAIR_KEYWORDS: &[&str] = &["repair", "fix", "steps", "how to", "process"];
const COST_KEYWORDS: &[&str] = &["cost", "price", "expensive", "money", "charges"];
const TIMELINE_KEYWORDS: &[&str] = &["time", "long", "duration", "timeline", "when"];
const PREVENTION_KEYWORDS: &[&str] = &["prevent", "avoid", "stop", "future"];

/// Cues that a message references the stored analysis rather than opening a
/// new topic. Used by the router to pick the follow-up pathway.
pub const FOLLOWUP_CUE_KEYWORDS: &[&str] = &[
    "repair", "fix", "issue", "problem", "damage", "cost", "price", "timeline", "time",
    "how long", "steps", "process", "prevent", "avoid", "professional", "who", "contact", "help",
];

/// What the user wants to know about the current issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowupIntent {
    Professional,
    Repair,
    Cost,
    Timeline,
    Prevention,
    Overview,
}

impl FollowupIntent {
    /// Classify a question. First keyword set that matches wins.
    pub fn classify(question: &str) -> Self {
        let question = question.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| question.contains(k));

        if contains_any(PROFESSIONAL_KEYWORDS) {
            FollowupIntent::Professional
        } else if contains_any(REPAIR_KEYWORDS) {
            FollowupIntent::Repair
        } else if contains_any(COST_KEYWORDS) {
            FollowupIntent::Cost
        } else if contains_any(TIMELINE_KEYWORDS) {
            FollowupIntent::Timeline
        } else if contains_any(PREVENTION_KEYWORDS) {
            FollowupIntent::Prevention
        } else {
            FollowupIntent::Overview
        }
    }
}

/// Render the response block for one intent against one category.
pub fn render(intent: FollowupIntent, category: IssueCategory) -> Result<String, CoreError> {
    let details = category.details();
    match intent {
        FollowupIntent::Professional => render_professionals(category, details),
        FollowupIntent::Repair => render_repair(category, details),
        FollowupIntent::Cost => render_cost(category, details),
        FollowupIntent::Timeline => render_timeline(category, details),
        FollowupIntent::Prevention => render_prevention(category, details),
        FollowupIntent::Overview => render_overview(category, details),
    }
}

fn render_professionals(
    category: IssueCategory,
    details: &CategoryDetails,
) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "For {category}, you should contact:\n")?;
    writeln!(out, "Recommended Professionals:")?;
    for prof in details.professionals {
        writeln!(out, "• {prof}")?;
    }
    writeln!(out, "\nQualifications to look for:\n{}", details.qualifications)?;
    writeln!(out, "\nAlways verify:")?;
    writeln!(out, "• Professional licenses")?;
    writeln!(out, "• Insurance coverage")?;
    writeln!(out, "• Local certifications")?;
    write!(out, "• Previous experience with similar issues")?;
    Ok(out)
}

fn render_repair(category: IssueCategory, details: &CategoryDetails) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "Here's a detailed repair plan for the {category}:\n")?;
    writeln!(out, "Step-by-step repair process:")?;
    for (i, step) in details.repair_steps.iter().enumerate() {
        writeln!(out, "{}. {step}", i + 1)?;
    }
    writeln!(out, "\nEstimated Timeline: {}", details.timeline)?;
    writeln!(out, "Typical Cost Range: {}", details.estimated_cost)?;
    write!(
        out,
        "\nWould you like information about professionals who can help with these repairs?"
    )?;
    Ok(out)
}

fn render_cost(category: IssueCategory, details: &CategoryDetails) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "Cost breakdown for {category} repair:\n")?;
    writeln!(out, "Total Estimated Range: {}\n", details.estimated_cost)?;
    writeln!(out, "This typically includes:")?;
    writeln!(out, "• Initial inspection and assessment")?;
    writeln!(out, "• Labor costs")?;
    writeln!(out, "• Materials and equipment")?;
    writeln!(out, "• Permits if required")?;
    writeln!(out, "• Clean-up and disposal\n")?;
    writeln!(out, "Factors that may affect cost:")?;
    writeln!(out, "• Severity of the damage")?;
    writeln!(out, "• Property location")?;
    writeln!(out, "• Material choices")?;
    writeln!(out, "• Underlying issues discovered")?;
    write!(out, "• Emergency/rush service needs")?;
    Ok(out)
}

fn render_timeline(category: IssueCategory, details: &CategoryDetails) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "Timeline for {category} repair:\n")?;
    writeln!(out, "Total Estimated Duration: {}\n", details.timeline)?;
    writeln!(out, "Process Breakdown:")?;
    writeln!(out, "1. Initial Assessment: 1-2 days")?;
    writeln!(out, "2. Planning and Permits: 2-3 days")?;
    writeln!(out, "3. Material Procurement: 1-5 days")?;
    writeln!(out, "4. Actual Repair Work: Varies")?;
    writeln!(out, "5. Final Inspection: 1-2 days\n")?;
    writeln!(out, "Factors that may affect timeline:")?;
    writeln!(out, "• Contractor availability")?;
    writeln!(out, "• Material availability")?;
    writeln!(out, "• Weather conditions")?;
    writeln!(out, "• Permit processing")?;
    write!(out, "• Additional issues discovered")?;
    Ok(out)
}

fn render_prevention(
    category: IssueCategory,
    details: &CategoryDetails,
) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "Prevention measures for {category}:\n")?;
    writeln!(out, "Recommended steps:")?;
    for measure in details.prevention {
        writeln!(out, "• {measure}")?;
    }
    writeln!(out, "\nRegular Maintenance Schedule:")?;
    writeln!(out, "• Monthly visual inspections")?;
    writeln!(out, "• Quarterly detailed checks")?;
    writeln!(out, "• Annual professional assessment")?;
    writeln!(out, "\nWarning signs to watch for:")?;
    writeln!(out, "• Changes in appearance")?;
    writeln!(out, "• Unusual sounds or smells")?;
    writeln!(out, "• Water stains or moisture")?;
    write!(out, "• Cracks or movement")?;
    Ok(out)
}

fn render_overview(category: IssueCategory, details: &CategoryDetails) -> Result<String, CoreError> {
    let mut out = String::new();
    writeln!(out, "Overview of the {category} issue:\n")?;
    writeln!(out, "I can provide detailed information about:\n")?;
    writeln!(out, "1. Repair Steps ({} step process)", details.repair_steps.len())?;
    writeln!(out, "2. Cost Estimates ({})", details.estimated_cost)?;
    writeln!(out, "3. Timeline ({})", details.timeline)?;
    writeln!(out, "4. Prevention Measures ({} recommendations)", details.prevention.len())?;
    writeln!(out, "5. Professional Help\n")?;
    write!(out, "What specific aspect would you like to know more about?")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_priority_order() {
        // "who" (professional) outranks "repair" when both appear.
        assert_eq!(
            FollowupIntent::classify("who can repair this?"),
            FollowupIntent::Professional
        );
        // "repair" outranks "cost".
        assert_eq!(
            FollowupIntent::classify("repair cost please"),
            FollowupIntent::Repair
        );
        assert_eq!(
            FollowupIntent::classify("how much will it cost?"),
            FollowupIntent::Cost
        );
        assert_eq!(
            FollowupIntent::classify("how long will this take, roughly?"),
            FollowupIntent::Timeline
        );
        assert_eq!(
            FollowupIntent::classify("can I avoid this in the future?"),
            FollowupIntent::Prevention
        );
    }

    #[test]
    fn test_unrecognized_intent_is_overview() {
        assert_eq!(FollowupIntent::classify("tell me more"), FollowupIntent::Overview);
        assert_eq!(FollowupIntent::classify(""), FollowupIntent::Overview);
    }

    #[test]
    fn test_cost_block_contains_estimate_verbatim() {
        let text = render(FollowupIntent::Cost, IssueCategory::Mold).unwrap();
        assert!(text.contains("$500 - $6,000"));
        assert!(text.contains("Cost breakdown for mold repair"));
    }

    #[test]
    fn test_repair_block_numbers_steps() {
        let text = render(FollowupIntent::Repair, IssueCategory::WaterDamage).unwrap();
        assert!(text.contains("1. Emergency water extraction"));
        assert!(text.contains("7. Replace damaged materials"));
    }

    #[test]
    fn test_professional_block_lists_qualifications() {
        let text = render(FollowupIntent::Professional, IssueCategory::StructuralDamage).unwrap();
        assert!(text.contains("Structural Engineer"));
        assert!(text.contains("Qualifications to look for"));
    }

    #[test]
    fn test_overview_mentions_all_sections() {
        let text = render(FollowupIntent::Overview, IssueCategory::WindowIssues).unwrap();
        assert!(text.contains("Repair Steps"));
        assert!(text.contains("Cost Estimates"));
        assert!(text.contains("Timeline"));
        assert!(text.contains("Prevention Measures"));
        assert!(text.contains("Professional Help"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(FollowupIntent::Prevention, IssueCategory::Electrical).unwrap();
        let b = render(FollowupIntent::Prevention, IssueCategory::Electrical).unwrap();
        assert_eq!(a, b);
    }
}
