//! Detected features, analysis snapshots, and the score-intake boundary.
//!
//! The embedding model is an external collaborator: given an image and the
//! fixed candidate vocabulary it returns one `(label, confidence)` pair per
//! label, unordered. This module applies the confidence threshold, maps
//! labels onto categories (dropping unmapped labels silently), and packages
//! the result as a snapshot plus a structured payload for the calling layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{classify_label, recommendation_for, IssueCategory};
use crate::error::CoreError;

/// Features at or below this score never become detections. Strict greater
/// than: exactly 0.2 is excluded.
pub const CONFIDENCE_THRESHOLD: f32 = 0.2;

/// One raw score from the embedding-model boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub confidence: f32,
}

/// A thresholded, category-mapped feature.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedFeature {
    pub label: String,
    pub confidence: f32,
    pub category: IssueCategory,
    pub recommendation: String,
}

/// The session's current "last analysis". Overwritten wholesale by each new
/// image upload; read by follow-up Q&A until replaced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot {
    pub timestamp: DateTime<Utc>,
    /// Always sorted by confidence descending
    pub features: Vec<DetectedFeature>,
    pub image_ref: Option<String>,
}

impl AnalysisSnapshot {
    pub fn new(mut features: Vec<DetectedFeature>, image_ref: Option<String>) -> Self {
        sort_by_confidence(&mut features);
        Self {
            timestamp: Utc::now(),
            features,
            image_ref,
        }
    }

    /// The highest-confidence detection. Follow-up answers only ever consult
    /// this one; lower-ranked co-detections are deliberately ignored.
    pub fn top_feature(&self) -> Option<&DetectedFeature> {
        self.features.first()
    }
}

/// Sort descending by confidence. Stable, so equal scores keep intake order.
pub fn sort_by_confidence(features: &mut [DetectedFeature]) {
    features.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Convert raw scores into detected features.
///
/// Applies the strict threshold, classifies each surviving label, and drops
/// labels outside the category vocabulary. The result is sorted descending
/// by confidence.
pub fn features_from_scores(scores: &[LabelScore]) -> Vec<DetectedFeature> {
    let mut features = Vec::new();
    for score in scores {
        if score.confidence <= CONFIDENCE_THRESHOLD {
            continue;
        }
        let Some(category) = classify_label(&score.label) else {
            debug!(label = %score.label, "dropping unmapped feature label");
            continue;
        };
        features.push(DetectedFeature {
            label: score.label.trim().to_lowercase(),
            confidence: score.confidence.clamp(0.0, 1.0),
            category,
            recommendation: recommendation_for(&score.label).to_string(),
        });
    }
    sort_by_confidence(&mut features);
    features
}

/// Parse a JSON score file, the CLI stand-in for the embedding-model call.
/// Format: `[{"label": "mold growth", "confidence": 0.81}, ...]`.
pub fn scores_from_json(text: &str) -> Result<Vec<LabelScore>, CoreError> {
    Ok(serde_json::from_str(text)?)
}

/// One issue in the structured payload echoed to the calling layer.
#[derive(Debug, Clone, Serialize)]
pub struct ReportedIssue {
    pub category: IssueCategory,
    pub label: String,
    pub confidence: f32,
    pub recommendation: String,
}

/// Structured analysis result suitable for persistence by the caller. The
/// engine itself never persists anything.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    pub timestamp: DateTime<Utc>,
    pub image_ref: Option<String>,
    pub issues: Vec<ReportedIssue>,
}

impl AnalysisPayload {
    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp,
            image_ref: snapshot.image_ref.clone(),
            issues: snapshot
                .features
                .iter()
                .map(|f| ReportedIssue {
                    category: f.category,
                    label: f.label.clone(),
                    confidence: f.confidence,
                    recommendation: f.recommendation.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, confidence: f32) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let features = features_from_scores(&[score("mold growth", 0.2)]);
        assert!(features.is_empty());

        let features = features_from_scores(&[score("mold growth", 0.2000001)]);
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn test_unmapped_labels_dropped() {
        let features = features_from_scores(&[
            score("poor lighting", 0.9),
            score("mold growth", 0.5),
        ]);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].category, IssueCategory::Mold);
    }

    #[test]
    fn test_sorted_descending() {
        let features = features_from_scores(&[
            score("water stains", 0.45),
            score("mold", 0.81),
            score("structural cracks", 0.6),
        ]);
        let confidences: Vec<f32> = features.iter().map(|f| f.confidence).collect();
        assert_eq!(confidences, vec![0.81, 0.6, 0.45]);
    }

    #[test]
    fn test_resort_of_sorted_is_noop() {
        let mut features = features_from_scores(&[score("mold", 0.81), score("water stains", 0.45)]);
        let before: Vec<String> = features.iter().map(|f| f.label.clone()).collect();
        sort_by_confidence(&mut features);
        let after: Vec<String> = features.iter().map(|f| f.label.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_confidence_clamped() {
        let features = features_from_scores(&[score("mold", 1.5)]);
        assert_eq!(features[0].confidence, 1.0);
    }

    #[test]
    fn test_snapshot_sorts_on_build() {
        let mut features = features_from_scores(&[score("mold", 0.3), score("water stains", 0.9)]);
        // Deliberately break the order before handing to the snapshot.
        features.reverse();
        let snapshot = AnalysisSnapshot::new(features, None);
        assert_eq!(snapshot.top_feature().unwrap().category, IssueCategory::WaterDamage);
    }

    #[test]
    fn test_scores_from_json() {
        let scores =
            scores_from_json(r#"[{"label": "mold growth", "confidence": 0.81}]"#).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].label, "mold growth");

        assert!(scores_from_json("not json").is_err());
    }

    #[test]
    fn test_payload_mirrors_snapshot() {
        let snapshot = AnalysisSnapshot::new(
            features_from_scores(&[score("mold", 0.81), score("water stains", 0.45)]),
            Some("img-1".to_string()),
        );
        let payload = AnalysisPayload::from_snapshot(&snapshot);
        assert_eq!(payload.issues.len(), 2);
        assert_eq!(payload.image_ref.as_deref(), Some("img-1"));
        assert_eq!(payload.issues[0].category, IssueCategory::Mold);
    }
}
