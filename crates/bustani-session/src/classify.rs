//! # Classification Module
//!
//! The seam between the crop scan screen and whatever produces its verdicts.
//!
//! ## Provider Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scan screen ──► ClassificationProvider::classify(input)                │
//! │                          │                                              │
//! │            ┌─────────────┴─────────────┐                                │
//! │            ▼                           ▼                                │
//! │     MockClassifier               (future: real model)                   │
//! │     random pick from a           same trait, no call-site               │
//! │     fixed verdict table          changes                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Call sites only see the trait, so swapping in a genuine model later
//! touches nothing but construction.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Types
// =============================================================================

/// What the scan screen hands to the provider: a reference to the captured
/// image. No pixel data crosses this boundary in the mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanInput {
    pub image_ref: String,
}

/// Severity of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Moderate,
    Critical,
}

/// A classification verdict as shown on the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Detected issue ("Leaf Spot (Cercospora)") or "Healthy Crop".
    pub name: String,

    /// Confidence in basis points (9850 = 98.5%).
    pub confidence_bps: u32,

    pub severity: Severity,

    /// Recommended treatment text.
    pub treatment: String,
}

impl Classification {
    /// Confidence as a percentage, for display only.
    pub fn confidence_pct(&self) -> f64 {
        self.confidence_bps as f64 / 100.0
    }
}

// =============================================================================
// Provider Trait
// =============================================================================

/// Anything that can turn a scan into a verdict.
pub trait ClassificationProvider: Send + Sync {
    fn classify(&self, input: &ScanInput) -> Classification;
}

// =============================================================================
// Mock Provider
// =============================================================================

/// The mock provider: a uniform random pick from a fixed verdict table.
///
/// Stands in for an external classification service until one exists.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    results: Vec<Classification>,
}

impl MockClassifier {
    /// The marketplace's built-in verdict table.
    pub fn new() -> Self {
        MockClassifier {
            results: vec![
                Classification {
                    name: "Leaf Spot (Cercospora)".to_string(),
                    confidence_bps: 9_850,
                    severity: Severity::Critical,
                    treatment: "Immediate application of copper fungicide required. \
                                Prune infected leaves."
                        .to_string(),
                },
                Classification {
                    name: "Healthy Crop".to_string(),
                    confidence_bps: 9_990,
                    severity: Severity::None,
                    treatment: "Keep up the good work! Maintain regular watering schedule."
                        .to_string(),
                },
                Classification {
                    name: "Aphid Infestation".to_string(),
                    confidence_bps: 8_720,
                    severity: Severity::Moderate,
                    treatment: "Introduce ladybugs or apply neem oil spray every 3 days."
                        .to_string(),
                },
            ],
        }
    }

    /// A mock with a caller-supplied verdict table (single-entry tables make
    /// deterministic tests).
    pub fn with_results(results: Vec<Classification>) -> Self {
        assert!(!results.is_empty(), "verdict table must not be empty");
        MockClassifier { results }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        MockClassifier::new()
    }
}

impl ClassificationProvider for MockClassifier {
    fn classify(&self, input: &ScanInput) -> Classification {
        let verdict = self
            .results
            .choose(&mut rand::thread_rng())
            .expect("verdict table checked non-empty at construction")
            .clone();
        debug!(image = %input.image_ref, verdict = %verdict.name, "mock classification");
        verdict
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScanInput {
        ScanInput {
            image_ref: "capture-001".to_string(),
        }
    }

    #[test]
    fn test_mock_picks_from_table() {
        let classifier = MockClassifier::new();
        let names: Vec<String> = classifier.results.iter().map(|r| r.name.clone()).collect();

        for _ in 0..20 {
            let verdict = classifier.classify(&input());
            assert!(names.contains(&verdict.name));
        }
    }

    #[test]
    fn test_single_entry_table_is_deterministic() {
        let classifier = MockClassifier::with_results(vec![Classification {
            name: "Healthy Crop".to_string(),
            confidence_bps: 9_990,
            severity: Severity::None,
            treatment: "Maintain regular watering schedule.".to_string(),
        }]);

        let verdict = classifier.classify(&input());
        assert_eq!(verdict.name, "Healthy Crop");
        assert_eq!(verdict.severity, Severity::None);
        assert!((verdict.confidence_pct() - 99.9).abs() < 1e-9);
    }

    #[test]
    fn test_call_sites_see_the_trait() {
        // The screen depends on the trait object, not the mock.
        let provider: Box<dyn ClassificationProvider> = Box::new(MockClassifier::new());
        let verdict = provider.classify(&input());
        assert!(!verdict.treatment.is_empty());
    }
}
