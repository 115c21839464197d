// Boundary tests for the weighted credibility score and tier mapping.

use std::collections::HashMap;

use veracity::models::{AnalyzerResult, CredibilityTier};
use veracity::scoring::credibility::{aggregate, credibility_score};

fn result_with_confidence(confidence: f64) -> AnalyzerResult {
    AnalyzerResult {
        confidence,
        explanation: "test".to_string(),
        indicators: HashMap::new(),
        techniques: Vec::new(),
        anomalies: Vec::new(),
        sources: Vec::new(),
        metadata: Default::default(),
    }
}

#[test]
fn pristine_video_scores_one_hundred() {
    // ai=0, manipulation=0, authenticity=100:
    // (100-0)*0.40 + (100-0)*0.35 + 100*0.25 = 40 + 35 + 25 = 100
    assert_eq!(credibility_score(0.0, 0.0, 100.0), 100);
}

#[test]
fn worst_case_scores_zero() {
    // ai=100, manipulation=100, authenticity=0:
    // 0*0.40 + 0*0.35 + 0*0.25 = 0
    assert_eq!(credibility_score(100.0, 100.0, 0.0), 0);
}

#[test]
fn worked_example_scores_twenty_four() {
    // (100-80)*0.40 + (100-70)*0.35 + 20*0.25 = 8 + 10.5 + 5 = 23.5 -> 24
    assert_eq!(credibility_score(80.0, 70.0, 20.0), 24);
}

#[test]
fn tier_boundaries_are_inclusive_at_the_bottom() {
    assert_eq!(CredibilityTier::from_score(100), CredibilityTier::High);
    assert_eq!(CredibilityTier::from_score(80), CredibilityTier::High);
    assert_eq!(CredibilityTier::from_score(79), CredibilityTier::Moderate);
    assert_eq!(CredibilityTier::from_score(60), CredibilityTier::Moderate);
    assert_eq!(CredibilityTier::from_score(59), CredibilityTier::Low);
    assert_eq!(CredibilityTier::from_score(40), CredibilityTier::Low);
    assert_eq!(CredibilityTier::from_score(39), CredibilityTier::VeryLow);
    assert_eq!(CredibilityTier::from_score(0), CredibilityTier::VeryLow);
}

#[test]
fn score_is_monotone_in_each_input() {
    // Raising either detection confidence never raises the score, and
    // raising authenticity confidence never lowers it.
    for step in 0..=10 {
        let v = step as f64 * 10.0;
        assert!(credibility_score(v, 50.0, 50.0) <= credibility_score(0.0, 50.0, 50.0));
        assert!(credibility_score(50.0, v, 50.0) <= credibility_score(50.0, 0.0, 50.0));
        assert!(credibility_score(50.0, 50.0, v) >= credibility_score(50.0, 50.0, 0.0));
    }
}

#[test]
fn score_is_always_in_range() {
    for ai in [0.0, 25.0, 50.0, 75.0, 100.0] {
        for manip in [0.0, 33.0, 66.0, 100.0] {
            for auth in [0.0, 50.0, 100.0] {
                let score = credibility_score(ai, manip, auth);
                assert!(score <= 100, "score {score} out of range");
            }
        }
    }
}

#[test]
fn verdict_carries_tier_label_and_guidance() {
    let verdict = aggregate(
        &result_with_confidence(80.0),
        &result_with_confidence(70.0),
        &result_with_confidence(20.0),
    );
    assert_eq!(verdict.credibility_score, 24);
    assert!(verdict.recommendation.starts_with("VERY LOW CREDIBILITY:"));
    assert!(verdict.summary.contains("24/100"));
}

#[test]
fn aggregation_is_deterministic() {
    let ai = result_with_confidence(42.0);
    let manip = result_with_confidence(17.0);
    let auth = result_with_confidence(63.0);
    let first = aggregate(&ai, &manip, &auth);
    for _ in 0..5 {
        let again = aggregate(&ai, &manip, &auth);
        assert_eq!(again.credibility_score, first.credibility_score);
        assert_eq!(again.recommendation, first.recommendation);
        assert_eq!(again.summary, first.summary);
    }
}
