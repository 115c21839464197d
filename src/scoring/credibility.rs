// Credibility aggregation.
//
// The final score inverts the two detection confidences (a confidently
// detected fake is a low-credibility video) and adds authenticity directly
// (well-corroborated provenance raises credibility):
//
//   score = round(clamp((100-ai)*0.40 + (100-manip)*0.35 + auth*0.25, 0, 100))
//
// The weights are fixed constants summing to 1.0. Aggregation is a pure
// function: the same three confidences always produce the same score and
// tier.

use crate::models::{AnalyzerResult, CredibilityTier, OverallVerdict, VideoAnalysisResult};

/// Weight of the (inverted) AI-generation confidence.
pub const AI_WEIGHT: f64 = 0.40;
/// Weight of the (inverted) manipulation confidence.
pub const MANIPULATION_WEIGHT: f64 = 0.35;
/// Weight of the (direct) authenticity confidence.
pub const AUTHENTICITY_WEIGHT: f64 = 0.25;

/// Compute the weighted credibility score from the three confidences.
pub fn credibility_score(ai_conf: f64, manip_conf: f64, auth_conf: f64) -> u32 {
    let raw = (100.0 - ai_conf) * AI_WEIGHT
        + (100.0 - manip_conf) * MANIPULATION_WEIGHT
        + auth_conf * AUTHENTICITY_WEIGHT;
    raw.clamp(0.0, 100.0).round() as u32
}

/// Produce the overall verdict from the three analyzer results.
pub fn aggregate(
    ai: &AnalyzerResult,
    manipulation: &AnalyzerResult,
    authenticity: &AnalyzerResult,
) -> OverallVerdict {
    let score = credibility_score(ai.confidence, manipulation.confidence, authenticity.confidence);
    let tier = CredibilityTier::from_score(score);

    let ai_clause = match ai.confidence {
        c if c > 70.0 => "The video is very likely AI-generated.",
        c if c > 40.0 => "The video shows some signs of AI generation.",
        _ => "The video shows little sign of AI generation.",
    };
    let manip_clause = match manipulation.confidence {
        c if c > 70.0 => "Heavy manipulation was detected.",
        c if c > 40.0 => "Some manipulation indicators are present.",
        _ => "No significant manipulation was detected.",
    };
    let auth_clause = match authenticity.confidence {
        c if c > 70.0 => "Its origin is well corroborated.",
        c if c > 40.0 => "Its origin is partially corroborated.",
        _ => "Its origin could not be verified.",
    };

    OverallVerdict {
        credibility_score: score,
        recommendation: format!("{}: {}", tier.label(), tier.guidance()),
        summary: format!("Credibility score {score}/100. {ai_clause} {manip_clause} {auth_clause}"),
    }
}

/// Non-fatal validation pass over a complete aggregate.
///
/// Checks every numeric field against its declared range and every anomaly
/// for a positive duration. Violations come back as warnings for the caller
/// to log; a slightly out-of-range number is worth flagging, not worth
/// withholding the whole result over.
pub fn validate(result: &VideoAnalysisResult) -> Vec<String> {
    let mut warnings = Vec::new();

    for (name, section) in [
        ("ai_generated", &result.ai_generated),
        ("manipulation", &result.manipulation),
        ("authenticity", &result.authenticity),
    ] {
        if !(0.0..=100.0).contains(&section.confidence) {
            warnings.push(format!(
                "{name}: confidence {} outside 0-100",
                section.confidence
            ));
        }
        for (key, value) in &section.indicators {
            if !(0.0..=100.0).contains(value) {
                warnings.push(format!("{name}: indicator {key} = {value} outside 0-100"));
            }
        }
        for source in &section.sources {
            if !(0.0..=100.0).contains(&source.similarity) {
                warnings.push(format!(
                    "{name}: source '{}' similarity {} outside 0-100",
                    source.source, source.similarity
                ));
            }
        }
        for anomaly in &section.anomalies {
            if anomaly.duration <= 0.0 {
                warnings.push(format!(
                    "{name}: anomaly at {}s has non-positive duration {}",
                    anomaly.timestamp, anomaly.duration
                ));
            }
            if !(0.0..=100.0).contains(&anomaly.confidence) {
                warnings.push(format!(
                    "{name}: anomaly at {}s confidence {} outside 0-100",
                    anomaly.timestamp, anomaly.confidence
                ));
            }
        }
    }

    if result.overall.credibility_score > 100 {
        warnings.push(format!(
            "overall: credibility score {} outside 0-100",
            result.overall.credibility_score
        ));
    }

    warnings
}
