// AI-generation detection analyzer.
//
// Three variants probe the same question from different angles: an overall
// judgment, a facial-region pass, and an artifact-focused pass. Each
// response is mined for a confidence, the fixed indicator set, and named
// generation techniques.

use super::PromptVariant;
use crate::models::{AnalyzerKind, AnalyzerResult, SourceMetadata};
use crate::parse::{confidence, indicators};

pub const VARIANTS: &[PromptVariant] = &[
    PromptVariant {
        label: "overall",
        prompt: "Analyze this video for signs of AI generation. Consider facial \
                 consistency, temporal coherence, lighting, and compression artifacts. \
                 State your confidence as a percentage and name any generation \
                 techniques you suspect (e.g. face swap, GAN, diffusion).",
    },
    PromptVariant {
        label: "facial",
        prompt: "Examine the faces in this video closely. Look for warping around \
                 facial boundaries, unnatural blinking, inconsistent skin texture, and \
                 lip sync mismatches typical of deepfakes. State your confidence as a \
                 percentage that the faces are synthetic.",
    },
    PromptVariant {
        label: "artifacts",
        prompt: "Inspect this video for generation artifacts: temporal flicker, \
                 lighting and shadow inconsistencies between frames, and unusual \
                 compression patterns. State your confidence as a percentage that the \
                 video was machine-generated.",
    },
];

/// Parse one variant's response into an AI-detection result.
pub fn parse_response(text: &str) -> AnalyzerResult {
    let conf = confidence::extract_confidence(text);

    AnalyzerResult {
        confidence: conf,
        explanation: text.trim().to_string(),
        indicators: indicators::score_indicators(AnalyzerKind::AiDetection, text, conf),
        techniques: indicators::extract_techniques(text),
        anomalies: Vec::new(),
        sources: Vec::new(),
        metadata: SourceMetadata::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_confidence_indicators_and_techniques() {
        let r = parse_response(
            "Confidence: 78%. Facial boundaries show GAN-typical warping and \
             temporal flicker between frames.",
        );
        assert_eq!(r.confidence, 78.0);
        assert_eq!(r.indicators["facial_inconsistencies"], 78.0);
        assert_eq!(r.indicators["temporal_artifacts"], 78.0);
        assert_eq!(r.indicators["lighting_anomalies"], 0.0);
        assert_eq!(r.techniques, vec!["gan"]);
    }

    #[test]
    fn clean_response_scores_zero() {
        let r = parse_response("Nothing suspicious here.");
        assert_eq!(r.confidence, 0.0);
        assert!(r.techniques.is_empty());
        assert!(r.indicators.values().all(|v| *v == 0.0));
    }
}
