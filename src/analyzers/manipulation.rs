// Manipulation detection analyzer.
//
// Variants cover temporal edits (cuts, splices), spatial edits (object
// insertion/removal, compositing), and quality shifts (re-encode
// boundaries). Responses are mined for timecoded anomalies; the adapter's
// fold consolidates overlapping reports of the same event.

use super::PromptVariant;
use crate::models::{AnalyzerKind, AnalyzerResult, SourceMetadata};
use crate::parse::{confidence, indicators, timeline};

pub const VARIANTS: &[PromptVariant] = &[
    PromptVariant {
        label: "temporal",
        prompt: "Analyze this video for temporal manipulation: cuts, splices, deleted \
                 or inserted segments, and frame-rate inconsistencies. Report each \
                 finding with a timestamp (MM:SS or seconds) and state your overall \
                 confidence as a percentage.",
    },
    PromptVariant {
        label: "spatial",
        prompt: "Analyze this video for spatial manipulation: object insertion or \
                 removal, background compositing, and cloned regions. Report each \
                 finding with a timestamp (MM:SS or seconds) and state your overall \
                 confidence as a percentage.",
    },
    PromptVariant {
        label: "quality",
        prompt: "Analyze this video for quality discontinuities that suggest editing: \
                 sudden bitrate or sharpness changes, re-encoded segments, and \
                 audio/visual sync drift. Report each finding with a timestamp (MM:SS \
                 or seconds) and state your overall confidence as a percentage.",
    },
];

/// Parse one variant's response into a manipulation result. The duration
/// hint bounds extracted timestamps and spaces any synthesized anomalies.
pub fn parse_response(text: &str, duration_hint: f64) -> AnalyzerResult {
    let conf = confidence::extract_confidence(text);

    AnalyzerResult {
        confidence: conf,
        explanation: text.trim().to_string(),
        indicators: indicators::score_indicators(AnalyzerKind::Manipulation, text, conf),
        techniques: Vec::new(),
        anomalies: timeline::extract_anomalies(text, duration_hint, conf),
        sources: Vec::new(),
        metadata: SourceMetadata::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnomalyKind;

    #[test]
    fn cut_at_1_05_parses_to_65_seconds() {
        let r = parse_response("confidence: 85% ... cut detected at 1:05", 120.0);
        assert_eq!(r.confidence, 85.0);
        assert_eq!(r.anomalies.len(), 1);
        assert_eq!(r.anomalies[0].timestamp, 65.0);
        assert_eq!(r.anomalies[0].kind, AnomalyKind::Cut);
    }

    #[test]
    fn high_confidence_without_timestamps_synthesizes() {
        let r = parse_response("Extensive manipulation, confidence 90%", 100.0);
        assert_eq!(r.anomalies.len(), 3);
    }

    #[test]
    fn low_confidence_without_timestamps_stays_empty() {
        let r = parse_response("Probably fine, confidence 20%", 100.0);
        assert!(r.anomalies.is_empty());
    }
}
