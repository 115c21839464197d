// Keyword-family indicator scoring and technique extraction.
//
// Each analyzer kind has a fixed indicator set. A keyword family being
// mentioned sets its indicator to the response's extracted confidence
// (clamped); absence leaves it at 0. Scoring is deterministic: the same
// text and confidence always produce the same indicator map.

use std::collections::HashMap;

use super::clamp_score;
use crate::models::AnalyzerKind;

/// Keyword families per indicator key, per analyzer kind.
fn families(kind: AnalyzerKind) -> &'static [(&'static str, &'static [&'static str])] {
    match kind {
        AnalyzerKind::AiDetection => &[
            ("facial_inconsistencies", &["facial", "face"]),
            ("temporal_artifacts", &["temporal", "flicker"]),
            ("lighting_anomalies", &["lighting", "shadow"]),
            ("compression_artifacts", &["compression", "artifact"]),
        ],
        AnalyzerKind::Manipulation => &[
            ("temporal_inconsistencies", &["temporal", "flicker", "frame rate"]),
            ("spatial_edits", &["splice", "object", "edit", "composit"]),
            ("quality_shifts", &["quality", "blur", "bitrate"]),
        ],
        AnalyzerKind::Authenticity => &[
            ("metadata_consistency", &["metadata", "exif", "timestamp"]),
            ("source_verification", &["verified", "original source", "provenance"]),
            ("compression_history", &["re-encode", "recompress", "transcode", "compression"]),
        ],
    }
}

/// Known generation techniques the AI-detection analyzer names in prose.
const TECHNIQUE_VOCABULARY: &[&str] = &[
    "face swap",
    "faceswap",
    "deepfake",
    "gan",
    "diffusion",
    "lip sync",
    "lip-sync",
    "style transfer",
    "puppet",
    "voice clone",
];

/// Score the fixed indicator set for one analyzer kind against a response.
///
/// Every key of the kind is present in the returned map, so callers never
/// have to treat a missing key as implicit zero.
pub fn score_indicators(kind: AnalyzerKind, text: &str, confidence: f64) -> HashMap<String, f64> {
    let lower = text.to_lowercase();
    let mut indicators = HashMap::new();

    for (key, keywords) in families(kind) {
        let hit = keywords.iter().any(|kw| lower.contains(kw));
        let value = if hit { clamp_score(confidence) } else { 0.0 };
        indicators.insert((*key).to_string(), value);
    }

    indicators
}

/// Pull named generation techniques out of an AI-detection response.
/// Returned in vocabulary order; duplicates collapse.
pub fn extract_techniques(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut techniques = Vec::new();

    for technique in TECHNIQUE_VOCABULARY {
        if lower.contains(technique) && !techniques.iter().any(|t: &String| t == technique) {
            techniques.push((*technique).to_string());
        }
    }

    techniques
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_family_scores_confidence() {
        let map = score_indicators(
            AnalyzerKind::AiDetection,
            "clear facial warping and lighting mismatch",
            72.0,
        );
        assert_eq!(map["facial_inconsistencies"], 72.0);
        assert_eq!(map["lighting_anomalies"], 72.0);
        assert_eq!(map["temporal_artifacts"], 0.0);
        assert_eq!(map["compression_artifacts"], 0.0);
    }

    #[test]
    fn all_keys_always_present() {
        let map = score_indicators(AnalyzerKind::AiDetection, "nothing here", 90.0);
        assert_eq!(map.len(), 4);
        assert!(map.values().all(|v| *v == 0.0));
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "temporal flicker with visible compression artifacts";
        let a = score_indicators(AnalyzerKind::AiDetection, text, 55.0);
        let b = score_indicators(AnalyzerKind::AiDetection, text, 55.0);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_confidence_clamped() {
        let map = score_indicators(AnalyzerKind::Manipulation, "quality drop", 180.0);
        assert_eq!(map["quality_shifts"], 100.0);
    }

    #[test]
    fn case_insensitive_matching() {
        let map = score_indicators(AnalyzerKind::Authenticity, "EXIF Metadata intact", 60.0);
        assert_eq!(map["metadata_consistency"], 60.0);
    }

    #[test]
    fn techniques_deduplicated() {
        let t = extract_techniques("a GAN-based deepfake; the gan output shows lip sync issues");
        assert_eq!(t, vec!["deepfake", "gan", "lip sync"]);
    }

    #[test]
    fn no_techniques_in_clean_text() {
        assert!(extract_techniques("an ordinary phone recording").is_empty());
    }
}
