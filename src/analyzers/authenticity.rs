// Authenticity verification analyzer.
//
// Two variants: a provenance pass (where else does this footage appear, is
// there a named original source) and a metadata pass (creation date,
// device, location, compression history). Platform mentions become
// provisional sources with preset verification status.

use super::PromptVariant;
use crate::models::{AnalyzerKind, AnalyzerResult};
use crate::parse::{confidence, indicators, sources};

pub const VARIANTS: &[PromptVariant] = &[
    PromptVariant {
        label: "provenance",
        prompt: "Assess the provenance of this video. Does it match footage from a \
                 known original source, news media, or a social platform (YouTube, \
                 TikTok, Instagram, Twitter, Reddit)? Name every platform you \
                 recognize and state your confidence as a percentage that the video \
                 is authentic original footage.",
    },
    PromptVariant {
        label: "metadata",
        prompt: "Assess the technical authenticity of this video. Report any creation \
                 date, recording device, or location you can infer, and describe its \
                 compression history (codecs, re-encoding generations). State your \
                 confidence as a percentage that the file is an unaltered original.",
    },
];

/// Parse one variant's response into an authenticity result.
pub fn parse_response(text: &str) -> AnalyzerResult {
    let conf = confidence::extract_confidence(text);

    AnalyzerResult {
        confidence: conf,
        explanation: text.trim().to_string(),
        indicators: indicators::score_indicators(AnalyzerKind::Authenticity, text, conf),
        techniques: Vec::new(),
        anomalies: Vec::new(),
        sources: sources::extract_sources(text, conf),
        metadata: sources::extract_metadata(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sources_and_metadata() {
        let r = parse_response(
            "Confidence: 70%. Earliest copy on YouTube, matches news media footage. \
             Shot on iPhone 12. Creation date 2021-05-09. H264 with one transcode pass.",
        );
        assert_eq!(r.confidence, 70.0);
        assert_eq!(r.sources.len(), 2);
        assert_eq!(r.metadata.creation_date.as_deref(), Some("2021-05-09"));
        assert_eq!(r.metadata.device_info.as_deref(), Some("iPhone 12"));
        assert_eq!(r.metadata.compression_history, vec!["h264", "transcode"]);
        assert!(r.indicators["compression_history"] > 0.0);
    }

    #[test]
    fn empty_response_degrades_to_defaults() {
        let r = parse_response("");
        assert_eq!(r.confidence, 0.0);
        assert!(r.sources.is_empty());
        assert!(r.metadata.is_empty());
    }
}
