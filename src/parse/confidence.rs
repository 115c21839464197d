// Confidence extraction.
//
// Providers phrase their certainty in many ways; the two patterns below
// cover "confidence: 85%" / "confidence 85" and "85% confidence". The
// first match wins, the value is clamped to 0-100, and a response with no
// stated confidence scores 0 rather than failing.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::clamp_score;

fn confidence_prefixed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)confidence[:\s]*(\d+)%?").expect("valid regex"))
}

fn confidence_suffixed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)%?\s*confidence").expect("valid regex"))
}

/// Extract the stated confidence from a provider response, 0-100.
pub fn extract_confidence(text: &str) -> f64 {
    let captured = confidence_prefixed()
        .captures(text)
        .or_else(|| confidence_suffixed().captures(text));

    match captured.and_then(|c| c.get(1)) {
        Some(m) => match m.as_str().parse::<f64>() {
            Ok(v) => clamp_score(v),
            Err(_) => 0.0,
        },
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_with_colon_and_percent() {
        assert_eq!(extract_confidence("Confidence: 85%"), 85.0);
    }

    #[test]
    fn prefixed_with_space_only() {
        assert_eq!(extract_confidence("my confidence 72 overall"), 72.0);
    }

    #[test]
    fn suffixed_form() {
        assert_eq!(extract_confidence("I'd say 64% confidence here"), 64.0);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract_confidence("Confidence: 30%. Revised: 90% confidence."),
            30.0
        );
    }

    #[test]
    fn prefixed_takes_priority_over_suffixed() {
        // Both patterns present; the prefixed pattern is tried first
        assert_eq!(
            extract_confidence("95% confidence... but my confidence: 20"),
            20.0
        );
    }

    #[test]
    fn absent_defaults_to_zero() {
        assert_eq!(extract_confidence("the video looks fine"), 0.0);
    }

    #[test]
    fn overlong_value_clamps_to_100() {
        assert_eq!(extract_confidence("confidence: 250%"), 100.0);
    }

    #[test]
    fn empty_text() {
        assert_eq!(extract_confidence(""), 0.0);
    }
}
