// Source and metadata extraction for the authenticity analyzer.
//
// Pulls creation dates, device info, location strings, and a fixed
// compression/codec vocabulary out of the response, plus a fixed platform
// vocabulary that becomes provisional AuthenticitySource entries. Each
// platform family presets `verified`: reverse-search hits on news media or
// a named original source count as verified, social platforms do not.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::clamp_score;
use crate::models::{AuthenticitySource, SourceMetadata};

/// Platform vocabulary with the `verified` preset per family.
const PLATFORMS: &[(&str, bool)] = &[
    ("youtube", false),
    ("tiktok", false),
    ("instagram", false),
    ("facebook", false),
    ("twitter", false),
    ("reddit", false),
    ("vimeo", false),
    ("news media", true),
    ("original source", true),
];

const COMPRESSION_VOCABULARY: &[&str] = &[
    "h264", "h.264", "h265", "h.265", "hevc", "av1", "vp8", "vp9", "mpeg", "prores",
    "re-encode", "reencode", "recompress", "transcode",
];

fn iso_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").expect("valid regex"))
}

fn prose_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b",
        )
        .expect("valid regex")
    })
}

fn device_info() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:shot on|recorded on|device:|camera:)\s*([^.,\n]+)")
            .expect("valid regex")
    })
}

fn location() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:location:|filmed in|recorded in)\s*([^.,\n]+)").expect("valid regex")
    })
}

fn url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid regex"))
}

/// Extract creation date, device, location, and compression history.
pub fn extract_metadata(text: &str) -> SourceMetadata {
    let creation_date = iso_date()
        .captures(text)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
        .or_else(|| prose_date().find(text).map(|m| m.as_str().to_string()));

    let device = device_info()
        .captures(text)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|s| !s.is_empty());

    let loc = location()
        .captures(text)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|s| !s.is_empty());

    let lower = text.to_lowercase();
    let mut compression_history = Vec::new();
    for codec in COMPRESSION_VOCABULARY {
        if lower.contains(codec) && !compression_history.iter().any(|c: &String| c == codec) {
            compression_history.push((*codec).to_string());
        }
    }

    SourceMetadata {
        creation_date,
        device_info: device,
        location: loc,
        compression_history,
    }
}

/// Build provisional sources from platform mentions. Similarity is the
/// response's parsed confidence; a URL whose host names the platform gets
/// attached when one appears in the text.
pub fn extract_sources(text: &str, confidence: f64) -> Vec<AuthenticitySource> {
    let lower = text.to_lowercase();
    let urls: Vec<&str> = url().find_iter(text).map(|m| m.as_str()).collect();

    PLATFORMS
        .iter()
        .filter(|(name, _)| lower.contains(name))
        .map(|(name, verified)| {
            let matched_url = urls
                .iter()
                .find(|u| u.to_lowercase().contains(&name.replace(' ', "")))
                .map(|u| (*u).to_string());
            AuthenticitySource {
                url: matched_url,
                similarity: clamp_score(confidence),
                source: (*name).to_string(),
                verified: *verified,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_extracted() {
        let md = extract_metadata("metadata shows a creation date of 2023-07-14.");
        assert_eq!(md.creation_date.as_deref(), Some("2023-07-14"));
    }

    #[test]
    fn prose_date_extracted() {
        let md = extract_metadata("apparently filmed on March 3, 2022 somewhere");
        assert_eq!(md.creation_date.as_deref(), Some("March 3, 2022"));
    }

    #[test]
    fn device_and_location() {
        let md = extract_metadata("Shot on iPhone 14 Pro. Filmed in Lisbon. Nothing else known.");
        assert_eq!(md.device_info.as_deref(), Some("iPhone 14 Pro"));
        assert_eq!(md.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn compression_history_deduplicated() {
        let md = extract_metadata("H264 stream, re-encoded twice; h264 artifacts visible");
        assert_eq!(md.compression_history, vec!["h264", "re-encode"]);
    }

    #[test]
    fn empty_text_yields_empty_metadata() {
        assert!(extract_metadata("").is_empty());
    }

    #[test]
    fn social_platform_is_unverified() {
        let sources = extract_sources("earliest copy found on TikTok", 65.0);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].source, "tiktok");
        assert!(!sources[0].verified);
        assert_eq!(sources[0].similarity, 65.0);
    }

    #[test]
    fn news_media_preset_verified() {
        let sources = extract_sources("matches news media footage from the original source", 80.0);
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|s| s.verified));
    }

    #[test]
    fn url_attached_when_host_matches() {
        let sources = extract_sources(
            "uploaded to YouTube at https://youtube.com/watch?v=abc first",
            50.0,
        );
        assert_eq!(
            sources[0].url.as_deref(),
            Some("https://youtube.com/watch?v=abc")
        );
    }

    #[test]
    fn similarity_clamped() {
        let sources = extract_sources("seen on reddit", 140.0);
        assert_eq!(sources[0].similarity, 100.0);
    }
}
