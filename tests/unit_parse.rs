// Unit tests for the response-mining functions at the crate boundary.
//
// Exercises the parsers the way analyzer adapters use them: full prose
// responses in, bounded structured signals out. Range invariants are
// checked on everything the parsers produce.

use veracity::models::{AnalyzerKind, AnomalyKind};
use veracity::parse::confidence::extract_confidence;
use veracity::parse::indicators::{extract_techniques, score_indicators};
use veracity::parse::sources::{extract_metadata, extract_sources};
use veracity::parse::timeline::extract_anomalies;

// ============================================================
// Confidence extraction
// ============================================================

#[test]
fn confidence_prose_variants() {
    assert_eq!(extract_confidence("Overall confidence: 85%"), 85.0);
    assert_eq!(extract_confidence("I estimate 60% confidence"), 60.0);
    assert_eq!(extract_confidence("confidence 7"), 7.0);
}

#[test]
fn confidence_missing_is_zero_not_error() {
    assert_eq!(extract_confidence("no numbers at all"), 0.0);
}

#[test]
fn confidence_always_in_range() {
    for text in [
        "confidence: 0%",
        "confidence: 100%",
        "confidence: 999%",
        "confidence 50 and then 90% confidence",
    ] {
        let c = extract_confidence(text);
        assert!((0.0..=100.0).contains(&c), "{text} gave {c}");
    }
}

// ============================================================
// Timeline extraction
// ============================================================

#[test]
fn full_manipulation_response() {
    let text = "Confidence: 85%. A hard cut occurs at 0:12, an abrupt scene change \
                that interrupts the continuous camera motion established earlier in \
                the clip. Much later there is a clear sign of object removal visible \
                around 28 seconds, where a lamp post disappears between frames with \
                no camera movement to explain it. Near the end of the clip the audio \
                drifts badly out of sync at 0:55.";
    let anomalies = extract_anomalies(text, 60.0, 85.0);

    assert_eq!(anomalies.len(), 3);
    assert_eq!(anomalies[0].timestamp, 12.0);
    assert_eq!(anomalies[0].kind, AnomalyKind::Cut);
    assert_eq!(anomalies[1].timestamp, 28.0);
    assert_eq!(anomalies[1].kind, AnomalyKind::Insertion);
    assert_eq!(anomalies[2].timestamp, 55.0);
    assert_eq!(anomalies[2].kind, AnomalyKind::TemporalInconsistency);
}

#[test]
fn all_extracted_anomalies_satisfy_invariants() {
    let text = "confidence 90%: cuts at 0:05, 0:30, 1:00 and a splice at 80 seconds";
    for a in extract_anomalies(text, 90.0, 90.0) {
        assert!(a.timestamp >= 0.0);
        assert!(a.duration > 0.0);
        assert!((0.0..=100.0).contains(&a.confidence));
        assert!(!a.description.is_empty());
    }
}

#[test]
fn synthesized_anomalies_stay_within_duration() {
    let anomalies = extract_anomalies("definitely fake, confidence 100%", 40.0, 100.0);
    assert_eq!(anomalies.len(), 4);
    for a in &anomalies {
        assert!(a.timestamp > 0.0 && a.timestamp < 40.0);
    }
}

// ============================================================
// Indicators
// ============================================================

#[test]
fn indicator_values_always_in_range() {
    for kind in AnalyzerKind::ALL {
        let map = score_indicators(
            kind,
            "facial temporal lighting compression splice quality metadata verified transcode",
            250.0,
        );
        for (key, value) in &map {
            assert!(
                (0.0..=100.0).contains(value),
                "{kind} indicator {key} = {value}"
            );
        }
        assert_eq!(map.len(), kind.indicator_keys().len());
    }
}

#[test]
fn techniques_from_realistic_response() {
    let t = extract_techniques(
        "This appears to be a face swap deepfake, likely diffusion-based, \
         with lip sync artifacts.",
    );
    assert!(t.contains(&"face swap".to_string()));
    assert!(t.contains(&"deepfake".to_string()));
    assert!(t.contains(&"diffusion".to_string()));
}

// ============================================================
// Sources and metadata
// ============================================================

#[test]
fn full_authenticity_response() {
    let text = "Confidence: 75%. The earliest copy appears on YouTube \
                (https://youtube.com/watch?v=x1) and matches news media coverage. \
                Metadata suggests it was shot on a GoPro Hero 9, recorded in Oslo, \
                with a creation date of 2022-11-02. The stream is H264, re-encoded once.";

    let sources = extract_sources(text, 75.0);
    assert_eq!(sources.len(), 2);
    let youtube = sources.iter().find(|s| s.source == "youtube").unwrap();
    assert!(!youtube.verified);
    assert!(youtube.url.is_some());
    let news = sources.iter().find(|s| s.source == "news media").unwrap();
    assert!(news.verified);

    let md = extract_metadata(text);
    assert_eq!(md.creation_date.as_deref(), Some("2022-11-02"));
    assert_eq!(md.device_info.as_deref(), Some("a GoPro Hero 9"));
    assert_eq!(md.location.as_deref(), Some("Oslo"));
    assert!(md.compression_history.contains(&"h264".to_string()));
    assert!(md.compression_history.contains(&"re-encode".to_string()));
}

#[test]
fn parsers_never_panic_on_garbage() {
    let garbage = [
        "",
        ":::%%%:::",
        "99999999999999999999 seconds",
        "confidence: not-a-number",
        "\u{0} \u{7f} 🦀🦀🦀 1:99 25:61",
    ];
    for text in garbage {
        let _ = extract_confidence(text);
        let _ = extract_anomalies(text, 60.0, 50.0);
        let _ = extract_sources(text, 50.0);
        let _ = extract_metadata(text);
        for kind in AnalyzerKind::ALL {
            let _ = score_indicators(kind, text, 50.0);
        }
    }
}
