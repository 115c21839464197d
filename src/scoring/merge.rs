// Timeline anomaly consolidation.
//
// Multiple prompt variants (and multiple timestamp matches inside one
// response) commonly report the same real event. This is a classic
// interval merge with a fixed adjacency slack: two anomalies within two
// seconds of each other describe one event. The operation is idempotent:
// re-merging an already-merged list returns it unchanged.

use crate::models::TimelineAnomaly;

/// Two anomalies closer than this (end-to-start, seconds) merge into one.
pub const ADJACENCY_TOLERANCE_SECS: f64 = 2.0;

/// Consolidate a raw, possibly-overlapping anomaly list into minimal
/// non-overlapping intervals.
///
/// Anomalies are stably sorted by timestamp (ties keep original order),
/// then adjacent-or-overlapping runs collapse: the merged interval spans
/// both, the higher-confidence report supplies the type and confidence,
/// and descriptions concatenate so no finding text is lost.
pub fn merge_anomalies(mut anomalies: Vec<TimelineAnomaly>) -> Vec<TimelineAnomaly> {
    if anomalies.len() <= 1 {
        return anomalies;
    }

    anomalies.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let mut merged = Vec::with_capacity(anomalies.len());
    let mut iter = anomalies.into_iter();
    let mut current = iter.next().expect("len > 1 checked above");

    for next in iter {
        if next.timestamp <= current.timestamp + current.duration + ADJACENCY_TOLERANCE_SECS {
            current.duration = current
                .duration
                .max(next.timestamp + next.duration - current.timestamp);
            if next.confidence > current.confidence {
                current.kind = next.kind;
            }
            current.confidence = current.confidence.max(next.confidence);
            current.description = format!("{}; {}", current.description, next.description);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}
