// Analyzer adapters.
//
// Each analyzer kind issues several prompt variants to the inference
// provider, each targeting a different sub-aspect of the question. Variants
// run concurrently and fail independently: one variant erroring just
// shrinks the fold, and only all-variants-failed fails the adapter.

pub mod ai_detection;
pub mod authenticity;
pub mod manipulation;

use std::collections::HashMap;

use anyhow::Result;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::models::{AnalyzerKind, AnalyzerResult, SourceMetadata};
use crate::provider::InferenceProvider;
use crate::scoring::merge::merge_anomalies;

/// One prompt variant within an analyzer.
pub struct PromptVariant {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// The prompt variants for an analyzer kind.
pub fn variants(kind: AnalyzerKind) -> &'static [PromptVariant] {
    match kind {
        AnalyzerKind::AiDetection => ai_detection::VARIANTS,
        AnalyzerKind::Manipulation => manipulation::VARIANTS,
        AnalyzerKind::Authenticity => authenticity::VARIANTS,
    }
}

fn parse_response(kind: AnalyzerKind, text: &str, duration_hint: f64) -> AnalyzerResult {
    match kind {
        AnalyzerKind::AiDetection => ai_detection::parse_response(text),
        AnalyzerKind::Manipulation => manipulation::parse_response(text, duration_hint),
        AnalyzerKind::Authenticity => authenticity::parse_response(text),
    }
}

/// Run one analyzer end to end: fan out all prompt variants concurrently,
/// parse each response, and fold the survivors into a single result.
///
/// Returns `Err` only when every variant failed; the error message carries
/// each variant's failure so the orchestrator's retry loop and the final
/// explanation stay informative.
pub async fn run_analyzer(
    provider: &dyn InferenceProvider,
    kind: AnalyzerKind,
    media: &[u8],
    mime_type: &str,
    duration_hint: f64,
) -> Result<AnalyzerResult> {
    let variant_set = variants(kind);

    let responses = join_all(
        variant_set
            .iter()
            .map(|v| provider.generate(v.prompt, media, mime_type)),
    )
    .await;

    let mut parsed = Vec::new();
    let mut failures = Vec::new();

    for (i, (variant, response)) in variant_set.iter().zip(responses).enumerate() {
        match response {
            Ok(text) => {
                debug!(
                    analyzer = %kind,
                    variant = variant.label,
                    "Variant response parsed"
                );
                parsed.push((i, variant.label, parse_response(kind, &text, duration_hint)));
            }
            Err(e) => {
                warn!(
                    analyzer = %kind,
                    variant = variant.label,
                    error = %e,
                    "Variant failed, folding over the rest"
                );
                failures.push(format!("{}: {e}", variant.label));
            }
        }
    }

    if parsed.is_empty() {
        anyhow::bail!(
            "all {} prompt variants failed ({})",
            variant_set.len(),
            failures.join("; ")
        );
    }

    Ok(fold_variants(kind, parsed))
}

/// Fold several variant results into one per-analyzer result.
///
/// Confidence and indicators are arithmetic means over the variants that
/// succeeded; variant-specific lists are unioned with kind-specific dedup;
/// explanations are concatenated with variant labels for auditability.
fn fold_variants(
    kind: AnalyzerKind,
    parsed: Vec<(usize, &'static str, AnalyzerResult)>,
) -> AnalyzerResult {
    let n = parsed.len() as f64;

    let confidence = parsed.iter().map(|(_, _, r)| r.confidence).sum::<f64>() / n;

    let mut indicators: HashMap<String, f64> = HashMap::new();
    for key in kind.indicator_keys() {
        let sum: f64 = parsed
            .iter()
            .map(|(_, _, r)| r.indicators.get(*key).copied().unwrap_or(0.0))
            .sum();
        indicators.insert((*key).to_string(), sum / n);
    }

    // Techniques: exact-string union, first occurrence wins
    let mut techniques: Vec<String> = Vec::new();
    for (_, _, r) in &parsed {
        for t in &r.techniques {
            if !techniques.contains(t) {
                techniques.push(t.clone());
            }
        }
    }

    // Anomalies: union across variants, then consolidated into
    // non-overlapping intervals
    let anomalies = merge_anomalies(
        parsed
            .iter()
            .flat_map(|(_, _, r)| r.anomalies.iter().cloned())
            .collect(),
    );

    // Sources: dedup by lower-cased source name, higher similarity wins
    let mut sources: Vec<crate::models::AuthenticitySource> = Vec::new();
    for (_, _, r) in &parsed {
        for s in &r.sources {
            let key = s.source.to_lowercase();
            match sources.iter_mut().find(|x| x.source.to_lowercase() == key) {
                Some(existing) => {
                    if s.similarity > existing.similarity {
                        *existing = s.clone();
                    }
                }
                None => sources.push(s.clone()),
            }
        }
    }

    // Metadata: first variant to report a field wins; compression
    // history unions
    let mut metadata = SourceMetadata::default();
    for (_, _, r) in &parsed {
        if metadata.creation_date.is_none() {
            metadata.creation_date = r.metadata.creation_date.clone();
        }
        if metadata.device_info.is_none() {
            metadata.device_info = r.metadata.device_info.clone();
        }
        if metadata.location.is_none() {
            metadata.location = r.metadata.location.clone();
        }
        for c in &r.metadata.compression_history {
            if !metadata.compression_history.contains(c) {
                metadata.compression_history.push(c.clone());
            }
        }
    }

    let explanation = parsed
        .iter()
        .map(|(i, label, r)| format!("[variant {}: {label}] {}", i + 1, r.explanation))
        .collect::<Vec<_>>()
        .join("\n\n");

    AnalyzerResult {
        confidence,
        explanation,
        indicators,
        techniques,
        anomalies,
        sources,
        metadata,
    }
}
