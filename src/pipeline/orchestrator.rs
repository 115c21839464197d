// Analysis orchestrator.
//
// Drives one request end to end: runs the requested analyzers as
// independent concurrent tasks, wraps each in a timeout race plus bounded
// retry with exponential backoff, waits for all of them (never fail-fast),
// substitutes a zero-confidence default for each analyzer that exhausted
// its retries, and aggregates. The only error that crosses this boundary
// is every requested analyzer failing.
//
// No shared mutable state crosses analyzer tasks; each owns its own
// accumulator and hands back an immutable result. The progress counter is
// the one shared value and it is atomic.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::future::join_all;
use tracing::{info, warn};

use crate::analyzers;
use crate::models::{
    AnalysisProgress, AnalyzerKind, AnalyzerResult, VideoAnalysisResult,
};
use crate::scoring::credibility;

/// Per-analyzer execution limits.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Wall-clock budget for one analyzer attempt (all its variants).
    pub timeout: Duration,
    /// Additional attempts after the first failure.
    pub retry_attempts: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry_attempts: 2,
        }
    }
}

/// Advisory progress callback. Must be cheap; it is invoked inline at each
/// checkpoint and never consulted for correctness.
pub type ProgressSink = Arc<dyn Fn(AnalysisProgress) + Send + Sync>;

/// Terminal error: every requested analyzer exhausted its retries.
#[derive(Debug)]
pub struct AllAnalyzersFailed {
    pub reasons: Vec<(AnalyzerKind, String)>,
}

impl fmt::Display for AllAnalyzersFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all requested analyzers failed: ")?;
        let mut first = true;
        for (kind, reason) in &self.reasons {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{kind}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for AllAnalyzersFailed {}

/// Outcome of one analyzer after timeout and retries. Modeled as a tag
/// rather than an Option so the aggregation input is statically complete.
enum AnalyzerOutcome {
    Completed(AnalyzerResult),
    Defaulted { reason: String },
}

impl AnalyzerOutcome {
    fn into_result(self, kind: AnalyzerKind) -> AnalyzerResult {
        match self {
            AnalyzerOutcome::Completed(result) => result,
            AnalyzerOutcome::Defaulted { reason } => AnalyzerResult::failed(kind, &reason),
        }
    }
}

/// The top-level engine. Holds the injected provider and execution options;
/// one instance serves many requests.
pub struct Orchestrator {
    provider: Arc<dyn crate::provider::InferenceProvider>,
    options: AnalysisOptions,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn crate::provider::InferenceProvider>) -> Self {
        Self {
            provider,
            options: AnalysisOptions::default(),
        }
    }

    pub fn with_options(
        provider: Arc<dyn crate::provider::InferenceProvider>,
        options: AnalysisOptions,
    ) -> Self {
        Self { provider, options }
    }

    /// Run one full analysis.
    ///
    /// Returns a structurally complete result whenever at least one
    /// requested analyzer succeeded (failed sections carry a
    /// zero-confidence default), and an `AllAnalyzersFailed` error only
    /// when every requested analyzer exhausted its retries.
    pub async fn run_analysis(
        &self,
        media: &[u8],
        mime_type: &str,
        duration_hint: f64,
        requested: &HashSet<AnalyzerKind>,
        progress: Option<ProgressSink>,
    ) -> Result<VideoAnalysisResult> {
        if requested.is_empty() {
            anyhow::bail!("no analyzers requested");
        }

        // init + one per analyzer + aggregation + completion
        let total_stages = 2 + AnalyzerKind::ALL.len() as u32 + 1;
        let completed = AtomicU32::new(0);
        let report = |stage: &str, message: String| {
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            let pct = (done as f64 / total_stages as f64 * 100.0).round() as u32;
            if let Some(sink) = &progress {
                sink(AnalysisProgress {
                    stage: stage.to_string(),
                    progress: pct.min(100),
                    message,
                });
            }
        };

        info!(
            analyzers = requested.len(),
            duration_hint, "Starting video analysis"
        );
        report("initializing", "Preparing analyzers".to_string());

        // Fan out: every analyzer runs as its own task; the join collects
        // each outcome instead of failing fast.
        let outcomes = join_all(AnalyzerKind::ALL.iter().map(|kind| {
            let report = &report;
            async move {
                if !requested.contains(kind) {
                    report(kind.as_str(), format!("{kind} skipped (not requested)"));
                    return (
                        *kind,
                        false,
                        AnalyzerOutcome::Defaulted {
                            reason: "analyzer not requested".to_string(),
                        },
                    );
                }

                match self
                    .run_with_retry(*kind, media, mime_type, duration_hint)
                    .await
                {
                    Ok(result) => {
                        report(kind.as_str(), format!("{kind} completed"));
                        (*kind, true, AnalyzerOutcome::Completed(result))
                    }
                    Err(reason) => {
                        warn!(analyzer = %kind, reason = %reason, "Analyzer exhausted retries");
                        report(kind.as_str(), format!("{kind} failed: {reason}"));
                        (*kind, true, AnalyzerOutcome::Defaulted { reason })
                    }
                }
            }
        }))
        .await;

        // Terminal failure only when every *requested* analyzer defaulted
        let failures: Vec<(AnalyzerKind, String)> = outcomes
            .iter()
            .filter_map(|(kind, was_requested, outcome)| match outcome {
                AnalyzerOutcome::Defaulted { reason } if *was_requested => {
                    Some((*kind, reason.clone()))
                }
                _ => None,
            })
            .collect();
        if failures.len() == requested.len() {
            return Err(AllAnalyzersFailed { reasons: failures }.into());
        }

        report("aggregating", "Combining analyzer results".to_string());

        let mut ai_generated = None;
        let mut manipulation = None;
        let mut authenticity = None;
        for (kind, _, outcome) in outcomes {
            let result = outcome.into_result(kind);
            match kind {
                AnalyzerKind::AiDetection => ai_generated = Some(result),
                AnalyzerKind::Manipulation => manipulation = Some(result),
                AnalyzerKind::Authenticity => authenticity = Some(result),
            }
        }
        // ALL covers every kind, so each slot is filled exactly once
        let ai_generated = ai_generated.expect("ai detection outcome present");
        let manipulation = manipulation.expect("manipulation outcome present");
        let authenticity = authenticity.expect("authenticity outcome present");

        let overall = credibility::aggregate(&ai_generated, &manipulation, &authenticity);
        let result = VideoAnalysisResult {
            ai_generated,
            manipulation,
            authenticity,
            overall,
        };

        for warning in credibility::validate(&result) {
            warn!(warning = %warning, "Validation warning in aggregated result");
        }

        report(
            "completed",
            format!(
                "Analysis complete (score {})",
                result.overall.credibility_score
            ),
        );
        info!(
            score = result.overall.credibility_score,
            "Video analysis finished"
        );

        Ok(result)
    }

    /// Run one analyzer with a timeout race per attempt and bounded retry.
    ///
    /// Retries are strictly sequential: attempt N+1 starts only after
    /// attempt N's failure is observed, with a 2^attempt-second backoff
    /// in between. Exhausting all attempts returns the last failure reason.
    async fn run_with_retry(
        &self,
        kind: AnalyzerKind,
        media: &[u8],
        mime_type: &str,
        duration_hint: f64,
    ) -> Result<AnalyzerResult, String> {
        let mut last_reason = String::new();

        for attempt in 0..=self.options.retry_attempts {
            if attempt > 0 {
                // Exponential backoff: 2^attempt seconds
                let backoff = Duration::from_secs(1u64 << attempt);
                warn!(
                    analyzer = %kind,
                    attempt,
                    backoff_secs = backoff.as_secs(),
                    "Retrying analyzer after backoff"
                );
                tokio::time::sleep(backoff).await;
            }

            let call = analyzers::run_analyzer(
                self.provider.as_ref(),
                kind,
                media,
                mime_type,
                duration_hint,
            );

            match tokio::time::timeout(self.options.timeout, call).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    last_reason = e.to_string();
                }
                // Losing the race discards the attempt's eventual result;
                // the underlying request is not forcibly killed.
                Err(_) => {
                    last_reason =
                        format!("timed out after {}s", self.options.timeout.as_secs());
                }
            }
        }

        Err(last_reason)
    }

    /// Mid-flight cancellation hook. Intentionally a no-op: callers wanting
    /// cancellation should cancel at the transport layer and discard the
    /// eventual result.
    pub fn cancel(&self) {}
}
