// Core data model for one video analysis request.
//
// Everything here is created fresh per request and treated as immutable
// once constructed: the parsers build it, the aggregator only reads it,
// and nothing persists beyond the request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The three independent detection capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyzerKind {
    AiDetection,
    Manipulation,
    Authenticity,
}

impl AnalyzerKind {
    pub const ALL: [AnalyzerKind; 3] = [
        AnalyzerKind::AiDetection,
        AnalyzerKind::Manipulation,
        AnalyzerKind::Authenticity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::AiDetection => "ai-detection",
            AnalyzerKind::Manipulation => "manipulation",
            AnalyzerKind::Authenticity => "authenticity",
        }
    }

    /// The fixed indicator keys this analyzer reports. Every key is always
    /// present in the result map, defaulting to 0.0 when no keyword matched.
    pub fn indicator_keys(&self) -> &'static [&'static str] {
        match self {
            AnalyzerKind::AiDetection => &[
                "facial_inconsistencies",
                "temporal_artifacts",
                "lighting_anomalies",
                "compression_artifacts",
            ],
            AnalyzerKind::Manipulation => &[
                "temporal_inconsistencies",
                "spatial_edits",
                "quality_shifts",
            ],
            AnalyzerKind::Authenticity => &[
                "metadata_consistency",
                "source_verification",
                "compression_history",
            ],
        }
    }
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a time-coded manipulation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    Cut,
    Insertion,
    Deletion,
    TemporalInconsistency,
    QualityChange,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::Cut => "cut",
            AnomalyKind::Insertion => "insertion",
            AnomalyKind::Deletion => "deletion",
            AnomalyKind::TemporalInconsistency => "temporal_inconsistency",
            AnomalyKind::QualityChange => "quality_change",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A time-coded finding from the manipulation analyzer.
///
/// `timestamp` and `duration` are seconds; `duration` is always > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineAnomaly {
    pub timestamp: f64,
    pub duration: f64,
    pub kind: AnomalyKind,
    pub confidence: f64,
    pub description: String,
}

/// A provisional provenance match from the authenticity analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticitySource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub similarity: f64,
    pub source: String,
    pub verified: bool,
}

/// Metadata the authenticity analyzer managed to pull out of free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub compression_history: Vec<String>,
}

impl SourceMetadata {
    pub fn is_empty(&self) -> bool {
        self.creation_date.is_none()
            && self.device_info.is_none()
            && self.location.is_none()
            && self.compression_history.is_empty()
    }
}

/// One analyzer's consolidated output.
///
/// The variant-specific payloads (`techniques`, `anomalies`, `sources`,
/// `metadata`) are plain fields that stay empty for the kinds that don't
/// produce them; serde skips them when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerResult {
    /// Detection confidence, 0-100.
    pub confidence: f64,
    /// Concatenated, variant-labeled provider explanations (never empty).
    pub explanation: String,
    /// Named sub-signals, each 0-100. Keys are fixed per analyzer kind.
    pub indicators: HashMap<String, f64>,
    /// AI detection only: named generation techniques spotted in the text.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub techniques: Vec<String>,
    /// Manipulation only: merged time-coded findings.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub anomalies: Vec<TimelineAnomaly>,
    /// Authenticity only: provisional provenance matches.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<AuthenticitySource>,
    /// Authenticity only: extracted media metadata.
    #[serde(skip_serializing_if = "SourceMetadata::is_empty", default)]
    pub metadata: SourceMetadata,
}

impl AnalyzerResult {
    /// An empty result carrying only an explanation.
    pub fn with_explanation(explanation: String) -> Self {
        Self {
            confidence: 0.0,
            explanation,
            indicators: HashMap::new(),
            techniques: Vec::new(),
            anomalies: Vec::new(),
            sources: Vec::new(),
            metadata: SourceMetadata::default(),
        }
    }

    /// The zero-confidence default substituted for an analyzer that failed
    /// all its retry attempts. The reason survives in the explanation so a
    /// partial result is still self-describing.
    pub fn failed(kind: AnalyzerKind, reason: &str) -> Self {
        let mut result = Self::with_explanation(format!("analysis failed: {reason}"));
        for key in kind.indicator_keys() {
            result.indicators.insert((*key).to_string(), 0.0);
        }
        result
    }
}

/// Recommendation tier derived from the final credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredibilityTier {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl CredibilityTier {
    /// Determine the tier from a credibility score (0-100).
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => CredibilityTier::High,
            s if s >= 60 => CredibilityTier::Moderate,
            s if s >= 40 => CredibilityTier::Low,
            _ => CredibilityTier::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CredibilityTier::High => "HIGH CREDIBILITY",
            CredibilityTier::Moderate => "MODERATE CREDIBILITY",
            CredibilityTier::Low => "LOW CREDIBILITY",
            CredibilityTier::VeryLow => "VERY LOW CREDIBILITY",
        }
    }

    /// The fixed explanatory sentence attached to each tier.
    pub fn guidance(&self) -> &'static str {
        match self {
            CredibilityTier::High => "The video appears authentic with no significant signs of manipulation.",
            CredibilityTier::Moderate => "The video is mostly consistent but some findings warrant review.",
            CredibilityTier::Low => "The video shows notable manipulation or generation signals; verify before trusting.",
            CredibilityTier::VeryLow => "The video shows strong signs of being AI-generated or manipulated; do not treat it as authentic.",
        }
    }
}

impl std::fmt::Display for CredibilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The single consolidated verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallVerdict {
    /// Final credibility score, always present and in 0-100 even when every
    /// analyzer failed.
    pub credibility_score: u32,
    pub recommendation: String,
    pub summary: String,
}

/// The complete aggregate returned to the caller. All three sections are
/// always populated; failed or unrequested analyzers carry a zero-confidence
/// default whose explanation says why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysisResult {
    pub ai_generated: AnalyzerResult,
    pub manipulation: AnalyzerResult,
    pub authenticity: AnalyzerResult,
    pub overall: OverallVerdict,
}

/// Observational progress checkpoint emitted by the orchestrator.
/// Never consulted for correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisProgress {
    pub stage: String,
    /// 0-100.
    pub progress: u32,
    pub message: String,
}
