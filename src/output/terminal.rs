// Colored terminal output for analysis results.
//
// This module handles all terminal-specific formatting: colors, the
// per-analyzer sections, the anomaly timeline, and the overall verdict.
// main.rs delegates here.

use colored::Colorize;

use super::truncate_chars;
use crate::models::{AnalyzerResult, CredibilityTier, VideoAnalysisResult};

/// Render a complete analysis result.
pub fn display_result(result: &VideoAnalysisResult) {
    println!("\n{}", "=== Video Credibility Report ===".bold());

    let score = result.overall.credibility_score;
    let tier = CredibilityTier::from_score(score);
    println!(
        "\n  Credibility score: {}  {}",
        format!("{score}/100").bold(),
        colorize_tier(tier),
    );
    println!("  {}", result.overall.summary);
    println!("  {}", result.overall.recommendation.dimmed());

    display_section("AI Generation", &result.ai_generated);
    display_section("Manipulation", &result.manipulation);
    display_section("Authenticity", &result.authenticity);
}

fn display_section(title: &str, section: &AnalyzerResult) {
    println!("\n{}", format!("--- {title} ---").bold());
    println!("  Confidence: {:.0}/100", section.confidence);

    let mut indicators: Vec<_> = section.indicators.iter().collect();
    indicators.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in indicators {
        if *value > 0.0 {
            println!("  {:<26} {:>5.1}", key, value);
        }
    }

    if !section.techniques.is_empty() {
        println!("  Techniques: {}", section.techniques.join(", "));
    }

    for anomaly in &section.anomalies {
        let tag = match anomaly.confidence {
            c if c >= 70.0 => format!("[{}]", anomaly.kind).red().bold().to_string(),
            c if c >= 40.0 => format!("[{}]", anomaly.kind).yellow().to_string(),
            _ => format!("[{}]", anomaly.kind).dimmed().to_string(),
        };
        println!(
            "  {tag} {:.1}s +{:.1}s ({:.0}%) {}",
            anomaly.timestamp,
            anomaly.duration,
            anomaly.confidence,
            truncate_chars(&anomaly.description, 80).dimmed(),
        );
    }

    for source in &section.sources {
        let mark = if source.verified {
            "verified".green().to_string()
        } else {
            "unverified".yellow().to_string()
        };
        match &source.url {
            Some(url) => println!(
                "  Source: {} ({mark}, similarity {:.0}) {}",
                source.source,
                source.similarity,
                url.dimmed()
            ),
            None => println!(
                "  Source: {} ({mark}, similarity {:.0})",
                source.source, source.similarity
            ),
        }
    }

    let md = &section.metadata;
    if let Some(date) = &md.creation_date {
        println!("  Created: {date}");
    }
    if let Some(device) = &md.device_info {
        println!("  Device: {device}");
    }
    if let Some(location) = &md.location {
        println!("  Location: {location}");
    }
    if !md.compression_history.is_empty() {
        println!("  Compression: {}", md.compression_history.join(", "));
    }

    println!("  {}", truncate_chars(&section.explanation, 240).dimmed());
}

fn colorize_tier(tier: CredibilityTier) -> String {
    match tier {
        CredibilityTier::High => tier.label().green().bold().to_string(),
        CredibilityTier::Moderate => tier.label().yellow().to_string(),
        CredibilityTier::Low => tier.label().bright_red().to_string(),
        CredibilityTier::VeryLow => tier.label().red().bold().to_string(),
    }
}
