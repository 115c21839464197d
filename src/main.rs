use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use veracity::config::Config;
use veracity::models::AnalyzerKind;
use veracity::pipeline::Orchestrator;
use veracity::provider::gemini::GeminiProvider;

/// Veracity: multi-analyzer video credibility engine.
///
/// Runs AI-generation detection, manipulation detection, and authenticity
/// verification over a video concurrently and combines them into a single
/// credibility verdict.
#[derive(Parser)]
#[command(name = "veracity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a video file and print the credibility report
    Analyze {
        /// Path to the video file
        file: PathBuf,

        /// Video duration hint in seconds (bounds extracted timestamps)
        #[arg(long, default_value = "60")]
        duration: f64,

        /// Per-analyzer attempt timeout in seconds (overrides config)
        #[arg(long)]
        timeout: Option<u64>,

        /// Retry attempts after the first failure (overrides config)
        #[arg(long)]
        retries: Option<u32>,

        /// Skip an analyzer (ai-detection, manipulation, authenticity);
        /// repeatable
        #[arg(long)]
        skip: Vec<String>,

        /// Emit the raw result as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("veracity=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            duration,
            timeout,
            retries,
            skip,
            json,
        } => {
            let mut config = Config::load()?;
            config.require_provider()?;
            if let Some(t) = timeout {
                config.timeout_secs = t;
            }
            if let Some(r) = retries {
                config.retry_attempts = r;
            }

            let requested = requested_kinds(&skip)?;
            let media = std::fs::read(&file)
                .with_context(|| format!("Failed to read video file {}", file.display()))?;
            let mime_type = mime_for(&file);

            info!(
                file = %file.display(),
                bytes = media.len(),
                mime_type,
                "Loaded video"
            );

            let provider = Arc::new(GeminiProvider::new(
                &config.gemini_api_url,
                &config.gemini_model,
                config.gemini_api_key.clone(),
            ));
            let orchestrator = Orchestrator::with_options(provider, config.analysis_options());

            // Drive an indicatif bar from the advisory progress sink
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  Analyzing [{bar:30}] {pos}% {msg}")
                    .expect("valid template"),
            );
            let sink_bar = bar.clone();
            let sink: veracity::pipeline::ProgressSink =
                Arc::new(move |p: veracity::models::AnalysisProgress| {
                    sink_bar.set_position(p.progress as u64);
                    sink_bar.set_message(p.message);
                });

            let started = chrono::Utc::now();
            let result = orchestrator
                .run_analysis(&media, mime_type, duration, &requested, Some(sink))
                .await?;
            bar.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                veracity::output::terminal::display_result(&result);
                let elapsed = chrono::Utc::now() - started;
                println!(
                    "\n{}",
                    format!("Analysis finished in {}s.", elapsed.num_seconds()).dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Resolve `--skip` flags into the requested analyzer set.
fn requested_kinds(skip: &[String]) -> Result<HashSet<AnalyzerKind>> {
    let mut requested: HashSet<AnalyzerKind> = AnalyzerKind::ALL.into_iter().collect();
    for name in skip {
        let kind = AnalyzerKind::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .with_context(|| {
                format!(
                    "Unknown analyzer '{name}' (expected one of: ai-detection, \
                     manipulation, authenticity)"
                )
            })?;
        requested.remove(&kind);
    }
    if requested.is_empty() {
        anyhow::bail!("All analyzers were skipped, nothing to run");
    }
    Ok(requested)
}

/// Infer the MIME type from the file extension, defaulting to video/mp4.
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("mpg") | Some("mpeg") => "video/mpeg",
        _ => "video/mp4",
    }
}
