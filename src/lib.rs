// Veracity: multi-analyzer video credibility engine
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline: provider calls, response parsing, per-analyzer
// adapters, scoring, and the orchestrator that ties them together.

pub mod analyzers;
pub mod config;
pub mod models;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod provider;
pub mod scoring;
