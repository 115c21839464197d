// The orchestrator driving one analysis request end to end.

pub mod orchestrator;

pub use orchestrator::{
    AllAnalyzersFailed, AnalysisOptions, Orchestrator, ProgressSink,
};
