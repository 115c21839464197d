// Inference provider abstraction.
//
// The engine never talks to a concrete API directly; it holds a
// `dyn InferenceProvider` injected at construction, so tests script
// responses and the HTTP client below can be swapped without touching
// orchestration.

pub mod gemini;
pub mod rate_limiter;
pub mod traits;

pub use traits::{InferenceProvider, NoopProvider};
