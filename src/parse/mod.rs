// Free-text response mining.
//
// The inference provider returns prose, not structure. These modules pull
// bounded numbers and keyword-triggered signals out of that prose with
// regex heuristics. This is explicitly best-effort text mining: every
// function here is pure, never panics, and degrades to zero/empty rather
// than erroring, so a weird response can't take down an analyzer.

pub mod confidence;
pub mod indicators;
pub mod sources;
pub mod timeline;

/// Clamp a raw extracted value into the 0-100 range every score lives in.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Slice a ±`radius` byte window around `[start, end)`, adjusted to char
/// boundaries so multi-byte text can't panic the parser.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut lo = start.saturating_sub(radius);
    let mut hi = (end + radius).min(text.len());
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}
