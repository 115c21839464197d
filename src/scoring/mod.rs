// Timeline consolidation and the final credibility verdict.

pub mod credibility;
pub mod merge;
