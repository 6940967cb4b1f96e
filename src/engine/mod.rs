//! Orchestration: wires the tone, summary, prompt, curation, stats and
//! memory stages into the two public pipelines.

mod assist;
mod stats;

pub use assist::AssistEngine;
pub use stats::StatsEngine;
