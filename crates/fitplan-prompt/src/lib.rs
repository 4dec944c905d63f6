//! Text helpers used to assemble prompts and plan summaries.
pub mod builder;
pub mod template;
