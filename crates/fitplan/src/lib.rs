//! # `fitplan` – personalised workout plans from a hosted LLM
//!
//! This crate glues the workspace together and adds everything an
//! application needs around the core flow:
//!
//! | Crate / module            | What it provides                                              |
//! |---------------------------|---------------------------------------------------------------|
//! | **`fitplan-core`**        | Provider trait, generic client, errors and failure kinds      |
//! | **`fitplan-prompt`**      | Named-slot text templates and a Markdown builder              |
//! | **`fitplan-types`**       | Workout request, the plan prompt, result type                 |
//! | **`fitplan-gemini`**      | HTTP backend for Google Gemini `generateContent`              |
//! | [`generator`]             | Build prompt → call model → text or typed failure            |
//! | [`history`]               | Append-only, optionally bounded record of attempts            |
//! | [`export`]                | PDF rendering and `Workout_Plan_<timestamp>.pdf` output       |
//! | [`web`]                   | Form-based front-end served with axum                         |
//! | [`config`], [`logging`]   | Environment configuration and `tracing` setup                 |
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use fitplan::{config::AppConfig, generator::WorkoutGenerator, types::WorkoutRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let generator = WorkoutGenerator::from_init(config.gemini_adapter());
//!
//!     let request = WorkoutRequest::new("Beginner", "Weight gain", 23, "Bodyweight");
//!     println!("{}", generator.generate_text(&request).await);
//!     Ok(())
//! }
//! ```

pub use fitplan_core::*;
pub use fitplan_gemini as gemini;
pub use fitplan_prompt as prompt;
pub use fitplan_types as types;

pub mod config;
pub mod export;
pub mod generator;
pub mod history;
pub mod logging;
pub mod web;
