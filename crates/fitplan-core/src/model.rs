//! Model identifiers used throughout the workspace.
//!
//! Application code picks an enum variant and lets the backend crate map it
//! onto the provider's naming scheme, so literal strings such as
//! `"gemini-1.5-pro"` only live in one place.
//!
//! ```rust
//! use fitplan_core::model::{GeminiModel, Model};
//! assert_eq!(Model::from(GeminiModel::Gemini15Pro),
//!            Model::Gemini(GeminiModel::Gemini15Pro));
//! ```

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Gemini models.
    Gemini(GeminiModel),
    /// Any model name not covered by a dedicated enum, passed through as-is.
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini15Pro,
    Gemini15Flash,
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
