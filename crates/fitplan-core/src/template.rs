//! Abstractions that tie a **prompt** to a concrete **model** and its
//! sampling settings.
//!
//! 1. [`IntoPrompt`] – turns a value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model and temperature.
//!
//! ```rust
//! use fitplan_core::template::{IntoPrompt, PromptTemplate};
//! use fitplan_core::generic::{GenericMessage, GenericRole};
//! use fitplan_core::model::{GeminiModel, Model};
//!
//! struct Stretch;
//!
//! impl IntoPrompt for Stretch {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Suggest a stretch.".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for Stretch {
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Pro);
//!     const TEMPERATURE: Option<f64> = Some(0.2);
//! }
//! ```
use crate::model::Model;

/// High-level description of a prompt.
///
/// Implement this trait **in addition** to [`IntoPrompt`] to pin the model
/// that should handle the request and, optionally, its sampling temperature.
pub trait PromptTemplate: IntoPrompt {
    /// Logical model identifier. The backend maps it to its own naming scheme.
    const MODEL: Model;

    /// Sampling temperature; `None` leaves the provider default in place.
    const TEMPERATURE: Option<f64> = None;
}

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] can be passed directly without
/// wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
