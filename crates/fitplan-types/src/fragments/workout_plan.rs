//! The prompt that asks the model for a workout plan.
//!
//! ```rust
//! use fitplan_types::{WorkoutPlanPrompt, WorkoutRequest};
//!
//! let request = WorkoutRequest::new("Beginner", "Weight gain", 23, "Bodyweight");
//! let text = WorkoutPlanPrompt::new(&request).text();
//!
//! assert!(text.starts_with("Create a personalized workout plan for a Beginner individual."));
//! ```
//!
//! Values are inserted verbatim: nothing is escaped, trimmed or validated.

use fitplan_core::{
    generic::{GenericMessage, GenericRole},
    model::{GeminiModel, Model},
    template::{IntoPrompt, PromptTemplate},
};
use fitplan_prompt::template::TextTemplate;

use crate::request::WorkoutRequest;

pub const WORKOUT_PLAN_TEMPLATE: TextTemplate = TextTemplate::new(
    "Create a personalized workout plan for a {fitness_level} individual. \
     Their goal is {goal}. The workout should last {duration} minutes and \
     use {equipment}. Provide a step-by-step exercise plan.",
);

/// Borrowing view of a [`WorkoutRequest`] that renders into the plan prompt.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutPlanPrompt<'a> {
    request: &'a WorkoutRequest,
}

impl<'a> WorkoutPlanPrompt<'a> {
    pub fn new(request: &'a WorkoutRequest) -> Self {
        Self { request }
    }

    /// The filled-in prompt text.
    pub fn text(&self) -> String {
        let request = self.request;
        WORKOUT_PLAN_TEMPLATE.fill([
            ("fitness_level", request.fitness_level.to_string()),
            ("goal", request.goal.to_string()),
            ("duration", request.duration.to_string()),
            ("equipment", request.equipment.to_string()),
        ])
    }
}

impl IntoPrompt for WorkoutPlanPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.text(), GenericRole::User)]
    }
}

impl PromptTemplate for WorkoutPlanPrompt<'_> {
    const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Pro);
    const TEMPERATURE: Option<f64> = Some(0.7);
}
