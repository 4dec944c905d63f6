use chrono::{DateTime, Local};
use fitplan_core::error::{FailureKind, FitplanError};
use fitplan_prompt::builder::MarkdownBuilder;

use crate::request::WorkoutRequest;

/// Prefix of the text shown in place of a plan when generation failed.
pub const ERROR_PREFIX: &str = "An Error Occurred:";

/// Render a failure the way users see it: `An Error Occurred: <detail>`.
pub fn failure_display(err: &FitplanError) -> String {
    format!("{ERROR_PREFIX} {err}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Succeeded,
    Failed(FailureKind),
}

/// One generation attempt: the request, the text shown for it and when it
/// happened. Failed attempts store the error display string as `plan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutResult {
    pub request: WorkoutRequest,
    pub plan: String,
    pub status: GenerationStatus,
    pub created_at: DateTime<Local>,
}

impl WorkoutResult {
    pub fn from_outcome(
        request: WorkoutRequest,
        outcome: &Result<String, FitplanError>,
        created_at: DateTime<Local>,
    ) -> Self {
        let (plan, status) = match outcome {
            Ok(plan) => (plan.clone(), GenerationStatus::Succeeded),
            Err(err) => (failure_display(err), GenerationStatus::Failed(err.kind())),
        };

        Self {
            request,
            plan,
            status,
            created_at,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == GenerationStatus::Succeeded
    }

    /// Creation date as `YYYY-MM-DD`, used to title history entries.
    pub fn date_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    /// Heading, labelled request fields and the plan as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut builder = MarkdownBuilder::new()
            .add_section_h1("Personalized Workout Plan")
            .add_blank_line();
        for (label, value) in self.request.metadata_lines() {
            builder = builder.add_key_value(label, value);
        }
        builder
            .add_blank_line()
            .add_line(&self.plan)
            .finalize()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn success_keeps_text_unchanged() {
        let request = WorkoutRequest::new("Beginner", "Endurance", 30, "Bodyweight");
        let result = WorkoutResult::from_outcome(request, &Ok("Plan X".into()), at());

        assert_eq!(result.plan, "Plan X");
        assert!(result.succeeded());
        assert_eq!(result.date_label(), "2026-03-14");
    }

    #[test]
    fn failure_stores_display_string() {
        let request = WorkoutRequest::new("Beginner", "Endurance", 30, "Bodyweight");
        let err = FitplanError::Quota("try later".into());
        let result = WorkoutResult::from_outcome(request, &Err(err), at());

        assert_eq!(result.plan, "An Error Occurred: quota exceeded: try later");
        assert_eq!(result.status, GenerationStatus::Failed(FailureKind::Quota));
    }

    #[test]
    fn markdown_lists_request_then_plan() {
        let request = WorkoutRequest::new("Advanced", "Muscle Gain", 75, "Dumbbells");
        let result = WorkoutResult::from_outcome(request, &Ok("1. Press".into()), at());

        assert_eq!(
            result.to_markdown(),
            "# Personalized Workout Plan\n\n\
             **Fitness Level**: Advanced\n\
             **Goal**: Muscle Gain\n\
             **Duration**: 75 minutes\n\
             **Equipment**: Dumbbells\n\n\
             1. Press\n"
        );
    }
}
