//! One generation attempt: build the prompt, call the model, hand back text.
//!
//! A backend that failed to initialise is kept around as
//! unavailable; every later attempt fails with the original
//! reason instead of crashing the process.

use chrono::Local;
use fitplan_core::{
    FitplanClient,
    error::{FitplanError, Result},
    generic::GenericMessage,
    provider::ChatCompletionProvider,
};
use fitplan_types::{WorkoutPlanPrompt, WorkoutRequest, WorkoutResult, outputs::failure_display};
use tracing::{error, info, instrument};

#[derive(Debug)]
enum Backend<B> {
    Ready(FitplanClient<B>),
    Unavailable {
        provider: &'static str,
        reason: String,
    },
}

#[derive(Debug)]
pub struct WorkoutGenerator<B> {
    backend: Backend<B>,
}

impl<B> WorkoutGenerator<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend: Backend::Ready(FitplanClient::new(backend)),
        }
    }

    /// Accept the outcome of backend construction. A failure is logged once
    /// and remembered.
    pub fn from_init(init: Result<B>) -> Self {
        match init {
            Ok(backend) => Self::new(backend),
            Err(err) => {
                error!(error = %err, "model initialization error");
                let (provider, reason) = match err {
                    FitplanError::BackendUnavailable { provider, reason } => (provider, reason),
                    other => ("unknown", other.to_string()),
                };
                Self {
                    backend: Backend::Unavailable { provider, reason },
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Generate a plan for `request`. The returned text is exactly what the
    /// model produced.
    #[instrument(
        name = "generate_workout",
        skip_all,
        fields(
            fitness_level = %request.fitness_level,
            goal = %request.goal,
            duration = request.duration,
            equipment = %request.equipment,
        )
    )]
    pub async fn generate(&self, request: &WorkoutRequest) -> Result<String> {
        let outcome = match &self.backend {
            Backend::Ready(client) => client
                .generate(WorkoutPlanPrompt::new(request))
                .await
                .map(|response| response.content),
            Backend::Unavailable { provider, reason } => Err(FitplanError::BackendUnavailable {
                provider: *provider,
                reason: reason.clone(),
            }),
        };

        match &outcome {
            Ok(plan) => info!(chars = plan.len(), "Workout plan successfully generated"),
            Err(err) => error!(error = %err, kind = %err.kind(), "Error generating workout"),
        }

        outcome
    }

    /// Like [`generate`](Self::generate) but always yields displayable text:
    /// failures become `An Error Occurred: <detail>`.
    pub async fn generate_text(&self, request: &WorkoutRequest) -> String {
        match self.generate(request).await {
            Ok(plan) => plan,
            Err(err) => failure_display(&err),
        }
    }

    /// Run one attempt and package it for history and export.
    pub async fn attempt(&self, request: WorkoutRequest) -> WorkoutResult {
        let outcome = self.generate(&request).await;
        WorkoutResult::from_outcome(request, &outcome, Local::now())
    }
}

#[cfg(test)]
mod tests {
    use fitplan_core::{
        error::FailureKind,
        generic::{GenericChatCompletionResponse, GenericMessage},
        provider::{ChatCompleteParameters, ChatCompletionFuture},
    };

    use super::*;

    struct Fixed(&'static str);

    impl ChatCompletionProvider for Fixed {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &'p self,
            _params: ChatCompleteParameters<M>,
        ) -> ChatCompletionFuture<'p>
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            let content = self.0.to_owned();
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content,
                    finish_reason: None,
                    usage: None,
                })
            })
        }
    }

    fn request() -> WorkoutRequest {
        WorkoutRequest::new("Beginner", "Endurance", 30, "Bodyweight")
    }

    #[tokio::test]
    async fn ready_backend_returns_model_text() {
        let generator = WorkoutGenerator::new(Fixed("  Plan X\n"));
        assert!(generator.is_ready());
        assert_eq!(generator.generate(&request()).await.unwrap(), "  Plan X\n");
    }

    #[tokio::test]
    async fn failed_init_is_reported_on_every_attempt() {
        let generator: WorkoutGenerator<Fixed> =
            WorkoutGenerator::from_init(Err(FitplanError::BackendUnavailable {
                provider: "gemini",
                reason: "no TLS backend".into(),
            }));
        assert!(!generator.is_ready());

        for _ in 0..2 {
            let err = generator.generate(&request()).await.unwrap_err();
            assert_eq!(err.kind(), FailureKind::Configuration);
            assert!(err.to_string().contains("no TLS backend"));
        }

        let text = generator.generate_text(&request()).await;
        assert!(text.starts_with("An Error Occurred: "));
    }

    #[tokio::test]
    async fn attempt_records_the_request() {
        let generator = WorkoutGenerator::new(Fixed("Plan X"));
        let result = generator.attempt(request()).await;

        assert!(result.succeeded());
        assert_eq!(result.request, request());
        assert_eq!(result.plan, "Plan X");
    }
}
