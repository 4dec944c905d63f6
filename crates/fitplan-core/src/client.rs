//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the prompt’s `Message` type converts into what the backend
//! expects, with no dynamic dispatch in user code.
//!
//! ```rust
//! use fitplan_core::{FitplanClient, generic::{GenericMessage, GenericRole},
//!                    template::*, model::*};
//!
//! struct Warmup;
//!
//! impl PromptTemplate for Warmup {
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Pro);
//! }
//!
//! impl IntoPrompt for Warmup {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Describe a warm-up.".into(), GenericRole::User)]
//!     }
//! }
//!
//! # fn main() {}
//! ```
use std::sync::Arc;

use tracing::debug;

use crate::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider},
    template::PromptTemplate,
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct FitplanClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for FitplanClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> FitplanClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render `prompt` and run it through the backend with the model and
    /// temperature the template pins.
    pub async fn generate<P>(&self, prompt: P) -> Result<GenericChatCompletionResponse>
    where
        P: PromptTemplate,
        P::Message: Into<B::Message> + Clone + Send + Sync,
    {
        let mut params = ChatCompleteParameters::new(prompt.into_prompt(), P::MODEL);
        debug!(model = ?P::MODEL, temperature = ?P::TEMPERATURE, messages = params.messages.len(), "dispatching prompt");
        if let Some(temperature) = P::TEMPERATURE {
            params = params.with_temperature(temperature);
        }

        self.backend.chat_complete(params).await
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for FitplanClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        generic::{GenericMessage, GenericRole},
        model::{GeminiModel, Model},
        template::IntoPrompt,
    };

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(Vec<GenericMessage>, Option<f64>)>>,
    }

    impl ChatCompletionProvider for Recorder {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &'p self,
            params: ChatCompleteParameters<M>,
        ) -> ChatCompletionFuture<'p>
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            let temperature = params.temperature;
            let messages: Vec<GenericMessage> =
                params.into_messages().into_iter().map(Into::into).collect();
            self.seen
                .lock()
                .unwrap()
                .push((messages.clone(), temperature));

            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: format!("echo: {}", messages[0].content),
                    finish_reason: Some("STOP".into()),
                    usage: None,
                })
            })
        }
    }

    struct Cooldown;

    impl IntoPrompt for Cooldown {
        type Message = GenericMessage;

        fn into_prompt(self) -> Vec<Self::Message> {
            vec![GenericMessage::new("cool down".into(), GenericRole::User)]
        }
    }

    impl PromptTemplate for Cooldown {
        const MODEL: Model = Model::Gemini(GeminiModel::Gemini15Pro);
        const TEMPERATURE: Option<f64> = Some(0.7);
    }

    #[tokio::test]
    async fn generate_passes_template_settings() {
        let client = FitplanClient::new(Recorder::default());

        let response = client.generate(Cooldown).await.unwrap();
        assert_eq!(response.content, "echo: cool down");

        let seen = client.backend().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, Some(0.7));
        assert_eq!(seen[0].0[0].role, GenericRole::User);
    }
}
