#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use fitplan::{
    error::{FitplanError, Result},
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider},
};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<GenericMessage>,
    pub model: Model,
    pub temperature: Option<f64>,
}

type Script = Box<dyn Fn() -> Result<String> + Send + Sync>;

/// Backend that records every call and answers from a script. Once the
/// script is exhausted the fallback answer is repeated.
#[derive(Clone)]
pub struct MockBackend {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    script: Arc<Mutex<VecDeque<Result<String>>>>,
    fallback: Arc<Script>,
}

impl MockBackend {
    pub fn answering(text: &'static str) -> Self {
        Self::with_fallback(move || Ok(text.to_owned()))
    }

    pub fn failing_with(make: impl Fn() -> FitplanError + Send + Sync + 'static) -> Self {
        Self::with_fallback(move || Err(make()))
    }

    fn with_fallback(fallback: impl Fn() -> Result<String> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::default(),
            script: Arc::default(),
            fallback: Arc::new(Box::new(fallback)),
        }
    }

    /// Queue answers returned before the fallback.
    pub fn then(self, answer: Result<String>) -> Self {
        self.script.lock().unwrap().push_back(answer);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatCompletionProvider for MockBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let model = params.model.clone();
        let temperature = params.temperature;
        let messages = params.into_messages().into_iter().map(Into::into).collect();
        self.calls.lock().unwrap().push(RecordedCall {
            messages,
            model,
            temperature,
        });

        let answer = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| (self.fallback)());

        Box::pin(async move {
            answer.map(|content| GenericChatCompletionResponse {
                content,
                finish_reason: Some("STOP".into()),
                usage: None,
            })
        })
    }
}
