use std::sync::Arc;

use fitplan_core::{
    error::FitplanError,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider},
};

use crate::{
    GeminiAdapter,
    api_v1::{GenerateContentRequest, GenerationConfig},
    error::GeminiError,
    model_map::map_model,
};

impl ChatCompletionProvider for GeminiAdapter {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let ChatCompleteParameters {
                messages,
                model,
                temperature,
            } = params;

            let model_name = map_model(&model).ok_or_else(|| FitplanError::ModelNotSupported {
                provider: "gemini",
                model: format!("{model:?}"),
            })?;

            let messages = messages.into_iter().map(Into::into).collect();
            let mut request = GenerateContentRequest::from_messages(messages);
            if let Some(temperature) = temperature {
                request =
                    request.with_generation_config(GenerationConfig::default().temperature(temperature));
            }

            let response = client.generate_content(&model_name, &request).await?;
            let usage = response.usage_metadata.map(Into::into);

            let Some(candidate) = response.candidates.into_iter().next() else {
                let block_reason = response
                    .prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                    .unwrap_or_else(|| "none given".to_owned());
                return Err(GeminiError::Format(format!(
                    "response has no candidates (block reason: {block_reason})"
                ))
                .into());
            };

            let Some(content) = candidate.text() else {
                return Err(GeminiError::Format(format!(
                    "candidate has no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ))
                .into());
            };

            Ok(GenericChatCompletionResponse {
                content,
                finish_reason: candidate.finish_reason,
                usage,
            })
        })
    }
}
