use fitplan_core::generic::{GenericMessage, GenericRole, GenericUsageReport};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common::UsageMetadata;

/// Body of `POST /models/{model}:generateContent`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Split generic messages into Gemini `contents` and a system instruction.
    /// Several system messages are joined with a blank line.
    pub fn from_messages(messages: Vec<GenericMessage>) -> Self {
        let mut contents = Vec::new();
        let mut system_texts: Vec<String> = Vec::new();

        for message in messages {
            match message.role {
                GenericRole::System => system_texts.push(message.content),
                GenericRole::User => contents.push(Content::text(ContentRole::User, message.content)),
                GenericRole::Assistant => {
                    contents.push(Content::text(ContentRole::Model, message.content))
                }
            }
        }

        let system_instruction = (!system_texts.is_empty()).then(|| Content {
            role: None,
            parts: vec![Part {
                text: Some(system_texts.join("\n\n")),
            }],
        });

        Self {
            contents,
            system_instruction,
            generation_config: None,
        }
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentRole {
    User,
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: ContentRole, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// A content part. Only text parts are produced or consumed here; other
/// part kinds deserialize with `text: None` and are skipped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<i64>,
}

impl_builder_methods!(
    GenerationConfig,
    temperature: f64,
    top_p: f64,
    max_output_tokens: i64,
    candidate_count: i64
);

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
    pub index: Option<i64>,
}

impl Candidate {
    /// All text parts concatenated, or `None` when the candidate has none.
    pub fn text(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl From<UsageMetadata> for GenericUsageReport {
    fn from(value: UsageMetadata) -> Self {
        GenericUsageReport {
            prompt_tokens: value.prompt_token_count,
            completion_tokens: value.candidates_token_count,
            total_tokens: value.total_token_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_in_wire_shape() {
        let request = GenerateContentRequest::from_messages(vec![
            GenericMessage::new("Be concise.".into(), GenericRole::System),
            GenericMessage::new("Plan please".into(), GenericRole::User),
        ])
        .with_generation_config(GenerationConfig::default().temperature(0.7));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Plan please"}]}],
                "systemInstruction": {"parts": [{"text": "Be concise."}]},
                "generationConfig": {"temperature": 0.7}
            })
        );
    }

    #[test]
    fn assistant_turns_become_model_role() {
        let request = GenerateContentRequest::from_messages(vec![GenericMessage::new(
            "Earlier answer".into(),
            GenericRole::Assistant,
        )]);
        assert_eq!(request.contents[0].role, Some(ContentRole::Model));
        assert!(request.system_instruction.is_none());
    }

    #[test]
    fn candidate_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Warm up. "}, {"text": "Squat."}]},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17}
        }))
        .unwrap();

        assert_eq!(response.candidates[0].text().as_deref(), Some("Warm up. Squat."));
        let usage = GenericUsageReport::from(response.usage_metadata.unwrap());
        assert_eq!(usage.total_tokens, 17);
    }

    #[test]
    fn blocked_candidate_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(response.candidates[0].text().is_none());
    }
}
