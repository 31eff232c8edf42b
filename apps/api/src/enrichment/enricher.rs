//! Job-description enrichment: validate, prompt, call the model, clean up.

use tracing::{error, info};

use crate::enrichment::cleanup::strip_known_prefix;
use crate::enrichment::prompts::{build_user_prompt, ENRICH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{ChatCompletion, ChatMessage, CompletionRequest};

pub const MAX_TOKENS: u32 = 1500;
pub const TEMPERATURE: f32 = 0.7;
pub const MISSING_JOB_DESCRIPTION: &str = "job_description is required";

/// Builds the single completion request sent for `job_description`.
pub fn build_request(job_description: &str, model: &str) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(ENRICH_SYSTEM),
            ChatMessage::user(build_user_prompt(job_description)),
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Rewrites a raw job description into the structured format via one chat completion.
///
/// Blank input is rejected before any call. An empty completion falls back to the
/// input text. Provider failures become `AppError::EnrichmentService`.
pub async fn enrich_job_description(
    job_description: Option<&str>,
    llm: &dyn ChatCompletion,
    model: &str,
) -> Result<String, AppError> {
    let job_description = job_description
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()))?;

    info!(model = %model, "Enriching job description");

    let request = build_request(job_description, model);
    let generated = llm.complete(&request).await.map_err(|e| {
        error!(model = %model, "Chat completion failed: {e}");
        AppError::EnrichmentService(e.to_string())
    })?;

    let text = if generated.is_empty() {
        job_description
    } else {
        generated.as_str()
    };

    Ok(strip_known_prefix(text).to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm_client::{LlmError, Role};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and answers with a canned result.
    pub(crate) struct ScriptedLlm {
        pub reply: Result<String, u16>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedLlm {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for ScriptedLlm {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "provider exploded: secret-detail".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected_without_call() {
        let llm = ScriptedLlm::replying("unused");
        for input in [None, Some(""), Some("   "), Some("\n\t ")] {
            let err = enrich_job_description(input, &llm, "gpt-test")
                .await
                .unwrap_err();
            match err {
                AppError::Validation(msg) => assert_eq!(msg, MISSING_JOB_DESCRIPTION),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_single_call_with_input_verbatim() {
        let llm = ScriptedLlm::replying("## Contexte\n- Équipe data");
        let jd = "  Nous cherchons un data engineer (H/F) – Spark  ";

        let out = enrich_job_description(Some(jd), &llm, "gpt-test")
            .await
            .unwrap();
        assert_eq!(out, "## Contexte\n- Équipe data");

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.model, "gpt-test");
        assert_eq!(request.max_tokens, 1500);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, ENRICH_SYSTEM);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains(jd));
    }

    #[tokio::test]
    async fn test_prefix_stripped_from_completion() {
        let llm = ScriptedLlm::replying("Voici le texte enrichi :\n## Contexte\n- X");
        let out = enrich_job_description(Some("poste"), &llm, "m")
            .await
            .unwrap();
        assert_eq!(out, "## Contexte\n- X");
    }

    #[tokio::test]
    async fn test_empty_completion_falls_back_to_input() {
        let llm = ScriptedLlm::replying("");
        let out = enrich_job_description(Some("  Analyste financier  "), &llm, "m")
            .await
            .unwrap();
        assert_eq!(out, "Analyste financier");
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_service_error() {
        let llm = ScriptedLlm::failing(429);
        let err = enrich_job_description(Some("poste"), &llm, "m")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EnrichmentService(_)));
        assert_eq!(llm.calls().len(), 1);
    }
}
