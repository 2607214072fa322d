//! OpenAI-compatible gateway adapter
//!
//! Implements [`LlmGateway`] on top of the Chat Completions endpoint. Every
//! prompt is sent as a single user message with the model, temperature and
//! token limit fixed at construction. Works with any server that speaks the
//! same API (Azure proxies, vLLM, Ollama's OpenAI endpoint, ...).

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use subquery_application::{GatewayError, LlmGateway};
use subquery_domain::{GenerationSettings, OpenAiProviderConfig};
use tracing::{debug, info};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiGateway {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    settings: GenerationSettings,
}

impl std::fmt::Debug for OpenAiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGateway")
            .field("endpoint", &self.endpoint)
            .field("model", &self.settings.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OpenAiGateway {
    /// Create a gateway, resolving the API key from config or environment.
    ///
    /// A missing key is not an error here: local OpenAI-compatible servers
    /// usually accept unauthenticated requests, and the hosted API answers
    /// 401, which surfaces as [`GatewayError::Authentication`].
    pub fn new(settings: GenerationSettings, config: &OpenAiProviderConfig) -> Self {
        let api_key = config.resolve_api_key(|name| std::env::var(name).ok());
        if api_key.is_none() {
            debug!("No API key resolved; sending unauthenticated requests");
        }

        let endpoint = Self::endpoint_for(&config.base_url);
        info!(
            endpoint = %endpoint,
            model = %settings.model,
            temperature = settings.temperature,
            "OpenAI gateway initialized"
        );

        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            api_key,
            settings,
        }
    }

    /// Build the Chat Completions URL from a base URL.
    ///
    /// Accepts base URLs with or without a trailing slash or `/v1` suffix.
    fn endpoint_for(base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{}{}", base, CHAT_COMPLETIONS_PATH)
    }

    /// Map a non-success HTTP status and body onto a gateway error.
    fn classify_error(status: StatusCode, body: &str) -> GatewayError {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        let message = format!("{} {}", status.as_u16(), detail);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GatewayError::Authentication(message)
            }
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
            _ => GatewayError::RequestFailed(message),
        }
    }

    /// Pull the generated text out of a completion response.
    fn extract_text(response: ChatCompletionResponse) -> Result<String, GatewayError> {
        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("no choices in response".to_string()))?;

        choice.message.content.ok_or_else(|| {
            GatewayError::InvalidResponse(format!(
                "empty message content (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.settings.model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let mut builder = self.http_client.post(&self.endpoint).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        debug!("Sending {} byte prompt to {}", prompt.len(), self.settings.model);

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Self::extract_text(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subquery_domain::Model;

    fn parse(body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_endpoint_normalization() {
        let expected = "https://api.openai.com/v1/chat/completions";
        assert_eq!(OpenAiGateway::endpoint_for("https://api.openai.com"), expected);
        assert_eq!(OpenAiGateway::endpoint_for("https://api.openai.com/"), expected);
        assert_eq!(OpenAiGateway::endpoint_for("https://api.openai.com/v1"), expected);
        assert_eq!(
            OpenAiGateway::endpoint_for("http://localhost:11434/v1/"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_classify_auth_errors() {
        let body = r#"{"error":{"message":"Incorrect API key provided"}}"#;
        let err = OpenAiGateway::classify_error(StatusCode::UNAUTHORIZED, body);
        assert!(
            matches!(err, GatewayError::Authentication(ref msg) if msg == "401 Incorrect API key provided")
        );
        assert!(matches!(
            OpenAiGateway::classify_error(StatusCode::FORBIDDEN, ""),
            GatewayError::Authentication(_)
        ));
    }

    #[test]
    fn test_classify_rate_limit_and_other() {
        assert!(matches!(
            OpenAiGateway::classify_error(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
        let err = OpenAiGateway::classify_error(StatusCode::BAD_GATEWAY, "  upstream gone \n");
        assert_eq!(err.to_string(), "Request failed: 502 upstream gone");
    }

    #[test]
    fn test_extract_text_takes_first_choice() {
        let response = parse(
            r#"{"choices":[{"message":{"content":"1. a\n2. b"},"finish_reason":"stop"},{"message":{"content":"other"}}],
                "usage":{"prompt_tokens":12,"completion_tokens":5}}"#,
        );
        assert_eq!(OpenAiGateway::extract_text(response).unwrap(), "1. a\n2. b");
    }

    #[test]
    fn test_extract_text_rejects_empty_responses() {
        let no_choices = parse(r#"{"choices":[]}"#);
        assert!(matches!(
            OpenAiGateway::extract_text(no_choices),
            Err(GatewayError::InvalidResponse(_))
        ));

        let null_content =
            parse(r#"{"choices":[{"message":{"content":null},"finish_reason":"content_filter"}]}"#);
        let err = OpenAiGateway::extract_text(null_content).unwrap_err();
        assert!(err.to_string().contains("content_filter"));
    }

    #[test]
    fn test_settings_are_passed_through() {
        let settings = GenerationSettings::new(Model::Gpt41).with_temperature(0.2);
        let config = OpenAiProviderConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let gateway = OpenAiGateway::new(settings.clone(), &config);

        assert_eq!(gateway.settings(), &settings);
        assert_eq!(gateway.model(), &Model::Gpt41);
        assert!(!format!("{:?}", gateway).contains("sk-test"));
    }
}
