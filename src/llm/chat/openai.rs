use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION}};
use serde::{Deserialize, Serialize};

use super::ChatClient;
use crate::llm::{CompletionOptions, LlmConfig, LlmError, Message};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAIChatClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

impl OpenAIChatClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::Config("OpenAI API key is required".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| LlmError::Config(format!("Invalid API key format: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions
    ) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);

        let req = OpenAIChatRequest {
            model: &options.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!("POST {} model={} messages={}", url, options.model, messages.len());

        let resp = self.http.post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { LlmError::Timeout(e) } else { LlmError::Transport(e) })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let resp = resp
            .json::<OpenAIResponse>()
            .await?;

        resp.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }

    fn get_base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as JsonValue};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAIChatClient {
        let config = LlmConfig {
            api_key: "test-key".into(),
            base_url: format!("{}/", server.uri()),
            ..LlmConfig::default()
        };
        OpenAIChatClient::from_config(&config).expect("client")
    }

    fn options(temperature: Option<f32>) -> CompletionOptions {
        CompletionOptions {
            model: "gpt-3.5-turbo".into(),
            max_tokens: 300,
            temperature,
        }
    }

    fn sample_response(content: JsonValue) -> JsonValue {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": { "role": "assistant", "content": content }
            }]
        })
    }

    #[tokio::test]
    async fn complete_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 300,
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "hi" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(json!("Hi expat!"))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let messages = vec![Message::system("be brief"), Message::user("hi")];
        let reply = client.complete(&messages, &options(None)).await.expect("reply");
        assert_eq!(reply, "Hi expat!");
    }

    #[tokio::test]
    async fn temperature_is_sent_only_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(json!("{}"))))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let messages = vec![Message::user("hi")];
        client.complete(&messages, &options(None)).await.expect("first");
        client.complete(&messages, &options(Some(0.1))).await.expect("second");

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 2);
        let first: JsonValue = serde_json::from_slice(&requests[0].body).unwrap();
        let second: JsonValue = serde_json::from_slice(&requests[1].body).unwrap();
        assert!(first.get("temperature").is_none());
        let temperature = second["temperature"].as_f64().unwrap();
        assert!((temperature - 0.1).abs() < 1e-6);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .complete(&[Message::user("hi")], &options(None))
            .await
            .unwrap_err();
        match err {
            LlmError::Status { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn null_content_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response(JsonValue::Null)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .complete(&[Message::user("hi")], &options(None))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(sample_response(json!("late")))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = LlmConfig {
            api_key: "test-key".into(),
            base_url: server.uri(),
            timeout: std::time::Duration::from_millis(50),
            ..LlmConfig::default()
        };
        let client = OpenAIChatClient::from_config(&config).expect("client");
        let err = client
            .complete(&[Message::user("hi")], &options(None))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout(_)));
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let config = LlmConfig::default();
        assert!(matches!(
            OpenAIChatClient::from_config(&config),
            Err(LlmError::Config(_))
        ));
    }
}
