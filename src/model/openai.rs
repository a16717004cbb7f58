use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use super::{CompletionGateway, CompletionRequest, GatewayError};
use crate::config::Config;

// A wrapper for an OpenAI-compatible chat completions API
pub struct OpenAiGateway {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiGateway {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Using completion provider at {} with model {}",
            config.base_url, config.model
        );

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        })
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let payload = json!({
            "model": self.model,
            "messages": request.messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        info!(
            "Sending {} message(s) to completion provider (max_tokens: {}, temperature: {})",
            request.messages.len(),
            request.max_tokens,
            request.temperature
        );
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GatewayError::Status { status, body });
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or(GatewayError::MissingContent)?;

        info!("Response length: {} characters", content.len());
        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::web::models::Message;

    fn config_for(base_url: String) -> Config {
        Config {
            api_key: "test-key".to_string(),
            base_url,
            model: "test-model".to_string(),
            request_timeout_secs: 5,
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    /// Serves a single HTTP response and hands back the raw request it received.
    async fn one_shot_provider(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..split]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= split + 4 + content_length
    }

    fn request_body(raw: &str) -> Value {
        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn sends_chat_payload_and_extracts_content() {
        let (base_url, server) = one_shot_provider(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Ladies and gentlemen"}}]}"#,
        )
        .await;
        let gateway = OpenAiGateway::new(&config_for(base_url)).unwrap();

        let text = gateway
            .complete(CompletionRequest::new(
                vec![Message::system("rules"), Message::user("go")],
                500,
                0.8,
            ))
            .await
            .unwrap();
        assert_eq!(text, "Ladies and gentlemen");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1/chat/completions"));
        assert!(raw.to_ascii_lowercase().contains("authorization: bearer test-key"));

        let body = request_body(&raw);
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "go");
        assert!((body["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[tokio::test]
    async fn non_success_status_is_a_gateway_error() {
        let (base_url, server) =
            one_shot_provider("429 Too Many Requests", r#"{"error":"slow down"}"#).await;
        let gateway = OpenAiGateway::new(&config_for(base_url)).unwrap();

        let err = gateway
            .complete(CompletionRequest::new(vec![Message::user("hi")], 10, 0.7))
            .await
            .unwrap_err();
        server.await.unwrap();

        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert!(body.contains("slow down"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn response_without_choices_is_missing_content() {
        let (base_url, server) = one_shot_provider("200 OK", r#"{"choices":[]}"#).await;
        let gateway = OpenAiGateway::new(&config_for(base_url)).unwrap();

        let err = gateway
            .complete(CompletionRequest::new(vec![Message::user("hi")], 10, 0.7))
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GatewayError::MissingContent));
    }
}
