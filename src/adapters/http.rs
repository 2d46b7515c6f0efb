use crate::config::toml_config::ApiSettings;
use crate::core::{Payload, RemoteApi, SaveResponse};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `RemoteApi` over HTTP: every call is a JSON `POST` to the configured endpoint.
pub struct HttpApi {
    settings: ApiSettings,
    client: Client,
}

impl HttpApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    async fn send_once(&self, payload: &Payload) -> Result<SaveResponse> {
        let mut request = self.client.post(&self.settings.endpoint).json(payload);

        if let Some(headers) = &self.settings.headers {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        if let Some(timeout) = self.settings.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(decode_body(&body))
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn post(&self, payload: &Payload) -> Result<SaveResponse> {
        let max_attempts = self.settings.retry_attempts.unwrap_or(0) + 1;
        let delay = Duration::from_secs(self.settings.retry_delay_seconds.unwrap_or(1));
        let mut attempt = 1;

        loop {
            tracing::debug!(
                "POST {} (attempt {}/{})",
                self.settings.endpoint,
                attempt,
                max_attempts
            );

            match self.send_once(payload).await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < max_attempts && is_retryable(&e) => {
                    tracing::warn!("⚠️ Attempt {} failed: {}, retrying in {:?}", attempt, e, delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn is_retryable(error: &AppError) -> bool {
    match error {
        // 請求組裝錯誤（例如無效的標頭）重試也不會成功
        AppError::ApiError(e) if e.is_builder() => false,
        AppError::ApiError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
        AppError::ApiStatusError { status, .. } => *status >= 500,
        _ => false,
    }
}

// 空內容視為 null，非 JSON 內容原樣包成字串
fn decode_body(body: &str) -> SaveResponse {
    if body.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
