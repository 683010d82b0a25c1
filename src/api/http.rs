//! Fetch Transport
//!
//! `Transport` over the browser's fetch API via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use std::fmt::Display;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        tracing::debug!(method = ?request.method, %url, "fetch");

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            // `json` also sets Content-Type: application/json
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = body_or_empty(response.text().await);

        tracing::debug!(%url, status, "fetch complete");
        Ok(ApiResponse { status, status_text, body })
    }
}

/// The status alone decides success, so an unreadable body is treated as empty
fn body_or_empty<E: Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "response body unreadable");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::response;

    #[test]
    fn test_unreadable_body_keeps_success_status() {
        let body = body_or_empty::<&str>(Err("stream aborted"));
        assert_eq!(body, "");
        assert!(response(201, &body).error_for_status().is_ok());
        assert_eq!(body_or_empty::<&str>(Ok("{}".to_string())), "{}");
    }
}
