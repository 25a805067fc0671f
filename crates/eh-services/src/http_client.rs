use crate::{Result as ServiceErrorResult, ServiceError};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde_json::Value;

/// JSON-over-HTTP client shared by the remote collaborators
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: ReqwestClient,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> ServiceErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Send the request and decode the body.
    ///
    /// Non-success statuses become [`ServiceError::Api`], using the
    /// `{"error":{"code","message"}}` body when the server sends one.
    /// An empty success body decodes as `Value::Null`.
    pub async fn execute(&self, req: RequestBuilder) -> ServiceErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("HTTP {} ({} bytes)", status.as_u16(), text.len());

        if !status.is_success() {
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ServiceError::api(status.as_u16(), code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
