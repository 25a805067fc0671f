use crate::{HttpClient, Result as ServiceErrorResult, ServiceError, with_retry};

use eh_auth::{PasswordResetService, ResetFailure, ResetFailureKind};
use eh_config::RetryConfig;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

const RESET_PATH: &str = "/api/v1/password-resets";

/// Password reset backed by the portal's REST API
pub struct HttpPasswordResetService {
    client: HttpClient,
    retry: RetryConfig,
}

impl HttpPasswordResetService {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryConfig) -> ServiceErrorResult<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, timeout)?,
            retry,
        })
    }

    async fn send(&self, email: &str) -> ServiceErrorResult<()> {
        #[derive(Serialize)]
        struct ResetRequest<'a> {
            email: &'a str,
        }

        let req = self
            .client
            .request(Method::POST, RESET_PATH)
            .json(&ResetRequest { email });
        self.client.execute(req).await.map(|_| ())
    }
}

#[async_trait]
impl PasswordResetService for HttpPasswordResetService {
    async fn request_reset(&self, email: &str) -> Result<(), ResetFailure> {
        with_retry(&self.retry, "password reset", || self.send(email))
            .await
            .map_err(|e| reset_failure(&e))
    }
}

/// Stand-in used when no reset endpoint is configured
pub struct UnconfiguredPasswordResetService;

#[async_trait]
impl PasswordResetService for UnconfiguredPasswordResetService {
    async fn request_reset(&self, _email: &str) -> Result<(), ResetFailure> {
        let e = ServiceError::unconfigured("password reset", "services.reset_base_url is not set");
        Err(reset_failure(&e))
    }
}

pub(crate) fn reset_failure(error: &ServiceError) -> ResetFailure {
    let kind = match error.status() {
        Some(404) => ResetFailureKind::UnknownEmail,
        Some(_) => ResetFailureKind::Rejected,
        None if error.is_unreachable() => ResetFailureKind::Unreachable,
        None => ResetFailureKind::Rejected,
    };
    ResetFailure::new(kind, error.to_string())
}
