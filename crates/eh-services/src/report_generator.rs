//! AI-assisted lab report drafting.

use crate::{HttpClient, Result as ServiceErrorResult, ServiceError, with_retry};

use eh_config::{RetryConfig, ServicesConfig};

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "report generator";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Draft Theory, Discussion and Conclusion sections in Markdown
    async fn generate(
        &self,
        title: &str,
        objectives: &str,
        raw_data: &str,
    ) -> ServiceErrorResult<String>;
}

pub fn lab_report_prompt(title: &str, objectives: &str, raw_data: &str) -> String {
    format!(
        "You are an expert Engineering Lab Assistant.\n\
         Generate a professional lab report section based on:\n\
         Title: {title}\n\
         Objectives: {objectives}\n\
         Raw Data: {raw_data}\n\
         \n\
         Please provide:\n\
         1. A \"Theory\" section (background physics/engineering principles).\n\
         2. A \"Discussion\" of the results based on the data.\n\
         3. A \"Conclusion\" summarizing if objectives were met.\n\
         \n\
         Format the output in clean Markdown."
    )
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Report generator backed by the Gemini `generateContent` endpoint
pub struct GeminiReportGenerator {
    client: HttpClient,
    model: String,
    api_key: Option<String>,
    retry: RetryConfig,
}

impl GeminiReportGenerator {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
        retry: RetryConfig,
    ) -> ServiceErrorResult<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, timeout)?,
            model: model.into(),
            api_key,
            retry,
        })
    }

    pub fn from_config(services: &ServicesConfig, retry: &RetryConfig) -> ServiceErrorResult<Self> {
        Self::new(
            &services.ai_base_url,
            services.ai_model.clone(),
            services.ai_api_key.clone(),
            Duration::from_secs(services.request_timeout_secs),
            retry.clone(),
        )
    }

    async fn request(&self, api_key: &str, prompt: &str) -> ServiceErrorResult<String> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };
        let path = format!("/v1beta/models/{}:generateContent", self.model);
        let req = self
            .client
            .request(Method::POST, &path)
            .header(API_KEY_HEADER, api_key)
            .json(&body);

        let value = self.client.execute(req).await?;
        let response: GenerateContentResponse = serde_json::from_value(value)?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ServiceError::empty_response(SERVICE_NAME))
    }
}

#[async_trait]
impl ReportGenerator for GeminiReportGenerator {
    async fn generate(
        &self,
        title: &str,
        objectives: &str,
        raw_data: &str,
    ) -> ServiceErrorResult<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ServiceError::unconfigured(
                SERVICE_NAME,
                "services.ai_api_key is not set",
            ));
        };

        let prompt = lab_report_prompt(title, objectives, raw_data);
        let report = with_retry(&self.retry, "lab report generation", || {
            self.request(api_key, &prompt)
        })
        .await?;

        info!("Generated lab report '{title}' ({} chars)", report.len());
        Ok(report)
    }
}
