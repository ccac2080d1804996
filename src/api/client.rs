use crate::api::models::{
    ChatConfig, Content, GenerateRequest, GenerateResponse, GenerationConfig, Part, ThinkingConfig,
};
use crate::api::response::collect_parts;
use crate::api::streaming::process_sse_stream;
use crate::error::{IvanError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// The generative backend consumed by the response handler. Implemented
/// over HTTP by `GeminiClient`; tests substitute their own.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Single non-streaming exchange; returns the response parts in order.
    async fn generate_once(&self, model: &str, prompt: &str) -> Result<Vec<Part>>;

    /// Streaming exchange: every text fragment is handed to `on_fragment`
    /// in arrival order. Returns the full concatenated reply.
    async fn stream_reply(
        &self,
        model: &str,
        config: &ChatConfig,
        message: &str,
        on_fragment: &mut dyn FnMut(&str),
    ) -> Result<String>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    stream_timeout: u64,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(api_key: &str, endpoint: &str, stream_timeout: u64, verbose: bool) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| IvanError::Other(format!("Invalid API key header: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            stream_timeout,
            verbose,
        })
    }

    fn url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.endpoint, model, method)
    }
}

impl Backend for GeminiClient {
    async fn generate_once(&self, model: &str, prompt: &str) -> Result<Vec<Part>> {
        let request = GenerateRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: None,
            generation_config: None,
        };

        let response = self
            .client
            .post(self.url(model, "generateContent"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(IvanError::ApiError { status, message });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(collect_parts(&parsed))
    }

    async fn stream_reply(
        &self,
        model: &str,
        config: &ChatConfig,
        message: &str,
        on_fragment: &mut dyn FnMut(&str),
    ) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content::user(message)],
            system_instruction: Some(Content::system(config.system_instruction.clone())),
            generation_config: config.thinking_budget.map(|budget| GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: budget,
                }),
            }),
        };

        let response = self
            .client
            .post(format!("{}?alt=sse", self.url(model, "streamGenerateContent")))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(IvanError::ApiError { status, message });
        }

        process_sse_stream(response, self.stream_timeout, self.verbose, on_fragment).await
    }
}
