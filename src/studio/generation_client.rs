use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::models::{FailureKind, GenerationOutcome, GenerationRequest, Mode};
use crate::studio::traits::GenerationBackend;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for the remote generation function endpoint.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    function_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct InvokePayload<'a> {
    prompt: &'a str,
    mode: Mode,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "imageUrl", default)]
    image_url: Option<String>,
}

impl GenerationClient {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        let function_url = config.function_url.clone().ok_or_else(|| {
            StudioError::ConfigError("Generation function URL is required".into())
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| StudioError::ClientError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            function_url,
            api_key: config.api_key.clone(),
        })
    }

    fn normalize(body: InvokeResponse) -> GenerationOutcome {
        if let Some(message) = body.error {
            let kind = FailureKind::classify(&message);
            return GenerationOutcome::Failure { kind, message };
        }

        match body.image_url {
            Some(image_url) => GenerationOutcome::Success { image_url },
            None => GenerationOutcome::failure(
                FailureKind::Other,
                "Service response carried neither imageUrl nor error",
            ),
        }
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn submit(&self, request: &GenerationRequest) -> GenerationOutcome {
        // imageUrl rides along only in edit mode.
        let payload = InvokePayload {
            prompt: &request.final_prompt,
            mode: request.mode,
            image_url: match request.mode {
                Mode::Edit => request.source_image.as_deref(),
                Mode::Generate => None,
            },
        };

        log::info!(
            "Submitting {} request ({} prompt chars)",
            request.mode,
            request.final_prompt.len()
        );

        let mut call = self.client.post(&self.function_url).json(&payload);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key).header("apikey", key);
        }

        let response = match call.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Generation transport error: {}", e);
                return GenerationOutcome::failure(FailureKind::Other, e.to_string());
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            log::error!("Generation endpoint returned an error status: {}", e);
            return GenerationOutcome::failure(FailureKind::Other, e.to_string());
        }

        let body: InvokeResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Failed to decode generation response: {}", e);
                return GenerationOutcome::failure(FailureKind::Other, e.to_string());
            }
        };

        let outcome = Self::normalize(body);
        match &outcome {
            GenerationOutcome::Success { .. } => log::info!("Generation succeeded"),
            GenerationOutcome::Failure { kind, message } => {
                log::warn!("Generation failed ({:?}): {}", kind, message)
            }
        }
        outcome
    }
}
