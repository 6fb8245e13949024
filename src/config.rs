use std::env;

/// Connection settings for the remote generation function endpoint.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub function_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            function_url: None,
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let function_url = env::var("STUDIO_FUNCTION_URL").ok();
        let api_key = env::var("STUDIO_API_KEY").ok();
        let timeout_secs = env::var("STUDIO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        StudioConfig {
            function_url,
            api_key,
            timeout_secs,
        }
    }

    pub fn with_function_url(mut self, url: impl Into<String>) -> Self {
        self.function_url = Some(url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Optional transport timeout. The core enforces none by default: a hung
    /// call leaves the session in-flight until the service answers.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
