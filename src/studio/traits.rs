use crate::error::Result;
use crate::models::{GenerationOutcome, GenerationRequest};
use crate::studio::presenter::ImageFormat;
use async_trait::async_trait;

/// Seam in front of the remote generation service. The HTTP client is the
/// production implementation; tests script outcomes through it.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit one request and normalize whatever comes back into an outcome.
    /// Never retries and never mutates the request.
    async fn submit(&self, request: &GenerationRequest) -> GenerationOutcome;
}

/// The display surface the orchestrator publishes into. Rendering itself is
/// out of scope; implementations pass image references through unchanged.
#[async_trait]
pub trait ResultPresenter {
    fn display(&mut self, image_url: &str);
    fn display_placeholder(&mut self, busy: bool);
    fn display_error(&mut self, message: &str);
    fn notify(&mut self, message: &str);

    async fn copy_to_clipboard(&mut self, image_url: &str) -> Result<()>;
    async fn download(&mut self, image_url: &str, format: ImageFormat) -> Result<()>;
}
