pub mod generation_client;
pub mod orchestrator;
pub mod presenter;
pub mod traits;

use crate::config::StudioConfig;
use crate::error::Result;

pub use generation_client::GenerationClient;
pub use orchestrator::{PendingRequest, RequestOrchestrator};
pub use presenter::{download_file_name, ConsolePresenter, ImageFormat};
pub use traits::{GenerationBackend, ResultPresenter};

/// Entry point for the studio core. Holds the configured generation client
/// and mints an orchestrator per UI surface.
#[derive(Clone)]
pub struct StudioClient {
    generation: GenerationClient,
}

impl StudioClient {
    pub fn new(config: StudioConfig) -> Result<Self> {
        Ok(Self {
            generation: GenerationClient::new(&config)?,
        })
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation
    }

    /// A fresh session for one surface. Sessions are independent; each owns
    /// its own form state and in-flight tracking.
    pub fn new_session(&self) -> RequestOrchestrator<GenerationClient> {
        RequestOrchestrator::new(self.generation.clone())
    }
}
