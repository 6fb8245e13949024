use crate::models::generation::GenerationOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Form state for one studio surface. Created when the surface mounts,
/// mutated by user interaction and by completion of the in-flight request,
/// discarded with the surface. Nothing here persists across sessions.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub prompt: String,
    /// Selected style preset `value`, `"none"` for the sentinel.
    pub style: String,
    /// Selected size preset `value`.
    pub size: String,
    pub seed: Option<i64>,
    pub strip_branding: bool,
    /// Uploaded source image as a data URI, required for edit mode.
    pub uploaded_image: Option<String>,
    pub phase: Phase,
    pub last_result: Option<GenerationOutcome>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            prompt: String::new(),
            style: "none".to_string(),
            size: "square".to_string(),
            seed: None,
            strip_branding: true,
            uploaded_image: None,
            phase: Phase::Idle,
            last_result: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == Phase::InFlight
    }
}
