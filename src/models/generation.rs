use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Generate,
    Edit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Generate => write!(f, "generate"),
            Mode::Edit => write!(f, "edit"),
        }
    }
}

/// One submission to the generation service. Constructed fresh per user
/// action and never mutated afterwards. `size` and `seed` are recorded for
/// the session but are not part of the wire shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub final_prompt: String,
    pub mode: Mode,
    pub source_image: Option<String>,
    pub size: Option<(u32, u32)>,
    pub seed: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    RateLimited,
    PaymentRequired,
    Other,
}

impl FailureKind {
    /// Classify the service's `error` string. The service is matched by
    /// substring on its exact wording; do not loosen or localize this.
    pub fn classify(message: &str) -> Self {
        if message.contains("Rate limit") {
            FailureKind::RateLimited
        } else if message.contains("Payment required") {
            FailureKind::PaymentRequired
        } else {
            FailureKind::Other
        }
    }

    /// Human-readable notice for a failed submission.
    pub fn user_notice(&self, raw_message: &str) -> String {
        match self {
            FailureKind::RateLimited => {
                "Rate limit reached. Please wait a moment and try again.".to_string()
            }
            FailureKind::PaymentRequired => {
                "Credits required. Please add credits to continue.".to_string()
            }
            FailureKind::Other => raw_message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Success { image_url: String },
    Failure { kind: FailureKind, message: String },
}

impl GenerationOutcome {
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        GenerationOutcome::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }
}
