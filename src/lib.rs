//! Pastiche AI Studio core.
//!
//! The pieces behind an AI image generation/editing front end: static preset
//! catalogs, prompt composition, a client for the remote generation function
//! endpoint, and the per-surface request orchestration that ties them
//! together. Rendering, clipboard, and file-save primitives stay behind the
//! [`studio::ResultPresenter`] trait.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod studio;

pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use models::{
    find_size, find_style, size_presets, style_presets, FailureKind, GenerationOutcome,
    GenerationRequest, Mode, Phase, SessionState, SizePreset, StylePreset, UploadedImage,
};
pub use studio::{
    ConsolePresenter, GenerationBackend, GenerationClient, ImageFormat, RequestOrchestrator,
    ResultPresenter, StudioClient,
};
