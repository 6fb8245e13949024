use crate::error::{Result, StudioError};
use crate::models::{
    find_size, find_style, GenerationOutcome, GenerationRequest, Mode, Phase, SessionState,
    UploadedImage,
};
use crate::prompt;
use crate::studio::presenter::ImageFormat;
use crate::studio::traits::{GenerationBackend, ResultPresenter};

const EMPTY_PROMPT_GENERATE: &str = "Please enter a prompt";
const EMPTY_PROMPT_EDIT: &str = "Please describe what changes you want";
const MISSING_SOURCE_IMAGE: &str = "Please upload an image first";
const SUCCESS_GENERATE: &str = "Image generated successfully!";
const SUCCESS_EDIT: &str = "Image edited successfully!";

/// A validated submission that has been handed to the backend. The sequence
/// number ties the eventual outcome back to this submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub seq: u64,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    seq: u64,
    mode: Mode,
}

/// Owns one surface's session state and drives the submission lifecycle:
/// Idle -> InFlight -> Succeeded/Failed, back to Idle on the next edit.
///
/// The UI disables its trigger while a request is in flight, so overlapping
/// submissions do not occur in practice. The orchestrator does not rely on
/// that: a new `begin` supersedes the tracked sequence number and `complete`
/// discards any outcome whose sequence no longer matches, so a late response
/// can never overwrite a newer result.
pub struct RequestOrchestrator<B: GenerationBackend> {
    backend: B,
    state: SessionState,
    next_seq: u64,
    in_flight: Option<InFlight>,
}

impl<B: GenerationBackend> RequestOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SessionState::new(),
            next_seq: 1,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // Editing any field after a settled request re-arms the session.
    fn settle(&mut self) {
        if matches!(self.state.phase, Phase::Succeeded | Phase::Failed) {
            self.state.phase = Phase::Idle;
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.prompt = prompt.into();
        self.settle();
    }

    pub fn set_style(&mut self, value: impl Into<String>) {
        self.state.style = value.into();
        self.settle();
    }

    pub fn set_size(&mut self, value: impl Into<String>) {
        self.state.size = value.into();
        self.settle();
    }

    pub fn set_seed(&mut self, seed: Option<i64>) {
        self.state.seed = seed;
        self.settle();
    }

    pub fn set_strip_branding(&mut self, enabled: bool) {
        self.state.strip_branding = enabled;
        self.settle();
    }

    pub fn set_uploaded_image(&mut self, image: Option<UploadedImage>) {
        self.state.uploaded_image = image.map(UploadedImage::into_data_uri);
        self.settle();
    }

    /// Validate the form and move to InFlight, returning the request to hand
    /// to the backend. Guard failures leave the phase untouched and never
    /// reach the backend.
    pub fn begin(&mut self, mode: Mode) -> Result<PendingRequest> {
        if mode == Mode::Edit && self.state.uploaded_image.is_none() {
            return Err(StudioError::ValidationError(MISSING_SOURCE_IMAGE.into()));
        }
        if self.state.prompt.trim().is_empty() {
            let notice = match mode {
                Mode::Generate => EMPTY_PROMPT_GENERATE,
                Mode::Edit => EMPTY_PROMPT_EDIT,
            };
            return Err(StudioError::ValidationError(notice.into()));
        }

        let style = find_style(&self.state.style);
        // The edit surface has no branding toggle; the directive applies to
        // fresh generations only.
        let strip_branding = mode == Mode::Generate && self.state.strip_branding;
        let final_prompt = prompt::compose(&self.state.prompt, style, strip_branding);

        let (source_image, size, seed) = match mode {
            Mode::Generate => (
                None,
                find_size(&self.state.size).map(|s| (s.width, s.height)),
                self.state.seed,
            ),
            Mode::Edit => (self.state.uploaded_image.clone(), None, None),
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(previous) = self.in_flight {
            log::warn!(
                "Request {} superseded by request {} before it resolved",
                previous.seq,
                seq
            );
        }
        self.in_flight = Some(InFlight { seq, mode });
        self.state.phase = Phase::InFlight;

        log::debug!("Request {} entering flight as {}", seq, mode);
        Ok(PendingRequest {
            seq,
            request: GenerationRequest {
                final_prompt,
                mode,
                source_image,
                size,
                seed,
            },
        })
    }

    /// Apply a resolved outcome. Returns false when the outcome belongs to a
    /// superseded request, in which case nothing changes.
    pub fn complete<P: ResultPresenter>(
        &mut self,
        seq: u64,
        outcome: GenerationOutcome,
        presenter: &mut P,
    ) -> bool {
        let current = match self.in_flight {
            Some(current) if current.seq == seq => current,
            _ => {
                log::debug!("Discarding stale response for request {}", seq);
                return false;
            }
        };
        self.in_flight = None;

        match &outcome {
            GenerationOutcome::Success { image_url } => {
                self.state.phase = Phase::Succeeded;
                presenter.display(image_url);
                presenter.notify(match current.mode {
                    Mode::Generate => SUCCESS_GENERATE,
                    Mode::Edit => SUCCESS_EDIT,
                });
            }
            GenerationOutcome::Failure { kind, message } => {
                self.state.phase = Phase::Failed;
                presenter.display_error(&kind.user_notice(message));
            }
        }
        self.state.last_result = Some(outcome);
        true
    }

    /// Full submission lifecycle for one user action.
    pub async fn submit<P: ResultPresenter>(&mut self, mode: Mode, presenter: &mut P) -> Result<()> {
        let pending = match self.begin(mode) {
            Ok(pending) => pending,
            Err(e) => {
                presenter.display_error(e.notice());
                return Err(e);
            }
        };

        presenter.display_placeholder(true);
        let outcome = self.backend.submit(&pending.request).await;
        self.complete(pending.seq, outcome, presenter);
        presenter.display_placeholder(false);
        Ok(())
    }

    /// Copy the last successful image to the clipboard. Action failures are
    /// surfaced as notices and never touch the phase.
    pub async fn copy_result<P: ResultPresenter>(&self, presenter: &mut P) -> Result<()> {
        let image_url = match &self.state.last_result {
            Some(GenerationOutcome::Success { image_url }) => image_url.clone(),
            _ => return Ok(()),
        };

        if let Err(e) = presenter.copy_to_clipboard(&image_url).await {
            log::error!("Copy error: {}", e);
            presenter.display_error("Failed to copy image");
            return Err(e);
        }
        presenter.notify("Image copied to clipboard!");
        Ok(())
    }

    /// Download the last successful image in the requested format.
    pub async fn download_result<P: ResultPresenter>(
        &self,
        format: ImageFormat,
        presenter: &mut P,
    ) -> Result<()> {
        let image_url = match &self.state.last_result {
            Some(GenerationOutcome::Success { image_url }) => image_url.clone(),
            _ => return Ok(()),
        };

        if let Err(e) = presenter.download(&image_url, format).await {
            log::error!("Download error: {}", e);
            presenter.display_error("Failed to download image");
            return Err(e);
        }
        presenter.notify(&format!("Image downloaded as {}", format.label()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::FailureKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedBackend {
        outcome: GenerationOutcome,
        calls: AtomicUsize,
        last_request: Mutex<Option<GenerationRequest>>,
    }

    impl ScriptedBackend {
        fn new(outcome: GenerationOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn success(url: &str) -> Self {
            Self::new(GenerationOutcome::Success {
                image_url: url.to_string(),
            })
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        async fn submit(&self, request: &GenerationRequest) -> GenerationOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        displayed: Vec<String>,
        errors: Vec<String>,
        notices: Vec<String>,
        placeholder_events: Vec<bool>,
    }

    #[async_trait]
    impl ResultPresenter for RecordingPresenter {
        fn display(&mut self, image_url: &str) {
            self.displayed.push(image_url.to_string());
        }
        fn display_placeholder(&mut self, busy: bool) {
            self.placeholder_events.push(busy);
        }
        fn display_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
        async fn copy_to_clipboard(&mut self, _image_url: &str) -> Result<()> {
            Ok(())
        }
        async fn download(&mut self, _image_url: &str, _format: ImageFormat) -> Result<()> {
            Ok(())
        }
    }

    fn upload() -> UploadedImage {
        UploadedImage::from_bytes("image/png", b"pixels").unwrap()
    }

    #[tokio::test]
    async fn test_empty_prompt_never_reaches_the_backend() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("   \n ");
        let result = orchestrator.submit(Mode::Generate, &mut presenter).await;

        assert!(result.is_err());
        assert_eq!(orchestrator.backend.calls.load(Ordering::SeqCst), 0);
        assert_eq!(orchestrator.state().phase, Phase::Idle);
        assert_eq!(presenter.errors, vec!["Please enter a prompt"]);
        assert!(presenter.placeholder_events.is_empty());
    }

    #[tokio::test]
    async fn test_edit_without_upload_never_reaches_the_backend() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("add a sunset");
        let result = orchestrator.submit(Mode::Edit, &mut presenter).await;

        assert!(result.is_err());
        assert_eq!(orchestrator.backend.calls.load(Ordering::SeqCst), 0);
        assert_eq!(presenter.errors, vec!["Please upload an image first"]);
    }

    #[tokio::test]
    async fn test_successful_generation_publishes_the_exact_url() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();

        assert_eq!(orchestrator.state().phase, Phase::Succeeded);
        assert_eq!(presenter.displayed, vec!["https://x/y.png"]);
        assert_eq!(presenter.notices, vec!["Image generated successfully!"]);
        assert_eq!(presenter.placeholder_events, vec![true, false]);
        assert_eq!(
            orchestrator.state().last_result,
            Some(GenerationOutcome::Success {
                image_url: "https://x/y.png".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_generate_request_composes_prompt_and_carries_size() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.set_style("anime style, manga, japanese animation");
        orchestrator.set_size("portrait");
        orchestrator.set_seed(Some(42));
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();

        let request = orchestrator
            .backend
            .last_request
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(
            request.final_prompt,
            "cat, anime style, manga, japanese animation, no text, no watermarks, no logos"
        );
        assert_eq!(request.size, Some((1024, 1536)));
        assert_eq!(request.seed, Some(42));
        assert!(request.source_image.is_none());
    }

    #[tokio::test]
    async fn test_edit_request_skips_branding_directive() {
        let backend = ScriptedBackend::success("https://x/z.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("add a sunset");
        orchestrator.set_uploaded_image(Some(upload()));
        orchestrator.submit(Mode::Edit, &mut presenter).await.unwrap();

        let request = orchestrator
            .backend
            .last_request
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(request.final_prompt, "add a sunset");
        assert_eq!(request.mode, Mode::Edit);
        assert!(request
            .source_image
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,"));
        assert_eq!(presenter.notices, vec!["Image edited successfully!"]);
    }

    #[tokio::test]
    async fn test_rate_limit_failure_uses_the_specific_notice() {
        let backend = ScriptedBackend::new(GenerationOutcome::failure(
            FailureKind::RateLimited,
            "Rate limit exceeded",
        ));
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();

        assert_eq!(orchestrator.state().phase, Phase::Failed);
        assert_eq!(
            presenter.errors,
            vec!["Rate limit reached. Please wait a moment and try again."]
        );
    }

    #[tokio::test]
    async fn test_generic_failure_surfaces_the_raw_message() {
        let backend = ScriptedBackend::new(GenerationOutcome::failure(
            FailureKind::Other,
            "model exploded",
        ));
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();

        assert_eq!(orchestrator.state().phase, Phase::Failed);
        assert_eq!(presenter.errors, vec!["model exploded"]);
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_the_newer_result() {
        let backend = ScriptedBackend::success("unused");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        let first = orchestrator.begin(Mode::Generate).unwrap();
        let second = orchestrator.begin(Mode::Generate).unwrap();
        assert!(second.seq > first.seq);

        // Second resolves first; the late first outcome must be discarded.
        let applied = orchestrator.complete(
            second.seq,
            GenerationOutcome::Success {
                image_url: "https://x/new.png".to_string(),
            },
            &mut presenter,
        );
        assert!(applied);

        let stale = orchestrator.complete(
            first.seq,
            GenerationOutcome::Success {
                image_url: "https://x/old.png".to_string(),
            },
            &mut presenter,
        );
        assert!(!stale);

        assert_eq!(presenter.displayed, vec!["https://x/new.png"]);
        assert_eq!(
            orchestrator.state().last_result,
            Some(GenerationOutcome::Success {
                image_url: "https://x/new.png".to_string()
            })
        );
        assert_eq!(orchestrator.state().phase, Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_field_edit_after_settlement_returns_to_idle() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();
        assert_eq!(orchestrator.state().phase, Phase::Succeeded);

        orchestrator.set_prompt("dog");
        assert_eq!(orchestrator.state().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_copy_result_without_a_success_is_a_no_op() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.copy_result(&mut presenter).await.unwrap();
        assert!(presenter.notices.is_empty());
    }

    #[tokio::test]
    async fn test_download_result_notifies_with_the_format_label() {
        let backend = ScriptedBackend::success("https://x/y.png");
        let mut orchestrator = RequestOrchestrator::new(backend);
        let mut presenter = RecordingPresenter::default();

        orchestrator.set_prompt("cat");
        orchestrator.submit(Mode::Generate, &mut presenter).await.unwrap();
        orchestrator
            .download_result(ImageFormat::Png, &mut presenter)
            .await
            .unwrap();

        assert!(presenter.notices.contains(&"Image downloaded as PNG".to_string()));
    }
}
