use crate::error::{Result, StudioError};
use crate::models::upload::decode_data_uri;
use crate::studio::traits::ResultPresenter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "JPG",
            ImageFormat::Png => "PNG",
        }
    }
}

/// File name for a saved result: `generated-image-<unix-epoch-millis>.<ext>`.
pub fn download_file_name(format: ImageFormat, at: DateTime<Utc>) -> String {
    format!(
        "generated-image-{}.{}",
        at.timestamp_millis(),
        format.extension()
    )
}

/// Presenter for terminal sessions: display events go to the log, downloads
/// land in a target directory, and the clipboard is unavailable.
pub struct ConsolePresenter {
    client: Client,
    output_dir: PathBuf,
}

impl ConsolePresenter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            output_dir: output_dir.into(),
        }
    }

    async fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>> {
        if image_url.starts_with("data:") {
            return decode_data_uri(image_url);
        }

        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|e| StudioError::RequestError(format!("Image fetch failed: {}", e)))?
            .error_for_status()
            .map_err(|e| StudioError::RequestError(format!("Image fetch failed: {}", e)))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StudioError::ResponseError(format!("Image body read failed: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ResultPresenter for ConsolePresenter {
    fn display(&mut self, image_url: &str) {
        if image_url.starts_with("data:") {
            log::info!("🖼️  Image ready ({} byte data URI)", image_url.len());
        } else {
            log::info!("🖼️  Image ready: {}", image_url);
        }
    }

    fn display_placeholder(&mut self, busy: bool) {
        if busy {
            log::info!("Generating...");
        }
    }

    fn display_error(&mut self, message: &str) {
        log::error!("{}", message);
    }

    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
    }

    async fn copy_to_clipboard(&mut self, _image_url: &str) -> Result<()> {
        Err(StudioError::ClientActionError(
            "Clipboard is not available in a console session".into(),
        ))
    }

    async fn download(&mut self, image_url: &str, format: ImageFormat) -> Result<()> {
        let bytes = self.fetch_image(image_url).await?;
        let path = self.output_dir.join(download_file_name(format, Utc::now()));

        fs::write(&path, bytes)
            .map_err(|e| StudioError::ClientActionError(format!("Failed to save image: {}", e)))?;

        log::info!("💾 Image saved to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_file_name() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(
            download_file_name(ImageFormat::Jpg, at),
            "generated-image-1700000000123.jpg"
        );
        assert_eq!(
            download_file_name(ImageFormat::Png, at),
            "generated-image-1700000000123.png"
        );
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(ImageFormat::Jpg.label(), "JPG");
        assert_eq!(ImageFormat::Png.extension(), "png");
    }

    #[tokio::test]
    async fn test_download_writes_a_data_uri_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = ConsolePresenter::new(dir.path());

        presenter
            .download("data:image/png;base64,SGVsbG8sIFdvcmxkIQ==", ImageFormat::Png)
            .await
            .unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("generated-image-"));
        assert!(name.ends_with(".png"));
        assert_eq!(fs::read(&path).unwrap(), b"Hello, World!");
    }

    #[tokio::test]
    async fn test_clipboard_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = ConsolePresenter::new(dir.path());
        assert!(presenter.copy_to_clipboard("https://x/y.png").await.is_err());
    }
}
