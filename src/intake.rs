use crate::config::IntakeConfig;
use crate::constants::EXTRACTION_FALLBACK_MESSAGE;
use crate::file::{FileFactory, FileKind};
use crate::models::{IncomingFile, UploadedFile};
use thiserror::Error;

/// Validation and extraction failures with their user-facing messages.
/// Every failure is terminal for the attempt; retrying means `reset` plus
/// a fresh `submit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("File is too large. Please select a file smaller than {}MB.", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    #[error("Invalid file type. Please upload a .txt or .docx file.")]
    InvalidType,

    #[error("{0}")]
    Extraction(String),
}

impl IntakeError {
    /// Wrap an extractor failure, substituting the generic fallback when
    /// the failure carries no description
    fn from_extraction(err: &anyhow::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            IntakeError::Extraction(EXTRACTION_FALLBACK_MESSAGE.to_string())
        } else {
            IntakeError::Extraction(message)
        }
    }
}

/// Position in the upload lifecycle; exactly one is active at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Loading,
    Loaded(UploadedFile),
    Failed(String),
}

impl UploadState {
    /// The extracted document, if one is loaded
    pub fn file(&self) -> Option<&UploadedFile> {
        match self {
            UploadState::Loaded(file) => Some(file),
            _ => None,
        }
    }

    /// The failure message, if the last submission failed
    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UploadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading)
    }
}

/// Owns the upload state machine: validates incoming files, dispatches to
/// the extractor, and applies the resulting transition. State is only
/// mutable through `submit` and `reset`.
pub struct IntakeController {
    config: IntakeConfig,
    state: UploadState,
}

impl IntakeController {
    pub fn new() -> Self {
        Self::with_config(IntakeConfig::default())
    }

    pub fn with_config(config: IntakeConfig) -> Self {
        Self {
            config,
            state: UploadState::Idle,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Validate and extract a single file.
    ///
    /// Validation runs in order, first failure wins: size, then type.
    /// Passing both transitions to `Loading` for the duration of the
    /// extraction, then to `Loaded` or `Failed` exactly once. Failures
    /// never propagate to the caller; they land in the returned state.
    pub async fn submit(&mut self, file: IncomingFile) -> &UploadState {
        if let Err(err) = self.validate(&file) {
            self.state = UploadState::Failed(err.to_string());
            return &self.state;
        }

        self.state = UploadState::Loading;

        let name = file.name.clone();
        let size = file.size;
        let media_type = file.media_type.clone();

        let source = FileFactory::create(file);
        self.state = match source.to_text().await {
            Ok(content) => {
                UploadState::Loaded(UploadedFile::new(name, size, media_type, content))
            }
            Err(err) => UploadState::Failed(IntakeError::from_extraction(&err).to_string()),
        };

        &self.state
    }

    /// Selection surfaces yield a list of files; only the first is used,
    /// the rest are silently ignored. An empty selection is a no-op.
    pub async fn submit_selection(&mut self, files: Vec<IncomingFile>) -> &UploadState {
        if let Some(first) = files.into_iter().next() {
            self.submit(first).await;
        }

        &self.state
    }

    /// Return to `Idle` from any state, dropping any stored file or message
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
    }

    fn validate(&self, file: &IncomingFile) -> Result<(), IntakeError> {
        if file.size > self.config.max_file_size {
            return Err(IntakeError::TooLarge {
                size: file.size,
                limit: self.config.max_file_size,
            });
        }

        if !FileKind::detect(&file.media_type, &file.name).is_supported() {
            return Err(IntakeError::InvalidType);
        }

        Ok(())
    }
}

impl Default for IntakeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        MAX_UPLOAD_BYTES, PLAIN_TEXT_MEDIA_TYPE, WORD_DOCUMENT_MEDIA_TYPE,
    };
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    const TOO_LARGE_MESSAGE: &str =
        "File is too large. Please select a file smaller than 10MB.";
    const INVALID_TYPE_MESSAGE: &str =
        "Invalid file type. Please upload a .txt or .docx file.";

    fn docx_bytes(text: &str) -> Vec<u8> {
        let docx =
            Docx::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_controller_starts_idle() {
        let controller = IntakeController::new();
        assert!(controller.state().is_idle());
    }

    #[tokio::test]
    async fn test_submit_too_large_fails_without_extraction() {
        // Garbage bytes under a .docx name: if extraction ran, the message
        // would be a parser failure rather than the size message
        let data = vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize];
        let file = IncomingFile::new("huge.docx", WORD_DOCUMENT_MEDIA_TYPE, data);

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;
        assert_eq!(state.error(), Some(TOO_LARGE_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_size_check_runs_before_type_check() {
        let config = IntakeConfig {
            max_file_size: 1024 * 1024,
        };
        let file = IncomingFile::new("photo.png", "image/png", vec![0u8; 1024 * 1024 + 1]);

        let mut controller = IntakeController::with_config(config);
        let state = controller.submit(file).await;
        assert_eq!(
            state.error(),
            Some("File is too large. Please select a file smaller than 1MB.")
        );
    }

    #[tokio::test]
    async fn test_submit_exactly_at_limit_is_accepted() {
        let config = IntakeConfig { max_file_size: 5 };
        let file = IncomingFile::new("notes.txt", PLAIN_TEXT_MEDIA_TYPE, b"12345".to_vec());

        let mut controller = IntakeController::with_config(config);
        let state = controller.submit(file).await;
        assert_eq!(state.file().unwrap().content, "12345");
    }

    #[tokio::test]
    async fn test_submit_unsupported_type_fails() {
        let file = IncomingFile::new("photo.png", "image/png", vec![0x89, 0x50]);

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;
        assert_eq!(state.error(), Some(INVALID_TYPE_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_uppercase_suffix_is_rejected() {
        let file = IncomingFile::new("NOTES.TXT", "", b"shouting".to_vec());

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;
        assert_eq!(state.error(), Some(INVALID_TYPE_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_plain_text_loads_content_verbatim() {
        let content = "line one\nline two\n";
        let file = IncomingFile::new(
            "notes.txt",
            PLAIN_TEXT_MEDIA_TYPE,
            content.as_bytes().to_vec(),
        );

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;

        let loaded = state.file().unwrap();
        assert_eq!(loaded.name, "notes.txt");
        assert_eq!(loaded.size, content.len() as u64);
        assert_eq!(loaded.media_type, PLAIN_TEXT_MEDIA_TYPE);
        assert_eq!(loaded.content, content);
    }

    #[tokio::test]
    async fn test_submit_txt_suffix_without_media_type_loads() {
        // The filename suffix alone is enough; the missing media type must
        // not push the file into the unsupported branch
        let file = IncomingFile::new("notes.txt", "", b"suffix only".to_vec());

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;
        assert_eq!(state.file().unwrap().content, "suffix only");
    }

    #[tokio::test]
    async fn test_submit_docx_loads_body_text() {
        let file = IncomingFile::new(
            "report.docx",
            WORD_DOCUMENT_MEDIA_TYPE,
            docx_bytes("Hello world"),
        );

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;

        let loaded = state.file().unwrap();
        assert_eq!(loaded.name, "report.docx");
        assert!(loaded.content.contains("Hello world"));
    }

    #[tokio::test]
    async fn test_submit_corrupt_docx_fails_with_extraction_message() {
        let file = IncomingFile::new(
            "broken.docx",
            WORD_DOCUMENT_MEDIA_TYPE,
            vec![0x50, 0x4B, 0x03, 0x04, 0x00],
        );

        let mut controller = IntakeController::new();
        let state = controller.submit(file).await;

        let message = state.error().unwrap();
        assert!(!message.is_empty());
        assert_ne!(message, TOO_LARGE_MESSAGE);
        assert_ne!(message, INVALID_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_replaces_previous_result_wholesale() {
        let mut controller = IntakeController::new();

        controller
            .submit(IncomingFile::new(
                "first.txt",
                PLAIN_TEXT_MEDIA_TYPE,
                b"first".to_vec(),
            ))
            .await;
        controller
            .submit(IncomingFile::new(
                "second.txt",
                PLAIN_TEXT_MEDIA_TYPE,
                b"second".to_vec(),
            ))
            .await;

        let loaded = controller.state().file().unwrap();
        assert_eq!(loaded.name, "second.txt");
        assert_eq!(loaded.content, "second");
    }

    #[tokio::test]
    async fn test_submit_after_failure_can_load() {
        let mut controller = IntakeController::new();

        controller
            .submit(IncomingFile::new("photo.png", "image/png", vec![1]))
            .await;
        assert!(controller.state().error().is_some());

        controller.reset();
        let state = controller
            .submit(IncomingFile::new(
                "notes.txt",
                PLAIN_TEXT_MEDIA_TYPE,
                b"recovered".to_vec(),
            ))
            .await;
        assert_eq!(state.file().unwrap().content, "recovered");
    }

    #[tokio::test]
    async fn test_reset_from_every_state_yields_idle() {
        let mut controller = IntakeController::new();

        // Idle
        controller.reset();
        assert!(controller.state().is_idle());

        // Loaded
        controller
            .submit(IncomingFile::new(
                "notes.txt",
                PLAIN_TEXT_MEDIA_TYPE,
                b"text".to_vec(),
            ))
            .await;
        controller.reset();
        assert!(controller.state().is_idle());

        // Failed
        controller
            .submit(IncomingFile::new("photo.png", "image/png", vec![1]))
            .await;
        controller.reset();
        assert!(controller.state().is_idle());
        assert!(controller.state().file().is_none());
        assert!(controller.state().error().is_none());
    }

    #[tokio::test]
    async fn test_submit_selection_uses_first_file_only() {
        let files = vec![
            IncomingFile::new("first.txt", PLAIN_TEXT_MEDIA_TYPE, b"first".to_vec()),
            IncomingFile::new("second.txt", PLAIN_TEXT_MEDIA_TYPE, b"second".to_vec()),
        ];

        let mut controller = IntakeController::new();
        let state = controller.submit_selection(files).await;
        assert_eq!(state.file().unwrap().name, "first.txt");
    }

    #[tokio::test]
    async fn test_submit_selection_empty_is_noop() {
        let mut controller = IntakeController::new();
        let state = controller.submit_selection(vec![]).await;
        assert!(state.is_idle());
    }

    #[test]
    fn test_intake_error_messages() {
        let too_large = IntakeError::TooLarge {
            size: MAX_UPLOAD_BYTES + 1,
            limit: MAX_UPLOAD_BYTES,
        };
        assert_eq!(too_large.to_string(), TOO_LARGE_MESSAGE);
        assert_eq!(IntakeError::InvalidType.to_string(), INVALID_TYPE_MESSAGE);
        assert_eq!(
            IntakeError::Extraction("parser said no".to_string()).to_string(),
            "parser said no"
        );
    }
}
