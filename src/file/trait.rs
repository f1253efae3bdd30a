use crate::file::FileKind;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for extracting the text content of an uploaded document
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Extract text from the raw bytes (internal implementation)
    async fn to_text_impl(&self) -> Result<String>;

    /// Extract text from the raw bytes (public API with empty-input check)
    async fn to_text(&self) -> Result<String> {
        // An empty file has nothing to decode, whatever its declared format
        if self.data().is_empty() {
            return Ok(String::new());
        }

        self.to_text_impl().await
    }

    /// Extract format-specific details (counts, structure, etc.)
    async fn to_metadata(&self) -> Result<Option<Value>> {
        Ok(None)
    }

    /// Raw bytes of the file
    fn data(&self) -> &[u8];

    /// Original filename as reported by the platform
    fn name(&self) -> &str;

    /// Platform-reported media type
    fn media_type(&self) -> &str;

    /// The format this source was created for
    fn kind(&self) -> FileKind;
}
