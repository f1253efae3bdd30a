use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils;

/// A file as handed over by the selection surface: the platform-reported
/// name, size, and media type plus the raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    /// Original filename as reported by the platform
    pub name: String,
    /// Byte count
    pub size: u64,
    /// Platform-reported content type; may be empty and is advisory only
    pub media_type: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl IncomingFile {
    /// Create an IncomingFile from already-loaded bytes
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            size: data.len() as u64,
            media_type: media_type.into(),
            data,
        }
    }

    /// Read a file from disk, filling the media type from the filename
    /// suffix the way a file picker would report it
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_default();
        let media_type = utils::media_type_for_name(&name);

        Ok(Self::new(name, media_type, data))
    }
}

/// Extracted document, immutable once constructed; replaced wholesale on
/// each new upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original filename as reported by the platform
    pub name: String,
    /// Byte count of the source file
    pub size: u64,
    /// Platform-reported content type of the source file
    pub media_type: String,
    /// Extracted text (may be empty)
    pub content: String,
}

impl UploadedFile {
    /// Create a new UploadedFile instance
    pub fn new(
        name: impl Into<String>,
        size: u64,
        media_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            content: content.into(),
        }
    }
}
