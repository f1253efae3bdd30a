use crate::constants::UNSUPPORTED_TYPE_MESSAGE;
use crate::file::{FileKind, TextSource};
use crate::models::IncomingFile;
use anyhow::Result;
use async_trait::async_trait;

/// Fallback handler for files that match neither accepted format;
/// extraction always fails
pub struct UnsupportedFile {
    file: IncomingFile,
}

impl UnsupportedFile {
    pub fn new(file: IncomingFile) -> Self {
        Self { file }
    }
}

#[async_trait]
impl TextSource for UnsupportedFile {
    async fn to_text_impl(&self) -> Result<String> {
        anyhow::bail!(UNSUPPORTED_TYPE_MESSAGE)
    }

    fn data(&self) -> &[u8] {
        &self.file.data
    }

    fn name(&self) -> &str {
        &self.file.name
    }

    fn media_type(&self) -> &str {
        &self.file.media_type
    }

    fn kind(&self) -> FileKind {
        FileKind::Unsupported
    }
}
