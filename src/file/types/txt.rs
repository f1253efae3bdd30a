use crate::file::{FileKind, TextSource};
use crate::models::IncomingFile;
use anyhow::Result;
use async_trait::async_trait;

/// Plain text file handler
pub struct TxtFile {
    file: IncomingFile,
}

impl TxtFile {
    pub fn new(file: IncomingFile) -> Self {
        Self { file }
    }
}

#[async_trait]
impl TextSource for TxtFile {
    async fn to_text_impl(&self) -> Result<String> {
        // Invalid sequences degrade to replacement characters instead of
        // failing, matching platform text decoding
        match String::from_utf8(self.file.data.clone()) {
            Ok(text) => Ok(text),
            Err(err) => Ok(String::from_utf8_lossy(err.as_bytes()).into_owned()),
        }
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
        FileKind::PlainText
    }
}
