use crate::constants::{
    DOCX_SUFFIX, PLAIN_TEXT_MEDIA_TYPE, TXT_SUFFIX, WORD_DOCUMENT_MEDIA_TYPE,
};
use crate::file::types::{DocxFile, TxtFile, UnsupportedFile};
use crate::file::TextSource;
use crate::models::IncomingFile;
use std::fmt;
use std::sync::Arc;

/// Document format, computed once from the declared media type and the
/// filename, then matched exhaustively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    WordDocument,
    Unsupported,
}

impl FileKind {
    /// Detect the format of a file. A known media type wins; the filename
    /// suffix is the fallback since platforms report media types
    /// unreliably. Suffix matching is case-sensitive.
    pub fn detect(media_type: &str, name: &str) -> Self {
        if media_type == PLAIN_TEXT_MEDIA_TYPE {
            FileKind::PlainText
        } else if media_type == WORD_DOCUMENT_MEDIA_TYPE || name.ends_with(DOCX_SUFFIX) {
            FileKind::WordDocument
        } else if name.ends_with(TXT_SUFFIX) {
            FileKind::PlainText
        } else {
            FileKind::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FileKind::Unsupported)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileKind::PlainText => "plain text",
            FileKind::WordDocument => "Word document",
            FileKind::Unsupported => "unsupported",
        };
        write!(f, "{}", label)
    }
}

/// Factory for creating TextSource instances based on the detected format
pub struct FileFactory;

impl FileFactory {
    /// Create a TextSource for the file's detected format
    pub fn create(file: IncomingFile) -> Arc<dyn TextSource> {
        match FileKind::detect(&file.media_type, &file.name) {
            FileKind::PlainText => Arc::new(TxtFile::new(file)),
            FileKind::WordDocument => Arc::new(DocxFile::new(file)),
            FileKind::Unsupported => Arc::new(UnsupportedFile::new(file)),
        }
    }
}
