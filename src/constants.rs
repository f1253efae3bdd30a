/// Default maximum accepted upload size in bytes (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Media type reported for plain text files
pub const PLAIN_TEXT_MEDIA_TYPE: &str = "text/plain";

/// Media type reported for Word XML documents
pub const WORD_DOCUMENT_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Filename suffix for plain text files (matched case-sensitively)
pub const TXT_SUFFIX: &str = ".txt";

/// Filename suffix for Word documents (matched case-sensitively)
pub const DOCX_SUFFIX: &str = ".docx";

/// Suffixes advertised to file pickers; intake validation stays authoritative
pub const ACCEPTED_SUFFIXES: &[&str] = &[TXT_SUFFIX, DOCX_SUFFIX];

/// Message shown when extraction is attempted on an unsupported file
pub const UNSUPPORTED_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload a .txt or .docx file.";

/// Fallback message for extraction failures that carry no description
pub const EXTRACTION_FALLBACK_MESSAGE: &str =
    "Something went wrong while reading the file. Please try again.";
