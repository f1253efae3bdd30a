pub mod docx;
pub mod txt;
pub mod unsupported;

pub use docx::DocxFile;
pub use txt::TxtFile;
pub use unsupported::UnsupportedFile;
