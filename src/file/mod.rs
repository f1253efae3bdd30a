pub mod factory;
pub mod r#trait;
pub mod types;

pub use factory::{FileFactory, FileKind};
pub use r#trait::TextSource;
pub use types::{DocxFile, TxtFile, UnsupportedFile};
