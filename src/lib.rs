pub mod config;
pub mod constants;
pub mod file;
pub mod intake;
pub mod models;
pub mod utils;

pub use config::{Config, IntakeConfig};
pub use file::{FileFactory, FileKind, TextSource};
pub use intake::{IntakeController, IntakeError, UploadState};
pub use models::{IncomingFile, UploadedFile};
