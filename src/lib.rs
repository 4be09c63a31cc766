pub mod config;
pub mod copy;
pub mod errors;
pub mod formatter;
pub mod logger;
pub mod patterns;
pub mod prompt;
pub mod reporting;
pub mod templates;
pub mod trie;
pub mod walker;

pub use copy::copy_files_content;
pub use errors::GrabError;
