use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrabError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("Regex Error: {0}")]
    RegexError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No project configuration found: {0}")]
    NoProjectConfig(String),

    #[error("Missing input: {0}")]
    MissingInput(String),
}

impl From<std::io::Error> for GrabError {
    fn from(err: std::io::Error) -> Self {
        GrabError::IoError(err.to_string())
    }
}

impl From<regex::Error> for GrabError {
    fn from(err: regex::Error) -> Self {
        GrabError::RegexError(err.to_string())
    }
}
