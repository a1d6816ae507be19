use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid engine host '{0}': {1}")]
    InvalidHost(String, url::ParseError),

    #[error("Unsupported engine host scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Completion timeout must be greater than zero")]
    NonPositiveTimeout,

    #[error("Failed to parse completion timeout: {0}")]
    MalformedTimeout(String),
}

pub type Result<A> = std::result::Result<A, Error>;
