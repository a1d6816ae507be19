use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build engine client: {0}")]
    Client(reqwest::Error),

    #[error("Engine request to {0} failed: {1}")]
    Request(String, reqwest::Error),

    #[error("Engine request to {0} returned status {1}")]
    Status(String, reqwest::StatusCode),

    #[error("Failed to decode engine response from {0}: {1}")]
    Decode(String, reqwest::Error),

    #[error(transparent)]
    Config(cask_domain::Error),
}

pub type Result<A> = std::result::Result<A, Error>;
