use thiserror::Error;

/// Inbound frame that could not be decoded into an event.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("missing scheme in `{0}`")]
    MissingScheme(String),
    #[error("unsupported scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("missing host in `{0}`")]
    MissingHost(String),
}
