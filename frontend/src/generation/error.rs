use thiserror::Error;

/// Failure talking to the generation service.
///
/// The page treats every variant the same way (no download), but keeping them
/// apart lets a caller tell a rejected upload from an unreachable server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not read response body from {url}: {message}")]
    Body { url: String, message: String },
    #[error("could not encode multipart body: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("browser window or document unavailable")]
    NoDocument,
    #[error("could not create download link: {0}")]
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}
