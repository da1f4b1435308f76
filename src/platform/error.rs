use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("invalid platform url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("platform returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode platform response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("platform rejected request (code {code}): {message}")]
    Rejected { code: i64, message: String },
}
