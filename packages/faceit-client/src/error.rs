use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaceitError>;

#[derive(Debug, Error)]
pub enum FaceitError {
    /// Connection failure, timeout, or an undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Data API.
    #[error("FACEIT API error ({status}): {message}")]
    Api { status: u16, message: String },
}
