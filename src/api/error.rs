use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),

    /// The server answered `{"success": 0}`. The dashboard treats this as a
    /// no-op and keeps whatever it rendered last.
    #[error("server reported failure")]
    Unsuccessful,

    #[error("successful response missing its data payload")]
    MissingData,
}

impl ApiError {
    pub fn is_unsuccessful(&self) -> bool {
        matches!(self, ApiError::Unsuccessful)
    }
}
