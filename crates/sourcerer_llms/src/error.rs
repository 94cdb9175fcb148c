use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured. Checked before any request goes out.
    #[error("missing API key for {0}")]
    MissingApiKey(String),

    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// The endpoint answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response JSON matched none of the known content paths.
    #[error("unexpected response shape from provider")]
    UnexpectedResponseShape,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
