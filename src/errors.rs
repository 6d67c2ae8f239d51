use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to fetch {0}: no attempts performed")]
    AttemptsExhausted(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
