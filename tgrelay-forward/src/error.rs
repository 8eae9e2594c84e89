#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

pub type ForwardResult<T> = Result<T, ForwardError>;
