use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backend refused the request. The response body may carry a
    /// user-facing message; when it does not, nothing is shown.
    #[error("Request rejected by the backend")]
    Rejected { message: Option<String> },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
