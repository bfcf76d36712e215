use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid id: {0}")]
    InvalidId(#[from] uuid::Error),
}
