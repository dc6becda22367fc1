use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("store error: {0}")]
    Store(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<surrealdb::Error> for RepositoryError {
    fn from(error: surrealdb::Error) -> Self {
        RepositoryError::Store(error.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
