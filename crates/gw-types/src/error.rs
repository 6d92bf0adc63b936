use thiserror::Error;

#[derive(Error, Debug)]
pub enum GwError {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Coordinate error: {0}")]
    Coordinate(String),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Array codec error: {0}")]
    Npy(String),
}

pub type GwResult<T> = Result<T, GwError>;
