use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(#[from] rand::Error),

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
