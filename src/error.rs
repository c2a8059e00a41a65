use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid output format: {0} (expected \"text\" or \"json\")")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
