use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type GenResult<T> = Result<T, GenError>;
