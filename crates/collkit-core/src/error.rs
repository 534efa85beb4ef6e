use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollkitError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

pub type Result<T> = std::result::Result<T, CollkitError>;
