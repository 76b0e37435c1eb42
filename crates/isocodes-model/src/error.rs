use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid sort key '{value}': expected <length>:<code>")]
    InvalidSortKey { value: String },
    #[error("invalid sort key length '{value}'")]
    InvalidLength { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
