use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("max_chars must be a positive number of characters")]
    InvalidBudget,
}

pub type Result<T> = std::result::Result<T, PreprocessError>;
