//! Engine error types.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Frinkiac error: {0}")]
    Frinkiac(#[from] homer_frinkiac::FrinkiacError),

    #[error("Text generation error: {0}")]
    Generation(#[from] homer_llm::LlmError),

    #[error("Malformed generation output: {0}")]
    Malformed(String),
}
