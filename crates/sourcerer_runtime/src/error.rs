use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Debounce delays must be non-negative.
    #[error("invalid debounce delay: {0}ms")]
    InvalidDelay(i64),

    #[error(transparent)]
    Llm(#[from] sourcerer_llms::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
