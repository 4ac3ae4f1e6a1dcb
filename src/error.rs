use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two elements had no ordering relative to each other (e.g. a NaN).
    #[error("elements at positions {left} and {right} are not comparable")]
    Incomparable { left: usize, right: usize },

    #[error("unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type SortResult<T> = Result<T, SortError>;
