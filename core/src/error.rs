use crate::types::QuarterIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("History is empty: the seed quarter must exist before step()")]
    EmptyHistory,

    #[error("History is not monotonic at position {position}: expected quarter {expected}, got {actual}")]
    NonMonotonicHistory {
        position: usize,
        expected: QuarterIndex,
        actual: QuarterIndex,
    },

    #[error("Game over: the {horizon}-quarter horizon has been played out")]
    GameOver { horizon: QuarterIndex },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
