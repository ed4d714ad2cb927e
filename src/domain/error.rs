use thiserror::Error;

/// Failures raised by the in-memory board and its supporting layers.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("card {0} not found")]
    CardNotFound(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("card title cannot be empty")]
    EmptyTitle,

    #[error("invalid due date {0:?}, expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("invalid card color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown assignee: {0}")]
    UnknownAssignee(String),

    #[error("invalid board configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
