use thiserror::Error;

use crate::model::task::TaskId;

/// Recoverable failures of store operations and console input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid selection: '{0}'")]
    InvalidSelection(String),

    #[error("Ambiguous selection: '{0}' matches {1:?}")]
    AmbiguousSelection(String, Vec<String>),

    #[error("No tasks to delete")]
    EmptyStore,

    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("No task ids left to assign")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, StoreError>;
