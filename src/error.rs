use std::path::PathBuf;

use thiserror::Error;

use crate::task_id::{TaskId, TaskIdGenerationError, TaskIdParseError};

#[derive(Debug, Error)]
pub enum TickError {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    #[error("storage file is not a valid task collection: {0}")]
    Format(#[from] serde_json::Error),

    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid task id: {0}")]
    InvalidTaskId(#[from] TaskIdParseError),

    #[error("failed to generate task id: {0}")]
    IdGeneration(#[from] TaskIdGenerationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TickError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "validation_error",
            Self::TaskNotFound(_) => "not_found",
            Self::Format(_) => "format_error",
            Self::Persist { .. } => "persist_error",
            Self::InvalidTaskId(_) => "invalid_task_id",
            Self::IdGeneration(_) => "id_generation_error",
            Self::Io(_) => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TickError>;
