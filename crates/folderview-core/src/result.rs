//! Convenience result type alias for FolderView.

use crate::error::AppError;

/// A specialized `Result` type for FolderView operations.
pub type AppResult<T> = Result<T, AppError>;
