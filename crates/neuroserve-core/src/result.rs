//! Convenience result type alias for NeuroServe.

use crate::error::AppError;

/// A specialized `Result` type for NeuroServe operations.
pub type AppResult<T> = Result<T, AppError>;
