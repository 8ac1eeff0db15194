//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! binary-level `AppError`, so functions can simply return `Result<T>`.
use crate::error::AppError;

/// Workspace-wide `Result` alias with `AppError` as the default error.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
