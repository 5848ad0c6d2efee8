//! REST API module.
//!
//! Contains all API routes and handlers for the caller-facing employee surface.

mod employees;

pub use employees::*;

use axum::Json;

use crate::errors::AppError;

/// Response type for all handlers: a bare JSON payload or a typed error.
pub type ApiResult<T> = Result<Json<T>, AppError>;
