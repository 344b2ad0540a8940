//! Error types for template resolution and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while locating or rendering a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing template reference for '{key}'")]
    InvalidReference { key: String },

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Template rendering failed: {0}")]
    RenderingFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
