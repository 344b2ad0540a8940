//! Error types for the core module.

use std::path::PathBuf;

use thiserror::Error;

use strata_templates::TemplateError;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or materializing a tree.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration at '{path}': {message}")]
    StructuralAmbiguity { path: String, message: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {}: {message}", .path.display())]
    RenderFailure { path: PathBuf, message: String },

    #[error("Unsupported configuration format: {} (expected .json, .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    pub(crate) fn ambiguity(path: &[String], message: impl Into<String>) -> Self {
        CoreError::StructuralAmbiguity {
            path: if path.is_empty() {
                "<root>".to_string()
            } else {
                path.join("/")
            },
            message: message.into(),
        }
    }

    /// Whether this error is raised while building, before anything touches disk.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CoreError::StructuralAmbiguity { .. }
                | CoreError::Template(TemplateError::InvalidReference { .. })
                | CoreError::Template(TemplateError::TemplateNotFound(_))
        )
    }
}
