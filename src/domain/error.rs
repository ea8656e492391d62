use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ConfigError;

/// Library-wide error type for homelab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Deploy configuration is missing or malformed.
    #[error("{}", join_lines(.0))]
    InvalidDeployConfig(Vec<ConfigError>),

    /// HTTP client construction failed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// The request never produced an HTTP response.
    #[error("Request to {url} failed: {details}")]
    Transport { url: String, details: String },

    /// The deployment API answered with a non-success status.
    #[error(
        "Failed to trigger deployment for application '{application_id}': HTTP {status} {status_text}{}",
        format_body(.body)
    )]
    DeployFailed {
        application_id: String,
        status: u16,
        status_text: String,
        body: Option<serde_json::Value>,
    },

    /// Scaffold target file already exists.
    #[error("File \"{}\" already exists.", .0.display())]
    DestinationConflict(PathBuf),

    /// `scaffold docker` was invoked without selecting a template bundle.
    #[error("No options provided.")]
    NoBundleSelected,
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidDeployConfig(_) | AppError::NoBundleSelected => {
                io::ErrorKind::InvalidInput
            }
            AppError::HttpClient(_) | AppError::Transport { .. } | AppError::DeployFailed { .. } => {
                io::ErrorKind::Other
            }
            AppError::DestinationConflict(_) => io::ErrorKind::AlreadyExists,
        }
    }
}

fn join_lines(errors: &[ConfigError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

fn format_body(body: &Option<serde_json::Value>) -> String {
    match body {
        Some(value) => format!(" (response: {value})"),
        None => String::new(),
    }
}
