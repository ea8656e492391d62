//! Core types for deploy configuration and error handling.

mod deploy_config;
mod error;

pub use deploy_config::{ConfigError, ConfigField, DeployConfig, DeployOverrides, resolve};
pub use error::AppError;
