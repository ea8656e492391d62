//! Deployment API client port definition.

use crate::domain::{AppError, DeployConfig};

/// Port for the Dokploy deployment API.
pub trait DeployClient {
    /// Trigger a deployment for the configured application.
    ///
    /// Exactly one attempt; any non-success outcome is terminal.
    fn trigger_deployment(&self, config: &DeployConfig) -> Result<(), AppError>;
}
