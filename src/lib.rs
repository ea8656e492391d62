//! homelab: trigger Dokploy deployments and scaffold deployment boilerplate.

pub mod domain;
pub mod ports;
pub mod services;

use std::env;
use std::path::Path;

use ports::DeployClient;
use services::{HttpDeployClient, scaffold_assets, scaffold_filesystem};

pub use domain::{AppError, ConfigError, ConfigField, DeployConfig, DeployOverrides};

/// Trigger a deployment for the application resolved from CLI flag overrides
/// and the `DOKPLOY_*` environment variables.
pub fn trigger_deploy(overrides: &DeployOverrides) -> Result<(), AppError> {
    let config = DeployConfig::from_sources(overrides, |var| env::var(var).ok())
        .map_err(AppError::InvalidDeployConfig)?;

    let client = HttpDeployClient::new()?;
    client.trigger_deployment(&config)?;

    println!("Deployment triggered successfully");
    Ok(())
}

/// Generate the static site Docker scaffold in the current working directory.
pub fn scaffold_docker_static() -> Result<(), AppError> {
    let cwd = env::current_dir()?;
    scaffold_docker_static_in(&cwd)
}

/// Generate the static site Docker scaffold in `dest_dir`.
///
/// Aborts without writing anything if any target file already exists.
pub fn scaffold_docker_static_in(dest_dir: &Path) -> Result<(), AppError> {
    let bundle = scaffold_assets::static_site_bundle();
    let written = scaffold_filesystem::write_bundle(dest_dir, &bundle)?;

    for path in &written {
        println!("Copying template file to {}", path.display());
    }
    println!("Static Docker scaffold generated successfully.");
    Ok(())
}
