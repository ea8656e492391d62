//! Deploy configuration resolution and validation.
//!
//! Values come from CLI flags with environment-variable fallback; the
//! precedence rule lives in [`resolve`] so it can be tested in isolation.

use thiserror::Error;
use url::Url;

/// Fixed endpoint path on the Dokploy server.
const DEPLOY_PATH: &str = "/api/application.deploy";

/// A required deploy configuration field and its two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    AppId,
    ServerDomain,
    ApiKey,
}

impl ConfigField {
    /// Human-readable field name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::AppId => "Application ID",
            ConfigField::ServerDomain => "Server domain",
            ConfigField::ApiKey => "API key",
        }
    }

    /// CLI flag that supplies this field.
    pub fn flag(&self) -> &'static str {
        match self {
            ConfigField::AppId => "--app-id",
            ConfigField::ServerDomain => "--server-domain",
            ConfigField::ApiKey => "--api-key",
        }
    }

    /// Environment variable that supplies this field when the flag is absent.
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigField::AppId => "DOKPLOY_APP_ID",
            ConfigField::ServerDomain => "DOKPLOY_SERVER_DOMAIN",
            ConfigField::ApiKey => "DOKPLOY_API_KEY",
        }
    }
}

/// Field-level validation error for the deploy configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "{} is required. Provide it via {} flag or {} environment variable.",
        .0.label(),
        .0.flag(),
        .0.env_var()
    )]
    Missing(ConfigField),

    #[error("Server domain '{value}' is not a valid URL: {details}")]
    InvalidServerDomain { value: String, details: String },
}

/// Raw flag values captured from the CLI before environment fallback.
#[derive(Debug, Clone, Default)]
pub struct DeployOverrides {
    pub app_id: Option<String>,
    pub server_domain: Option<String>,
    pub api_key: Option<String>,
}

/// Validated configuration for one deploy-trigger invocation.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub application_id: String,
    pub server_domain: Url,
    pub api_key: String,
}

/// Apply flag-over-environment precedence for one field.
///
/// Values are trimmed; a value that is empty after trimming counts as absent,
/// so an empty flag still falls back to the environment variable.
pub fn resolve(flag: Option<&str>, env: Option<&str>) -> Option<String> {
    let pick = |value: Option<&str>| {
        value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    };
    pick(flag).or_else(|| pick(env))
}

impl DeployConfig {
    /// Resolve and validate the configuration from flags and an environment
    /// lookup, collecting every field-level error rather than stopping at
    /// the first.
    pub fn from_sources<F>(overrides: &DeployOverrides, env: F) -> Result<Self, Vec<ConfigError>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        let application_id =
            resolve(overrides.app_id.as_deref(), env(ConfigField::AppId.env_var()).as_deref());
        if application_id.is_none() {
            errors.push(ConfigError::Missing(ConfigField::AppId));
        }

        let server_domain = match resolve(
            overrides.server_domain.as_deref(),
            env(ConfigField::ServerDomain.env_var()).as_deref(),
        ) {
            None => {
                errors.push(ConfigError::Missing(ConfigField::ServerDomain));
                None
            }
            Some(raw) => match parse_server_domain(&raw) {
                Ok(url) => Some(url),
                Err(error) => {
                    errors.push(error);
                    None
                }
            },
        };

        let api_key =
            resolve(overrides.api_key.as_deref(), env(ConfigField::ApiKey.env_var()).as_deref());
        if api_key.is_none() {
            errors.push(ConfigError::Missing(ConfigField::ApiKey));
        }

        match (application_id, server_domain, api_key) {
            (Some(application_id), Some(server_domain), Some(api_key)) if errors.is_empty() => {
                Ok(DeployConfig { application_id, server_domain, api_key })
            }
            _ => Err(errors),
        }
    }

    /// Deployment endpoint derived from the server domain.
    ///
    /// Matches `new URL("/api/application.deploy", base)` semantics: the
    /// absolute path replaces whatever path the base carried.
    pub fn endpoint_url(&self) -> Url {
        let mut url = self.server_domain.clone();
        url.set_path(DEPLOY_PATH);
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

fn parse_server_domain(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidServerDomain {
        value: raw.to_string(),
        details: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidServerDomain {
            value: raw.to_string(),
            details: "URL must include a scheme and host".to_string(),
        });
    }

    Ok(url)
}
