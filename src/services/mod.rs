//! Concrete service implementations backing the CLI flows.

mod deploy_client_http;
pub mod scaffold_assets;
pub mod scaffold_filesystem;

pub use deploy_client_http::HttpDeployClient;
