//! Port definitions decoupling the CLI flows from concrete I/O.

mod deploy_client;

pub use deploy_client::DeployClient;
