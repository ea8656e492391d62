use clap::{Args, Parser, Subcommand};
use homelab::{AppError, DeployOverrides};

#[derive(Parser)]
#[command(name = "homelab")]
#[command(version)]
#[command(
    about = "Trigger Dokploy deployments and scaffold deployment boilerplate",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deployment management commands
    Deploy {
        #[command(subcommand)]
        command: DeployCommands,
    },
    /// Generate deployment boilerplate from bundled templates
    Scaffold {
        #[command(subcommand)]
        command: ScaffoldCommands,
    },
}

#[derive(Subcommand)]
enum DeployCommands {
    /// Trigger a deployment for a Dokploy application
    Trigger(TriggerArgs),
}

#[derive(Args)]
struct TriggerArgs {
    /// Application ID to deploy (required if DOKPLOY_APP_ID not set)
    #[arg(long)]
    app_id: Option<String>,
    /// Dokploy server URL (required if DOKPLOY_SERVER_DOMAIN not set)
    #[arg(long)]
    server_domain: Option<String>,
    /// Dokploy API key (required if DOKPLOY_API_KEY not set)
    #[arg(long)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum ScaffoldCommands {
    /// Generate Docker deployment files
    Docker {
        /// Generate the bundle for a static site served by nginx
        #[arg(long)]
        r#static: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Deploy { command: DeployCommands::Trigger(args) } => {
            let overrides = DeployOverrides {
                app_id: args.app_id,
                server_domain: args.server_domain,
                api_key: args.api_key,
            };
            homelab::trigger_deploy(&overrides)
        }
        Commands::Scaffold { command: ScaffoldCommands::Docker { r#static } } => {
            if r#static {
                homelab::scaffold_docker_static()
            } else {
                Err(AppError::NoBundleSelected)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(hint) = usage_hint(&e) {
            eprintln!("Run '{hint}' for usage.");
        }
        std::process::exit(1);
    }
}

/// Point the user at the relevant help screen for input errors.
fn usage_hint(error: &AppError) -> Option<&'static str> {
    match error {
        AppError::InvalidDeployConfig(_) => Some("homelab deploy trigger --help"),
        AppError::NoBundleSelected => Some("homelab scaffold docker --help"),
        _ => None,
    }
}
