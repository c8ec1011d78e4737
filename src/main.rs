mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod host;
mod infra;
mod services;
#[cfg(test)]
mod testing;
mod workflow;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::remediate::{self, RemediateCommandArgs};
use crate::cmd::serve;
use crate::cmd::ticket::{self, TicketCommandArgs};
use crate::config::{AppConfig, RemediationMode};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::scripts::{CommandTrigger, SimulatedTrigger};
use crate::infra::servicenow::ServiceNowClient;
use crate::services::RemediationTrigger;

#[derive(Parser)]
#[command(
    name = "helpdesk-actions",
    author,
    version,
    about = "Remediation and ticketing actions for the helpdesk assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the action server the dialogue host calls into.
    Serve(ServeArgs),
    /// Run a remediation once, filing a ticket if it fails.
    Remediate(RemediateArgs),
    /// File a ticket for a request no remediation covers.
    Ticket(TicketArgs),
    /// Inspect configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Override the bind address from ACTIONS_BIND.
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[derive(Args)]
struct RemediateArgs {
    /// Remediation to run, e.g. fix-printer or reset-password.
    remediation_id: String,
    /// Requesting user.
    #[arg(short, long)]
    user: String,
}

#[derive(Args)]
struct TicketArgs {
    /// The user's request, verbatim.
    query: String,
    /// Requesting user.
    #[arg(short, long)]
    user: String,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command, &config),
        Commands::Serve(args) => {
            let bind_addr = args.bind.unwrap_or(config.bind_addr);
            let context = build_context(&config)?;
            serve::run(context, bind_addr).await
        }
        Commands::Remediate(args) => {
            let context = build_context(&config)?;
            remediate::run(
                &context,
                RemediateCommandArgs {
                    remediation_id: args.remediation_id,
                    user: args.user,
                },
            )
            .await
        }
        Commands::Ticket(args) => {
            let context = build_context(&config)?;
            ticket::run(
                &context,
                TicketCommandArgs {
                    query: args.query,
                    user: args.user,
                },
            )
            .await;
            Ok(())
        }
    }
}

fn build_context(config: &AppConfig) -> AppResult<AppContext> {
    let ticketing = &config.ticketing;
    if ticketing.instance.is_none() {
        warn!("SN_INSTANCE not configured; tickets will report a config error");
    }
    if ticketing.username.is_none() {
        warn!("SN_USER not configured; tickets will report a config error");
    }
    if ticketing.password.is_none() {
        warn!("SN_PASSWORD not configured; tickets will report a config error");
    }

    let remediation: Arc<dyn RemediationTrigger> = match &config.remediation {
        RemediationMode::Simulated { success_rate } => {
            Arc::new(SimulatedTrigger::new(*success_rate))
        }
        RemediationMode::Command {
            program,
            script_dir,
        } => Arc::new(CommandTrigger::new(program.clone(), script_dir.clone())),
    };
    let ticketing = Arc::new(ServiceNowClient::new(ticketing.clone())?);

    Ok(AppContext::new(remediation, ticketing))
}
