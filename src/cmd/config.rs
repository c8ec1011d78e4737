use clap::{Args, Subcommand};

use crate::config::{AppConfig, RemediationMode};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand, config: &AppConfig) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            run_show(config);
            Ok(())
        }
    }
}

fn run_show(cfg: &AppConfig) {
    println!("Ticketing instance: {}", display_value(&cfg.ticketing.instance));
    println!("Ticketing user: {}", display_value(&cfg.ticketing.username));
    println!("Ticketing password: {}", mask_secret(&cfg.ticketing.password));
    println!("Ticketing timeout: {}s", cfg.ticketing.timeout.as_secs());
    match &cfg.remediation {
        RemediationMode::Simulated { success_rate } => {
            println!("Remediation mode: simulated (success rate {success_rate})")
        }
        RemediationMode::Command {
            program,
            script_dir,
        } => println!(
            "Remediation mode: command ({program}, scripts in {})",
            script_dir.display()
        ),
    }
    println!("Action server bind: {}", cfg.bind_addr);
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(secret) if secret.chars().count() > 6 => {
            let chars = secret.chars().collect::<Vec<_>>();
            let prefix = chars[..3].iter().collect::<String>();
            let suffix = chars[chars.len() - 3..].iter().collect::<String>();
            format!("{prefix}***{suffix}")
        }
        Some(secret) if !secret.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
