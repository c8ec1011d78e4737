use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_BIND: &str = "0.0.0.0:5055";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUCCESS_RATE: f64 = 0.75;
const DEFAULT_PROGRAM: &str = "pwsh";
const DEFAULT_SCRIPT_DIR: &str = "scripts";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ticketing: TicketingConfig,
    pub remediation: RemediationMode,
    pub bind_addr: SocketAddr,
}

/// Credentials and transport settings for the ticketing backend.
///
/// Every credential is optional; the client reports a missing value per
/// request instead of refusing to start.
#[derive(Debug, Clone)]
pub struct TicketingConfig {
    pub instance: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            instance: None,
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemediationMode {
    Simulated { success_rate: f64 },
    Command { program: String, script_dir: PathBuf },
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout_secs = match read("TICKETING_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|err| {
                AppError::Configuration(format!("invalid TICKETING_TIMEOUT_SECS '{raw}': {err}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let ticketing = TicketingConfig {
            instance: read("SN_INSTANCE"),
            username: read("SN_USER"),
            password: read("SN_PASSWORD"),
            timeout: Duration::from_secs(timeout_secs),
        };

        let mode = read("REMEDIATION_MODE").unwrap_or_else(|| "simulated".to_string());
        let remediation = match mode.to_lowercase().as_str() {
            "simulated" => {
                let success_rate = match read("REMEDIATION_SUCCESS_RATE") {
                    Some(raw) => raw.parse::<f64>().map_err(|err| {
                        AppError::Configuration(format!(
                            "invalid REMEDIATION_SUCCESS_RATE '{raw}': {err}"
                        ))
                    })?,
                    None => DEFAULT_SUCCESS_RATE,
                };
                if !success_rate.is_finite() {
                    return Err(AppError::Configuration(format!(
                        "REMEDIATION_SUCCESS_RATE must be a finite number, got {success_rate}"
                    )));
                }
                RemediationMode::Simulated { success_rate }
            }
            "command" => RemediationMode::Command {
                program: read("REMEDIATION_PROGRAM").unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
                script_dir: read("REMEDIATION_SCRIPT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_DIR)),
            },
            other => {
                return Err(AppError::Configuration(format!(
                    "unknown REMEDIATION_MODE '{other}' (expected 'simulated' or 'command')"
                )));
            }
        };

        let bind = read("ACTIONS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|err| {
            AppError::Configuration(format!("invalid ACTIONS_BIND '{bind}': {err}"))
        })?;

        Ok(Self {
            ticketing,
            remediation,
            bind_addr,
        })
    }
}
