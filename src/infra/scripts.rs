use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::domain::remediation::{RemediationKind, RemediationOutcome};
use crate::services::RemediationTrigger;

/// Demo backend that reports success with a fixed probability.
pub struct SimulatedTrigger {
    success_rate: f64,
}

impl SimulatedTrigger {
    /// NaN is treated as a rate of zero.
    pub fn new(success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self { success_rate }
    }
}

#[async_trait]
impl RemediationTrigger for SimulatedTrigger {
    async fn trigger(&self, kind: RemediationKind, user_id: &str) -> RemediationOutcome {
        info!(script = kind.script(), %user_id, "simulating remediation script");
        if rand::random::<f64>() < self.success_rate {
            RemediationOutcome::Succeeded
        } else {
            RemediationOutcome::Failed
        }
    }
}

/// Runs `<program> <script_dir>/<script> <user_id>` and maps the exit status.
pub struct CommandTrigger {
    program: String,
    script_dir: PathBuf,
}

impl CommandTrigger {
    pub fn new(program: String, script_dir: PathBuf) -> Self {
        Self {
            program,
            script_dir,
        }
    }
}

#[async_trait]
impl RemediationTrigger for CommandTrigger {
    async fn trigger(&self, kind: RemediationKind, user_id: &str) -> RemediationOutcome {
        let script = self.script_dir.join(kind.script());
        info!(program = %self.program, script = %script.display(), %user_id, "running remediation script");

        let status = Command::new(&self.program)
            .arg(&script)
            .arg(user_id)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => RemediationOutcome::Succeeded,
            Ok(status) => {
                warn!(script = %script.display(), %status, "remediation script failed");
                RemediationOutcome::Failed
            }
            Err(err) => {
                warn!(program = %self.program, error = %err, "failed to launch remediation script");
                RemediationOutcome::Failed
            }
        }
    }
}
