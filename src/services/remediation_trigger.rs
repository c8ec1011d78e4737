use async_trait::async_trait;

use crate::domain::remediation::{RemediationKind, RemediationOutcome};

/// Out-of-band corrective action backend.
///
/// Failing to run a script is an ordinary outcome, so implementations report
/// it as [`RemediationOutcome::Failed`] rather than an error.
#[async_trait]
pub trait RemediationTrigger: Send + Sync {
    async fn trigger(&self, kind: RemediationKind, user_id: &str) -> RemediationOutcome;
}
