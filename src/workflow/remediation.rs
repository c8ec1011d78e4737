use std::sync::Arc;

use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::remediation::{RemediationKind, RemediationOutcome, RemediationRequest};
use crate::domain::ticket::TicketRequest;
use crate::error::{AppError, AppResult};
use crate::services::RemediationTrigger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowResult {
    RemediationConfirmed(RemediationKind),
    TicketFiled(String),
}

pub struct RemediationExecutor {
    trigger: Arc<dyn RemediationTrigger>,
}

impl RemediationExecutor {
    pub fn new(trigger: Arc<dyn RemediationTrigger>) -> Self {
        Self { trigger }
    }

    /// Resolves the id against the remediation table and runs it.
    ///
    /// Unknown ids are rejected before the trigger is touched.
    pub async fn execute(
        &self,
        remediation_id: &str,
        user_id: &str,
    ) -> AppResult<RemediationOutcome> {
        let request = parse_request(remediation_id, user_id)?;
        Ok(self.trigger.trigger(request.kind, &request.user_id).await)
    }
}

fn parse_request(remediation_id: &str, user_id: &str) -> AppResult<RemediationRequest> {
    let kind = RemediationKind::from_id(remediation_id)
        .ok_or_else(|| AppError::UnknownRemediation(remediation_id.to_string()))?;
    Ok(RemediationRequest {
        kind,
        user_id: user_id.to_string(),
    })
}

pub async fn run_remediation(
    ctx: &AppContext,
    remediation_id: &str,
    user_id: &str,
) -> AppResult<WorkflowResult> {
    let outcome = RemediationExecutor::new(ctx.remediation.clone())
        .execute(remediation_id, user_id)
        .await?;
    let kind = parse_request(remediation_id, user_id)?.kind;

    match outcome {
        RemediationOutcome::Succeeded => {
            info!(remediation = %kind, %user_id, "remediation succeeded");
            Ok(WorkflowResult::RemediationConfirmed(kind))
        }
        RemediationOutcome::Failed => {
            warn!(remediation = %kind, %user_id, "remediation failed; filing ticket");
            let ticket = TicketRequest::for_failed_remediation(kind, user_id);
            let ticket_number = ctx.ticketing.create_ticket(&ticket).await.ticket_number();
            Ok(WorkflowResult::TicketFiled(ticket_number))
        }
    }
}
