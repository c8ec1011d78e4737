use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::remediation::{WorkflowResult, run_remediation};

#[derive(Debug, Clone)]
pub struct RemediateCommandArgs {
    pub remediation_id: String,
    pub user: String,
}

pub async fn run(ctx: &AppContext, args: RemediateCommandArgs) -> AppResult<()> {
    match run_remediation(ctx, &args.remediation_id, &args.user).await? {
        WorkflowResult::RemediationConfirmed(kind) => {
            println!("Remediation '{kind}' succeeded for {}.", args.user)
        }
        WorkflowResult::TicketFiled(ticket_number) => println!(
            "Remediation '{}' failed; ticket {ticket_number} filed for {}.",
            args.remediation_id, args.user
        ),
    }
    Ok(())
}
