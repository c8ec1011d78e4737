use crate::context::AppContext;
use crate::domain::remediation::RemediationKind;
use crate::error::AppResult;
use crate::host::protocol::{ActionCall, ActionResponse, BotResponse, HostEvent};
use crate::workflow::fallback::file_fallback_ticket;
use crate::workflow::remediation::{WorkflowResult, run_remediation};

const FALLBACK_ACTION: &str = "action_create_servicenow_ticket";
const TICKET_NUMBER_TEMPLATE: &str = "utter_inform_ticket_number";
const TICKET_NUMBER_SLOT: &str = "ticket_number";

/// Actions the host may invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Remediate(RemediationKind),
    FallbackTicket,
}

impl HostAction {
    pub fn from_name(name: &str) -> Option<Self> {
        if name == FALLBACK_ACTION {
            return Some(HostAction::FallbackTicket);
        }
        RemediationKind::from_action_name(name).map(HostAction::Remediate)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HostAction::Remediate(kind) => kind.action_name(),
            HostAction::FallbackTicket => FALLBACK_ACTION,
        }
    }

    pub fn registered() -> Vec<HostAction> {
        RemediationKind::all()
            .map(HostAction::Remediate)
            .chain(std::iter::once(HostAction::FallbackTicket))
            .collect()
    }

    pub async fn run(&self, ctx: &AppContext, call: &ActionCall) -> AppResult<ActionResponse> {
        let user_id = call.user_id();
        match self {
            HostAction::Remediate(kind) => {
                let response = match run_remediation(ctx, kind.id(), user_id).await? {
                    WorkflowResult::RemediationConfirmed(kind) => {
                        BotResponse::template(kind.confirmation_template())
                    }
                    WorkflowResult::TicketFiled(ticket_number) => BotResponse {
                        response: TICKET_NUMBER_TEMPLATE.to_string(),
                        ticket_number: Some(ticket_number),
                    },
                };
                Ok(ActionResponse {
                    events: Vec::new(),
                    responses: vec![response],
                })
            }
            HostAction::FallbackTicket => {
                let ticket_number = file_fallback_ticket(ctx, call.latest_text(), user_id).await;
                Ok(ActionResponse {
                    events: vec![HostEvent::SlotSet {
                        name: TICKET_NUMBER_SLOT.to_string(),
                        value: ticket_number,
                    }],
                    responses: Vec::new(),
                })
            }
        }
    }
}
