use tracing::info;

use crate::context::AppContext;
use crate::domain::ticket::TicketRequest;

/// Files a ticket for a request no remediation matched.
///
/// Returns the ticket number, or the failure sentinel when filing failed.
pub async fn file_fallback_ticket(ctx: &AppContext, user_query: &str, user_id: &str) -> String {
    let request = TicketRequest::for_unclassified_query(user_query, user_id);
    let ticket_number = ctx.ticketing.create_ticket(&request).await.ticket_number();
    info!(%user_id, %ticket_number, "fallback ticket processed");
    ticket_number
}
