use crate::context::AppContext;
use crate::workflow::fallback::file_fallback_ticket;

#[derive(Debug, Clone)]
pub struct TicketCommandArgs {
    pub query: String,
    pub user: String,
}

pub async fn run(ctx: &AppContext, args: TicketCommandArgs) {
    let ticket_number = file_fallback_ticket(ctx, &args.query, &args.user).await;
    println!("Ticket {ticket_number} filed for {}.", args.user);
}
