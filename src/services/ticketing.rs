use async_trait::async_trait;

use crate::domain::ticket::{TicketRequest, TicketResult};

#[async_trait]
pub trait TicketingService: Send + Sync {
    async fn create_ticket(&self, request: &TicketRequest) -> TicketResult;
}
