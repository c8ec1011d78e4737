use std::sync::Arc;

use crate::services::{RemediationTrigger, TicketingService};

#[derive(Clone)]
pub struct AppContext {
    pub remediation: Arc<dyn RemediationTrigger>,
    pub ticketing: Arc<dyn TicketingService>,
}

impl AppContext {
    pub fn new(
        remediation: Arc<dyn RemediationTrigger>,
        ticketing: Arc<dyn TicketingService>,
    ) -> Self {
        Self {
            remediation,
            ticketing,
        }
    }
}
