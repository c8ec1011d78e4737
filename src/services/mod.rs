pub mod remediation_trigger;
pub mod ticketing;

pub use remediation_trigger::RemediationTrigger;
pub use ticketing::TicketingService;
