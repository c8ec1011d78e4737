pub mod remediation;
pub mod ticket;
