pub mod fallback;
pub mod remediation;
