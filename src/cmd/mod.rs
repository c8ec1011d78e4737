pub mod config;
pub mod remediate;
pub mod serve;
pub mod ticket;
