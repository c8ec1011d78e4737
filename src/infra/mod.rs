pub mod scripts;
pub mod servicenow;
