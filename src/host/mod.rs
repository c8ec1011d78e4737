pub mod actions;
pub mod protocol;
pub mod routes;

pub use routes::create_router;
