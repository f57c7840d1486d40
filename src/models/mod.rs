pub mod adapters;
pub mod exchange;
pub mod messages;
pub mod route;
