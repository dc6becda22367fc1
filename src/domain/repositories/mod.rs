pub mod account;
pub mod repository;
pub mod session;
pub mod store;
pub mod ticket;
