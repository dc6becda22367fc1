pub mod account;
pub mod entry;
pub mod session;
pub mod ticket;
