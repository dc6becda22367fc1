pub mod account;
pub mod jsonwebtoken;
pub mod session;
pub mod ticket;
