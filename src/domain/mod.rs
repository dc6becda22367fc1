pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;
