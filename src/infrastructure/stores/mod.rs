pub mod memory;
pub mod surrealdb;
