//! SeaORM entities, one per table.

pub mod business;
pub mod client;
pub mod owner;
pub mod staff;
pub mod user;
