//! Domain layer - core business logic and entities

pub mod gateway;
pub mod pool;
pub mod quote;
pub mod session;
