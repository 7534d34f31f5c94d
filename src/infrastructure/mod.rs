//! Infrastructure layer - remote endpoint access

pub mod gateway;
