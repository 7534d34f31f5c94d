//! Application layer - use cases, services and the terminal view

pub mod commands;
pub mod interactive;
pub mod services;
pub mod view;

pub use commands::{Cli, Commands, CommandExecutor};
pub use services::{PendingPool, SwapService};
