//! GlyphSwap - token swap quotes and dispatch client
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::SwapService;
pub use domain::gateway::SwapGateway;
pub use domain::pool::LiquidityPool;
pub use domain::quote::QuoteCalculator;
pub use domain::session::SwapSession;
pub use infrastructure::gateway::AppsScriptClient;
