pub mod apps_script_client;
pub mod payloads;

pub use apps_script_client::{parse_liquidity_pool, AppsScriptClient};
