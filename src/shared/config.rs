//! Configuration loading. Read once at startup, then injected.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::shared::errors::ConfigError;
use crate::shared::types::{default_tokens, Token, TokenCatalog};

pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxtBhBPpGYwjUuksHmobgUNIo3rdEtsKULSUJMYvdb-iIOLY1aZieoN_Q1y_ZjVVSpRkA/exec";
pub const DEFAULT_FEE_PERCENT: f64 = 3.0;
pub const DEFAULT_SWAP_WALLET: &str = "YOUR_SWAP_WALLET_ADDRESS_HERE";
pub const DEFAULT_SUPPORT_URL: &str = "https://discord.gg/pwBMDDzWWG";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndpointCfg {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for EndpointCfg {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl EndpointCfg {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwapCfg {
    pub fee_percent: f64,
    pub swap_wallet: String,
    pub support_url: String,
    pub default_from: String,
    pub default_to: String,
}

impl Default for SwapCfg {
    fn default() -> Self {
        Self {
            fee_percent: DEFAULT_FEE_PERCENT,
            swap_wallet: DEFAULT_SWAP_WALLET.to_string(),
            support_url: DEFAULT_SUPPORT_URL.to_string(),
            default_from: "RXD".to_string(),
            default_to: "RADCAT".to_string(),
        }
    }
}

/// Presentation knobs for the swap view
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayCfg {
    pub precision: usize,
    pub show_minimum_input: bool,
    pub show_liquidity: bool,
}

impl Default for DisplayCfg {
    fn default() -> Self {
        Self {
            precision: 6,
            show_minimum_input: true,
            show_liquidity: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenCfg {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub total_supply: u64,
}

impl From<TokenCfg> for Token {
    fn from(cfg: TokenCfg) -> Self {
        Token {
            symbol: cfg.symbol,
            name: cfg.name,
            image_url: cfg.image_url,
            total_supply: cfg.total_supply,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: EndpointCfg,
    pub swap: SwapCfg,
    pub display: DisplayCfg,
    tokens: Vec<TokenCfg>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointCfg::default(),
            swap: SwapCfg::default(),
            display: DisplayCfg::default(),
            tokens: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Token catalog; an empty `[[tokens]]` list means the built-in catalog.
    pub fn catalog(&self) -> TokenCatalog {
        if self.tokens.is_empty() {
            TokenCatalog::new(default_tokens())
        } else {
            TokenCatalog::new(self.tokens.iter().cloned().map(Token::from).collect())
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.endpoint.url)
            .map_err(|e| ConfigError::Invalid(format!("endpoint.url {}: {}", self.endpoint.url, e)))?;

        if self.endpoint.timeout_ms == 0 {
            return Err(ConfigError::Invalid("endpoint.timeout_ms must be positive".to_string()));
        }

        let fee = self.swap.fee_percent;
        if !fee.is_finite() || !(0.0..100.0).contains(&fee) {
            return Err(ConfigError::Invalid(format!(
                "swap.fee_percent must be in [0, 100), got {}",
                fee
            )));
        }

        let catalog = self.catalog();
        if catalog.is_empty() {
            return Err(ConfigError::Invalid("token catalog is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for token in catalog.tokens() {
            if token.total_supply == 0 {
                return Err(ConfigError::Invalid(format!(
                    "token {} has zero total_supply",
                    token.symbol
                )));
            }
            if !seen.insert(token.symbol.to_ascii_uppercase()) {
                return Err(ConfigError::Invalid(format!("duplicate token symbol {}", token.symbol)));
            }
        }

        for symbol in [&self.swap.default_from, &self.swap.default_to] {
            if catalog.get(symbol).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "default token {} is not in the catalog",
                    symbol
                )));
            }
        }

        Ok(())
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        AppConfig::from_toml_str(&content)
    }

    /// Load from `path` when given, otherwise fall back to the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(AppConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.swap.fee_percent, 3.0);
        assert_eq!(cfg.endpoint.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.catalog().len(), 4);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [swap]
            swap_wallet = "1GlyphWallet"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.swap.swap_wallet, "1GlyphWallet");
        assert_eq!(cfg.swap.fee_percent, DEFAULT_FEE_PERCENT);
        assert_eq!(cfg.swap.support_url, DEFAULT_SUPPORT_URL);
        assert_eq!(cfg.endpoint.url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_custom_catalog() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [swap]
            default_from = "AAA"
            default_to = "BBB"

            [[tokens]]
            symbol = "AAA"
            name = "Alpha"
            total_supply = 1000

            [[tokens]]
            symbol = "BBB"
            name = "Beta"
            image_url = "https://example.com/b.png"
            total_supply = 500
            "#,
        )
        .unwrap();
        let catalog = cfg.catalog();
        assert_eq!(catalog.symbols(), vec!["AAA", "BBB"]);
        assert_eq!(catalog.get("BBB").unwrap().image_url, "https://example.com/b.png");
    }

    #[test]
    fn test_rejects_bad_fee() {
        let err = AppConfig::from_toml_str("[swap]\nfee_percent = 100.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_supply_and_duplicates() {
        let zero = r#"
            [[tokens]]
            symbol = "RXD"
            name = "Radiant"
            total_supply = 0
            [[tokens]]
            symbol = "RADCAT"
            name = "RadCat"
            total_supply = 1
        "#;
        assert!(matches!(AppConfig::from_toml_str(zero), Err(ConfigError::Invalid(_))));

        let dup = r#"
            [[tokens]]
            symbol = "RXD"
            name = "Radiant"
            total_supply = 10
            [[tokens]]
            symbol = "rxd"
            name = "Radiant again"
            total_supply = 10
        "#;
        assert!(matches!(AppConfig::from_toml_str(dup), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_default_pair_outside_catalog() {
        let err = AppConfig::from_toml_str("[swap]\ndefault_to = \"DOGE\"\n").unwrap_err();
        assert!(err.to_string().contains("DOGE"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[swap\nfee_percent = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoint]\nurl = \"http://127.0.0.1:9/exec\"\ntimeout_ms = 250").unwrap();

        let cfg = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(cfg.endpoint.url, "http://127.0.0.1:9/exec");
        assert_eq!(cfg.endpoint.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
