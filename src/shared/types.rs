//! Common types used across the application

use serde::{Deserialize, Serialize};

use crate::shared::errors::ValidationError;

/// Token representation. Static: never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub image_url: String,
    pub total_supply: u64,
}

impl Token {
    pub fn new(symbol: &str, name: &str, image_url: &str, total_supply: u64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            image_url: image_url.to_string(),
            total_supply,
        }
    }
}

/// Closed set of tradable tokens, keyed by symbol. Keeps configuration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
}

impl TokenCatalog {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Symbol lookup is case-insensitive so CLI input like `rxd` resolves.
    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    pub fn resolve(&self, symbol: &str) -> Result<&Token, ValidationError> {
        self.get(symbol)
            .ok_or_else(|| ValidationError::UnknownToken(symbol.to_string()))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.symbol.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self::new(default_tokens())
    }
}

/// The launch catalog.
pub fn default_tokens() -> Vec<Token> {
    vec![
        Token::new(
            "RXD",
            "Radiant",
            "https://static.wixstatic.com/media/c0fd9f_33dd965b95d54dfe9af12ed99fe5c43a~mv2.png",
            120_000_000,
        ),
        Token::new(
            "RADCAT",
            "RadCat",
            "https://static.wixstatic.com/media/c0fd9f_c2c4b7bf64464273a2cf3e30d08a9692~mv2.png",
            21_000_000,
        ),
        Token::new(
            "FUGAZI",
            "Fugazi",
            "https://static.wixstatic.com/media/c0fd9f_27b255b33ae74f2c9b7bb9a6c3cf9076~mv2.jpeg",
            21_000_000,
        ),
        Token::new(
            "PILIM",
            "Pilim",
            "https://static.wixstatic.com/media/c0fd9f_42bf29bc4cff49a2b50d46599890ecd7~mv2.png",
            100_000_000_000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = TokenCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("rxd").map(|t| t.total_supply), Some(120_000_000));
        assert_eq!(catalog.symbols(), vec!["RXD", "RADCAT", "FUGAZI", "PILIM"]);
    }

    #[test]
    fn test_resolve_unknown_symbol() {
        let catalog = TokenCatalog::default();
        assert_eq!(
            catalog.resolve("DOGE"),
            Err(ValidationError::UnknownToken("DOGE".to_string()))
        );
    }
}
