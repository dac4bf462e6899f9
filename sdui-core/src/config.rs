//! Configuration types for descriptor compilation

use serde::{Deserialize, Serialize};

/// Main configuration for the descriptor compilation service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SduiConfig {
    /// Parser configuration
    pub parser: ParserConfig,

    /// Cache configuration
    pub cache: CacheConfig,
}

/// Parser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting depth before a parse fails fast
    pub max_depth: usize,

    /// Resolve type tags case-insensitively
    pub lenient_kinds: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            lenient_kinds: false,
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached descriptor trees, at least 1
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 128 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = SduiConfig::default();
        assert_eq!(config.parser.max_depth, 64);
        assert!(!config.parser.lenient_kinds);
        assert_eq!(config.cache.capacity, 128);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let config: SduiConfig =
            serde_json::from_str(r#"{"cache":{"capacity":8}}"#).expect("valid config");
        assert_eq!(config.cache.capacity, 8);
        assert_eq!(config.parser.max_depth, 64);
    }
}
