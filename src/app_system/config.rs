use std::env;
use tracing::warn;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime knobs for the storefront system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Capacity of the session request channel.
    pub channel_buffer: usize,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Reads `STOREFRONT_CHANNEL_BUFFER` and `STOREFRONT_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup("STOREFRONT_CHANNEL_BUFFER") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.channel_buffer = n,
                _ => warn!(value = %raw, "Ignoring invalid STOREFRONT_CHANNEL_BUFFER"),
            }
        }
        if let Some(filter) = lookup("STOREFRONT_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[]));
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STOREFRONT_CHANNEL_BUFFER", " 4 "),
            ("STOREFRONT_LOG", "debug"),
        ]));
        assert_eq!(config.channel_buffer, 4);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STOREFRONT_CHANNEL_BUFFER", "0"),
            ("STOREFRONT_LOG", "  "),
        ]));
        assert_eq!(config, StorefrontConfig::default());

        let config = StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_CHANNEL_BUFFER", "many")]));
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }
}
