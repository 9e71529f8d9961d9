//! Gateway configuration read from the process environment.

use std::net::SocketAddr;

use crate::error::ConfigError;

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "ALGOTRACE_LISTEN_ADDR";

/// Environment variable holding the maximum sequence length.
pub const MAX_LEN_VAR: &str = "ALGOTRACE_MAX_LEN";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MAX_LEN: usize = 1000;

/// Runtime configuration for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the server binds to.
    pub listen_addr: SocketAddr,

    /// Largest sequence, supplied or generated, a single request may search.
    pub max_len: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl GatewayConfig {
    /// Create a config with the given length limit and the default address.
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len, ..Self::default() }
    }

    /// Load the config from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            key: LISTEN_ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let max_len = match lookup(MAX_LEN_VAR) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: MAX_LEN_VAR, value: raw }),
            },
            None => DEFAULT_MAX_LEN,
        };

        Ok(Self { listen_addr, max_len })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn from_lookup_uses_defaults_when_unset() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr.port(), 8000);
    }

    #[test]
    fn from_lookup_reads_overrides() {
        let lookup = lookup_from(&[(LISTEN_ADDR_VAR, "0.0.0.0:9090"), (MAX_LEN_VAR, "50")]);
        let config = match GatewayConfig::from_lookup(lookup) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.port(), 9090);
        assert_eq!(config.max_len, 50);
    }

    #[test]
    fn from_lookup_rejects_bad_address() {
        let result = GatewayConfig::from_lookup(lookup_from(&[(LISTEN_ADDR_VAR, "nowhere")]));
        assert!(
            matches!(result, Err(ConfigError::Invalid { key: LISTEN_ADDR_VAR, .. })),
            "unparseable address must be rejected"
        );
    }

    #[test]
    fn from_lookup_rejects_zero_max_len() {
        let result = GatewayConfig::from_lookup(lookup_from(&[(MAX_LEN_VAR, "0")]));
        assert!(matches!(result, Err(ConfigError::Invalid { key: MAX_LEN_VAR, .. })));
    }
}
