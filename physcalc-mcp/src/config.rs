//! Server configuration from environment variables

use physcalc::DEFAULT_PRECISION;
use std::env;
use tracing::warn;

/// Upper bound for display decimals; f64 carries ~15-17 significant digits
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    /// Decimals used in `display` strings
    pub precision: usize,
}

impl ServerConfig {
    /// Read `PHYSCALC_LOG` (falling back to `RUST_LOG`) and `PHYSCALC_PRECISION`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("PHYSCALC_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        let precision = match lookup("PHYSCALC_PRECISION") {
            Some(raw) => parse_precision(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring invalid PHYSCALC_PRECISION");
                DEFAULT_PRECISION
            }),
            None => DEFAULT_PRECISION,
        };

        Self { log_filter, precision }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

fn parse_precision(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|p| *p <= MAX_PRECISION)
}
