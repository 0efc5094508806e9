//! Evaluation Context

use crate::PluginRegistry;
use std::sync::Arc;

/// Default number of decimals for human-readable output
pub const DEFAULT_PRECISION: usize = 4;

/// Evaluation context passed to plugins
pub struct EvalContext {
    /// Decimals used when a plugin renders a `display` string
    pub precision: usize,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            registry,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
