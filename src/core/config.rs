//! Trace generation configuration.
//!
//! Only the hybrid engine has a tunable parameter today. Insertion and merge
//! sort ignore the config entirely.

use serde::{Deserialize, Serialize};

use super::TraceError;

/// Default block length for the hybrid engine's run phase.
pub const DEFAULT_RUN_SIZE: usize = 32;

/// Configuration for trace generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Length of the insertion-sorted blocks in the hybrid engine.
    /// The final block may be shorter. Must be positive.
    pub run_size: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            run_size: DEFAULT_RUN_SIZE,
        }
    }
}

impl TraceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hybrid engine's run size.
    #[must_use]
    pub fn with_run_size(mut self, run_size: usize) -> Self {
        self.run_size = run_size;
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.run_size == 0 {
            tracing::warn!("rejecting trace config with zero run_size");
            return Err(TraceError::InvalidInput("run_size must be positive"));
        }
        Ok(())
    }
}
