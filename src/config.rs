//! Checkpoint configuration.

use serde::{Deserialize, Serialize};

/// Configuration for checkpoint enforcement.
///
/// The host node deserializes this from its config file and passes
/// [`Config::enforce_checkpoints`] into each checkpoint operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Whether blocks that disagree with a hard-coded checkpoint are
    /// rejected.
    ///
    /// Disabling this weakens protection against deep chain rewrites;
    /// it is only meant for testing and chain forensics.
    pub enforce_checkpoints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_checkpoints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_enforcing() {
        assert!(Config::default().enforce_checkpoints);
    }
}
