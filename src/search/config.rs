//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Depth-limited search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth limit passed to the depth-limited alpha-beta search.
    /// States below this limit are scored by the game's heuristic.
    pub depth_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth_limit: 4 }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth limit.
    pub fn with_depth_limit(mut self, depth: usize) -> Self {
        self.depth_limit = depth;
        self
    }
}

/// Time-bounded iterative deepening parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedConfig {
    /// Wall-clock budget for one decision. A budget that overflows the
    /// clock (such as `Duration::MAX`) means no deadline.
    pub budget: Duration,

    /// Deepest depth limit to attempt (None = keep deepening until the
    /// budget runs out or the tree is exhausted).
    pub max_depth: Option<usize>,
}

impl Default for TimedConfig {
    fn default() -> Self {
        Self {
            budget: Duration::from_secs(1),
            max_depth: None,
        }
    }
}

impl TimedConfig {
    /// Create a config with the given budget in seconds.
    ///
    /// Negative or non-finite budgets become zero; budgets too large for a
    /// `Duration` saturate at `Duration::MAX`, which never expires.
    pub fn from_secs_f64(secs: f64) -> Self {
        let budget = if secs.is_finite() && secs > 0.0 {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Create a new config with custom budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Create a new config with a cap on the deepening depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(SearchConfig::default().depth_limit, 4);

        let timed = TimedConfig::default();
        assert_eq!(timed.budget, Duration::from_secs(1));
        assert_eq!(timed.max_depth, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_depth_limit(7);
        assert_eq!(config.depth_limit, 7);

        let timed = TimedConfig::default()
            .with_budget(Duration::from_millis(250))
            .with_max_depth(9);
        assert_eq!(timed.budget, Duration::from_millis(250));
        assert_eq!(timed.max_depth, Some(9));
    }

    #[test]
    fn test_from_secs_f64() {
        assert_eq!(TimedConfig::from_secs_f64(0.5).budget, Duration::from_millis(500));
        assert_eq!(TimedConfig::from_secs_f64(-1.0).budget, Duration::ZERO);
        assert_eq!(TimedConfig::from_secs_f64(f64::NAN).budget, Duration::ZERO);
    }

    #[test]
    fn test_from_secs_f64_saturates() {
        assert_eq!(TimedConfig::from_secs_f64(1e20).budget, Duration::MAX);
        assert_eq!(TimedConfig::from_secs_f64(f64::MAX).budget, Duration::MAX);
        assert_eq!(TimedConfig::from_secs_f64(f64::INFINITY).budget, Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = TimedConfig::default().with_max_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TimedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
