//! Routing configuration.

/// Configuration parameters for a RAPTOR query.
#[derive(Debug, Clone)]
pub struct RaptorConfig {
    /// Maximum number of vehicle boardings considered. Each round of the
    /// algorithm corresponds to one additional boarding.
    pub max_rounds: usize,

    /// Maximum straight-line distance for a derived walking link (meters).
    pub max_walk_meters: f64,

    /// Walking speed used to turn distances into durations (meters/second).
    pub walk_speed_mps: f64,
}

impl RaptorConfig {
    /// Create a configuration with the given parameters.
    pub fn new(max_rounds: usize, max_walk_meters: f64, walk_speed_mps: f64) -> Self {
        Self {
            max_rounds,
            max_walk_meters,
            walk_speed_mps,
        }
    }
}

impl Default for RaptorConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            max_walk_meters: 1500.0,
            walk_speed_mps: 1.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RaptorConfig::default();
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.max_walk_meters, 1500.0);
        assert_eq!(config.walk_speed_mps, 1.4);
    }

    #[test]
    fn custom_config() {
        let config = RaptorConfig::new(2, 500.0, 1.0);
        assert_eq!(config.max_rounds, 2);
        assert_eq!(config.max_walk_meters, 500.0);
        assert_eq!(config.walk_speed_mps, 1.0);
    }
}
