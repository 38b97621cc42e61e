// ─────────────────────────────────────────────────────────────────────
// Neuro-Twin — Reservoir Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{MagnonError, MagnonResult};

/// Runtime configuration for the reservoir kernel.
///
/// Contains only the parameters of the hot path: field geometry,
/// readout shape, and weight initialization. Transport-level settings
/// (frame rate, socket addresses) belong to the serving layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square magnetization field.
    /// Default: 128 (readout input dimension is the square of this).
    pub grid_size: usize,

    /// Number of kinematic output channels.
    /// Default: 20.
    pub output_dim: usize,

    /// Standard deviation of the initial readout weights.
    /// Default: 0.01.
    pub weight_scale: f64,

    /// Default Hebbian step size for online readout training.
    /// Default: 0.001.
    pub learning_rate: f64,

    /// Seed for readout weight initialization. Fixed seed, fixed weights.
    /// Default: 42.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,
            output_dim: 20,
            weight_scale: 0.01,
            learning_rate: 0.001,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Readout input dimension: one weight column per field pixel.
    pub fn input_dim(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> MagnonResult<()> {
        if self.grid_size < 2 {
            return Err(MagnonError::Config(format!(
                "grid_size must be >= 2, got {}",
                self.grid_size
            )));
        }
        if self.output_dim == 0 {
            return Err(MagnonError::Config(
                "output_dim must be >= 1".to_string(),
            ));
        }
        if self.weight_scale <= 0.0 {
            return Err(MagnonError::Config(format!(
                "weight_scale must be > 0, got {}",
                self.weight_scale
            )));
        }
        if self.learning_rate <= 0.0 {
            return Err(MagnonError::Config(format!(
                "learning_rate must be > 0, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> MagnonResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MagnonError::Config(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_input_dim() {
        let config = EngineConfig::default();
        assert_eq!(config.input_dim(), 128 * 128);
    }

    #[test]
    fn test_grid_size_too_small() {
        let config = EngineConfig {
            grid_size: 1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_output_dim_rejected() {
        let config = EngineConfig {
            output_dim: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_learning_rate_rejected() {
        let config = EngineConfig {
            learning_rate: -0.001,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_weight_scale_rejected() {
        let config = EngineConfig {
            weight_scale: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = EngineConfig::from_json(&json).unwrap();
        assert_eq!(parsed.grid_size, config.grid_size);
        assert_eq!(parsed.output_dim, config.output_dim);
        assert_eq!(parsed.seed, config.seed);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(EngineConfig::from_json("{not json").is_err());
    }
}
