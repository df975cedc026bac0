//! Estimation configuration.

use crate::confidence::DEFAULT_Z;
use crate::error::EstimateError;
use crate::validate::ValidationCollector;

/// Configuration for the estimation pipeline.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    z_score: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self { z_score: DEFAULT_Z }
    }
}

impl EstimateConfig {
    /// Set the standard-normal quantile used by the Wilson interval
    /// (1.96 for a two-sided 95% interval).
    pub fn with_z_score(mut self, z_score: f64) -> Self {
        self.z_score = z_score;
        self
    }

    /// Returns the z-score.
    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Validation`] if the z-score is not finite
    /// and positive.
    pub fn validate(&self) -> Result<(), EstimateError> {
        let mut c = ValidationCollector::new();
        c.check(self.z_score.is_finite() && self.z_score > 0.0, || {
            format!("z_score must be finite and positive, got {}", self.z_score)
        });
        c.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EstimateConfig::default();
        assert_eq!(config.z_score(), 1.96);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = EstimateConfig::default().with_z_score(2.576);
        assert_eq!(config.z_score(), 2.576);
    }

    #[test]
    fn test_validate_rejects_bad_z() {
        for z in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = EstimateConfig::default().with_z_score(z).validate();
            assert!(
                matches!(result, Err(EstimateError::Validation { count: 1, .. })),
                "z = {z} should be rejected"
            );
        }
    }
}
