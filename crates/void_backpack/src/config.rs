//! Inventory configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Inventory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Maximum total weight the owner can carry
    pub max_carry_weight: f32,

    /// Distance in front of the owner where dropped items appear
    pub drop_distance: f32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_carry_weight: 150.0,
            drop_distance: 100.0,
        }
    }
}

impl InventoryConfig {
    /// Create a configuration with the given carry limit
    pub fn with_max_carry_weight(mut self, weight: f32) -> Self {
        self.max_carry_weight = weight;
        self
    }

    /// Set the drop distance
    pub fn with_drop_distance(mut self, distance: f32) -> Self {
        self.drop_distance = distance;
        self
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("max_carry_weight", self.max_carry_weight)?;
        check_non_negative("drop_distance", self.drop_distance)
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InventoryConfig::default();

        assert_eq!(config.max_carry_weight, 150.0);
        assert_eq!(config.drop_distance, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = InventoryConfig::from_json_str(r#"{ "max_carry_weight": 40.0 }"#).unwrap();

        assert_eq!(config.max_carry_weight, 40.0);
        assert_eq!(config.drop_distance, 100.0);
    }

    #[test]
    fn test_rejects_negative() {
        let result = InventoryConfig::from_json_str(r#"{ "max_carry_weight": -1.0 }"#);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "max_carry_weight", .. })
        ));
        assert!(InventoryConfig::default()
            .with_drop_distance(f32::INFINITY)
            .validate()
            .is_err());
    }
}
