use serde::{Deserialize, Serialize};

use crate::errors::{AmortizeError, Result};

/// largest decimal scale the display projection supports
pub const MAX_DISPLAY_SCALE: u32 = 8;

/// engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// tenure must be strictly below this many years
    pub max_tenure_years: f64,
    /// decimal places used when projecting a schedule for display
    pub display_scale: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tenure_years: 100.0,
            display_scale: 2,
        }
    }
}

impl EngineConfig {
    /// parse configuration from json, missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_tenure_years(mut self, years: f64) -> Self {
        self.max_tenure_years = years;
        self
    }

    pub fn with_display_scale(mut self, scale: u32) -> Self {
        self.display_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_tenure_years.is_finite() || self.max_tenure_years <= 0.0 {
            return Err(AmortizeError::InvalidConfiguration {
                message: format!(
                    "max_tenure_years must be a positive finite number, got {}",
                    self.max_tenure_years
                ),
            });
        }

        if self.display_scale > MAX_DISPLAY_SCALE {
            return Err(AmortizeError::InvalidConfiguration {
                message: format!(
                    "display_scale must be at most {}, got {}",
                    MAX_DISPLAY_SCALE, self.display_scale
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_tenure_years, 100.0);
        assert_eq!(config.display_scale, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "max_tenure_years": 40 }"#).unwrap();
        assert_eq!(config.max_tenure_years, 40.0);
        assert_eq!(config.display_scale, 2);

        let empty = EngineConfig::from_json("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_rejects_bad_config() {
        let err = EngineConfig::from_json(r#"{ "max_tenure_years": 0 }"#).unwrap_err();
        assert!(matches!(err, AmortizeError::InvalidConfiguration { .. }));

        let err = EngineConfig::default()
            .with_display_scale(12)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AmortizeError::InvalidConfiguration { .. }));

        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, AmortizeError::Serialization(_)));
    }
}
