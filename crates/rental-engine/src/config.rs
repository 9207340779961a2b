//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [search]
//! window_length_days = 3
//! search_start_offset_days = 1
//! max_search_days = 365
//!
//! [pricing]
//! daily_rate = "49.90"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{RentalError, Result};
use crate::pricing::DailyRate;

/// Parameters of the suggested-window search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Length of the suggested window in days (end = start + length).
    pub window_length_days: u32,
    /// Days after the baseline at which probing begins.
    pub search_start_offset_days: u32,
    /// Maximum number of start dates probed before giving up.
    pub max_search_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_length_days: 3,
            search_start_offset_days: 1,
            max_search_days: 365,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_search_days == 0 {
            return Err(RentalError::InvalidConfig(
                "max_search_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub daily_rate: DailyRate,
}

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub pricing: PricingConfig,
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(s).map_err(|e| RentalError::InvalidConfig(e.to_string()))?;
        config.search.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RentalError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.search.max_search_days, 365);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = EngineConfig::from_toml_str(
            "[search]\nwindow_length_days = 7\n\n[pricing]\ndaily_rate = \"49.90\"\n",
        )
        .unwrap();
        assert_eq!(config.search.window_length_days, 7);
        assert_eq!(config.search.search_start_offset_days, 1);
        assert_eq!(config.pricing.daily_rate.amount(), Decimal::new(4990, 2));
    }

    #[test]
    fn zero_search_bound_rejected() {
        let err = EngineConfig::from_toml_str("[search]\nmax_search_days = 0\n").unwrap_err();
        assert!(matches!(err, RentalError::InvalidConfig(_)));
    }

    #[test]
    fn negative_rate_rejected() {
        let err = EngineConfig::from_toml_str("[pricing]\ndaily_rate = \"-5\"\n").unwrap_err();
        assert!(matches!(err, RentalError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(EngineConfig::from_toml_str("[search]\nwindow = 3\n").is_err());
    }
}
