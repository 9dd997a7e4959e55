//! Widget configuration
//!
//! Read once at startup from the canvas `data-config` attribute. Nothing
//! is written back; the session resets on reload.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BALANCE;
use crate::error::WheelError;
use crate::locale::Locale;

/// Widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Balance shown at startup
    pub starting_balance: i64,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Initial locale code
    pub locale: String,
    /// Skip the idle rotation
    pub reduced_motion: bool,
    /// Skip the loader overlay
    pub skip_loader: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_BALANCE as i64,
            seed: None,
            locale: Locale::En.code().to_string(),
            reduced_motion: false,
            skip_loader: false,
        }
    }
}

impl WheelConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WheelError> {
        self.starting_balance()?;
        self.initial_locale()?;
        Ok(())
    }

    pub fn starting_balance(&self) -> Result<u64, WheelError> {
        u64::try_from(self.starting_balance).map_err(|_| {
            WheelError::InvalidArgument(format!(
                "starting balance must be non-negative, got {}",
                self.starting_balance
            ))
        })
    }

    pub fn initial_locale(&self) -> Result<Locale, WheelError> {
        Locale::from_code(&self.locale)
    }

    /// Load from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        let Some(json) = canvas.get_attribute("data-config") else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from data-config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring data-config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.starting_balance().unwrap(), 1250);
        assert_eq!(config.initial_locale().unwrap(), Locale::En);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WheelConfig::from_json(r#"{ "seed": 7, "locale": "ar" }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_locale().unwrap(), Locale::Ar);
        assert_eq!(config.starting_balance().unwrap(), 1250);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let err = WheelConfig::from_json(r#"{ "starting_balance": -5 }"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidArgument(_)));
    }

    #[test]
    fn test_bad_locale_rejected() {
        let err = WheelConfig::from_json(r#"{ "locale": "xx" }"#).unwrap_err();
        assert!(matches!(err, WheelError::Configuration(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = WheelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WheelError::Configuration(_)));
    }
}
