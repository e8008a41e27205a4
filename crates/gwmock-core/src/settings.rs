//! Service settings and validation.
//!
//! Pure configuration values with no infrastructure dependencies. Adapters
//! fill these from flags or environment and validate before serving.

use serde::{Deserialize, Serialize};

/// Default `X-RateLimit-Limit` value.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Default rate-limit window in seconds (`X-RateLimit-Reset` is now + window).
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

/// Default token returned by `/auth/login`.
pub const DEFAULT_ACCESS_TOKEN: &str = "mock-access-token";

/// Mock service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Value reported in `X-RateLimit-Limit`.
    pub rate_limit: u32,

    /// Seconds until the reported window resets.
    pub rate_limit_window_secs: u64,

    /// Static token issued by the login endpoint.
    pub access_token: String,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            rate_limit: DEFAULT_RATE_LIMIT,
            rate_limit_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Rate limit must be at least 1, got {0}")]
    InvalidRateLimit(u32),

    #[error("Rate limit window must be at least 1 second, got {0}")]
    InvalidWindow(u64),

    #[error("Access token cannot be empty")]
    EmptyAccessToken,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.rate_limit == 0 {
        return Err(SettingsError::InvalidRateLimit(settings.rate_limit));
    }

    if settings.rate_limit_window_secs == 0 {
        return Err(SettingsError::InvalidWindow(settings.rate_limit_window_secs));
    }

    if settings.access_token.trim().is_empty() {
        return Err(SettingsError::EmptyAccessToken);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.rate_limit, DEFAULT_RATE_LIMIT);
        assert_eq!(settings.rate_limit_window_secs, 3600);
        assert_eq!(settings.access_token, DEFAULT_ACCESS_TOKEN);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_zero_rate_limit() {
        let settings = Settings {
            rate_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidRateLimit(0))
        ));
    }

    #[test]
    fn test_validate_zero_window() {
        let settings = Settings {
            rate_limit_window_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidWindow(0))
        ));
    }

    #[test]
    fn test_validate_blank_token() {
        let settings = Settings {
            access_token: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"rate_limit": 5}"#).unwrap();
        assert_eq!(settings.rate_limit, 5);
        assert_eq!(settings.access_token, DEFAULT_ACCESS_TOKEN);
    }
}
