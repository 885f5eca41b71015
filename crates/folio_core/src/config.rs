//! Engine tuning knobs.
//!
//! # Responsibility
//! - Hold thresholds, offsets and timeouts used across view-state modules.
//! - Load overrides from JSON, falling back to defaults per field.
//!
//! # Invariants
//! - `reveal_threshold` stays within `0.0..=1.0`.
//! - Timeouts are non-zero.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Visibility fraction that triggers a section reveal.
    pub reveal_threshold: f64,
    /// Distance from the viewport top to the scroll-spy reference line.
    pub reference_offset_px: f64,
    /// Gap kept above a section after anchor navigation (fixed navbar height).
    pub scroll_offset_px: f64,
    /// Scroll distance after which the navbar switches to its solid style.
    pub scrolled_threshold_px: f64,
    /// Number of technology facets offered as filter shortcuts.
    pub popular_technology_limit: usize,
    /// Minimum trimmed character count for contact messages.
    pub message_min_chars: usize,
    pub submit_timeout_ms: u64,
    /// Artificial latency of the simulated contact transport.
    pub simulated_send_delay_ms: u64,
    /// Card description cut-off.
    pub description_preview_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reference_offset_px: 100.0,
            scroll_offset_px: 64.0,
            scrolled_threshold_px: 50.0,
            popular_technology_limit: 8,
            message_min_chars: 10,
            submit_timeout_ms: 10_000,
            simulated_send_delay_ms: 2_000,
            description_preview_chars: 120,
        }
    }
}

impl EngineConfig {
    /// Parses overrides from JSON; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads overrides from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json(&raw)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal_threshold",
                detail: format!("{} is outside 0.0..=1.0", self.reveal_threshold),
            });
        }
        for (field, value) in [
            ("reference_offset_px", self.reference_offset_px),
            ("scroll_offset_px", self.scroll_offset_px),
            ("scrolled_threshold_px", self.scrolled_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    detail: format!("{value} must be a finite, non-negative pixel value"),
                });
            }
        }
        if self.submit_timeout_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "submit_timeout_ms",
                detail: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    pub fn simulated_send_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_send_delay_ms)
    }
}

/// Configuration load errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    OutOfRange { field: &'static str, detail: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::OutOfRange { field, detail } => write!(f, "config `{field}`: {detail}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::OutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EngineConfig};

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"reveal_threshold": 0.3}"#)
            .expect("partial config should parse");
        assert_eq!(config.reveal_threshold, 0.3);
        assert_eq!(config.reference_offset_px, 100.0);
        assert_eq!(config.message_min_chars, 10);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = EngineConfig::from_json(r#"{"reveal_threshold": 1.5}"#)
            .expect_err("threshold above 1 must fail");
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "reveal_threshold",
                ..
            }
        ));

        let err = EngineConfig::from_json(r#"{"submit_timeout_ms": 0}"#)
            .expect_err("zero timeout must fail");
        assert!(err.to_string().contains("submit_timeout_ms"));
    }
}
