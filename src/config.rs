use crate::constants::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// `data-*` attributes on `<html>` that `SiteConfig::apply` understands.
pub const CONFIG_ATTRIBUTES: [&str; 6] = [
    "data-scrolled-threshold",
    "data-anchor-offset",
    "data-spy-offset",
    "data-parallax-factor",
    "data-reveal-threshold",
    "data-log-level",
];

/// Numeric tuning for the page enhancements.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub scrolled_threshold: f64,
    pub anchor_offset: f64,
    pub spy_offset: f64,
    pub parallax_factor: f64,
    pub reveal_threshold: f64,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: SCROLLED_THRESHOLD_PX,
            anchor_offset: ANCHOR_OFFSET_PX,
            spy_offset: SPY_OFFSET_PX,
            parallax_factor: PARALLAX_FACTOR,
            reveal_threshold: REVEAL_THRESHOLD,
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Apply one override. On error the current value is left untouched.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "data-scrolled-threshold" => {
                self.scrolled_threshold = parse_in_range(key, value, 0.0, 10_000.0)?
            }
            "data-anchor-offset" => self.anchor_offset = parse_in_range(key, value, 0.0, 1_000.0)?,
            "data-spy-offset" => self.spy_offset = parse_in_range(key, value, 0.0, 1_000.0)?,
            "data-parallax-factor" => {
                self.parallax_factor = parse_in_range(key, value, -1.0, 1.0)?
            }
            "data-reveal-threshold" => {
                self.reveal_threshold = parse_in_range(key, value, 0.0, 1.0)?
            }
            "data-log-level" => {
                self.log_level = log::Level::from_str(value)
                    .map_err(|_| ConfigError::UnknownLogLevel(value.to_string()))?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Build a config from `(attribute, value)` pairs, keeping defaults for
    /// anything rejected. Rejections are returned so the caller can log them.
    pub fn from_attributes<'a, I>(attrs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        let errors = attrs
            .into_iter()
            .filter_map(|(k, v)| cfg.apply(k, v).err())
            .collect();
        (cfg, errors)
    }
}

fn parse_in_range(key: &str, value: &str, min: f64, max: f64) -> Result<f64, ConfigError> {
    let v: f64 = value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !v.is_finite() || v < min || v > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}
