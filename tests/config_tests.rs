// Host-side tests for configuration defaults and data-* overrides.

use landing_web::config::{SiteConfig, CONFIG_ATTRIBUTES};
use landing_web::constants::*;
use landing_web::error::ConfigError;

#[test]
fn defaults_come_from_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.scrolled_threshold, SCROLLED_THRESHOLD_PX);
    assert_eq!(cfg.anchor_offset, ANCHOR_OFFSET_PX);
    assert_eq!(cfg.spy_offset, SPY_OFFSET_PX);
    assert_eq!(cfg.parallax_factor, PARALLAX_FACTOR);
    assert_eq!(cfg.reveal_threshold, REVEAL_THRESHOLD);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn every_advertised_attribute_is_accepted() {
    let values = ["10", "12", "30", "0.3", "0.5", "debug"];
    let (cfg, errors) = SiteConfig::from_attributes(CONFIG_ATTRIBUTES.into_iter().zip(values));
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(cfg.scrolled_threshold, 10.0);
    assert_eq!(cfg.anchor_offset, 12.0);
    assert_eq!(cfg.spy_offset, 30.0);
    assert_eq!(cfg.parallax_factor, 0.3);
    assert_eq!(cfg.reveal_threshold, 0.5);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn values_are_trimmed() {
    let mut cfg = SiteConfig::default();
    cfg.apply("data-parallax-factor", "  0.25 ").unwrap();
    assert_eq!(cfg.parallax_factor, 0.25);
}

#[test]
fn rejected_values_keep_defaults() {
    let (cfg, errors) = SiteConfig::from_attributes([
        ("data-spy-offset", "lots"),
        ("data-reveal-threshold", "1.5"),
        ("data-log-level", "loud"),
        ("data-parallax-factor", "NaN"),
    ]);
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors[0],
        ConfigError::InvalidNumber {
            key: "data-spy-offset".into(),
            value: "lots".into()
        }
    );
    assert!(matches!(errors[1], ConfigError::OutOfRange { .. }));
    assert_eq!(errors[2], ConfigError::UnknownLogLevel("loud".into()));
    assert!(matches!(errors[3], ConfigError::OutOfRange { .. }));
}

#[test]
fn unknown_key_is_reported() {
    let mut cfg = SiteConfig::default();
    assert_eq!(
        cfg.apply("data-theme", "dark"),
        Err(ConfigError::UnknownKey("data-theme".into()))
    );
}

#[test]
fn error_messages_name_the_attribute() {
    let mut cfg = SiteConfig::default();
    let err = cfg.apply("data-anchor-offset", "-5").unwrap_err();
    assert_eq!(err.to_string(), "data-anchor-offset: -5 is outside 0..=1000");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SCROLLED_THRESHOLD_PX >= 0.0);
    assert!(ANCHOR_OFFSET_PX >= 0.0);
    assert!(SPY_OFFSET_PX >= 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(PARALLAX_FACTOR.abs() < 1.0);
    assert!(ANCHOR_SELECTOR.starts_with("a[href^="));
    assert!(MENU_SELECTOR.starts_with('#'));
}
