//! Tunable parameters for every page behavior.
//!
//! All values have defaults matching the production site. A page may override
//! any subset by embedding a JSON document; unknown keys are rejected so a
//! typo never silently falls back to a default.
//!
//! # Example
//!
//! ```
//! use vitrine_core::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "carousel": { "autoplay_interval_ms": 8000 } }"#)?;
//! assert_eq!(config.carousel.autoplay_interval_ms, 8000);
//! assert_eq!(config.carousel.cooldown_ms, 3000);
//! # Ok::<(), vitrine_core::error::ConfigError>(())
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// Carousel timing and gesture parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Period of the autoplay advance
    pub autoplay_interval_ms: u32,
    /// Minimum horizontal displacement that counts as a swipe
    pub swipe_threshold: f64,
    /// Quiet window after an interaction before autoplay resumes
    pub cooldown_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            swipe_threshold: 50.0,
            cooldown_ms: 3000,
        }
    }
}

impl CarouselConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::invalid_value(
                "carousel.autoplay_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.cooldown_ms == 0 {
            return Err(ConfigError::invalid_value(
                "carousel.cooldown_ms",
                "must be greater than zero",
            ));
        }
        require_non_negative("carousel.swipe_threshold", self.swipe_threshold)
    }
}

/// Scroll-driven header parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Height of the fixed header subtracted from anchor scroll targets
    pub header_offset: f64,
    /// Vertical offset past which the header switches to its scrolled style
    pub header_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            header_threshold: 100.0,
        }
    }
}

impl ScrollConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("scroll.header_offset", self.header_offset)?;
        require_non_negative("scroll.header_threshold", self.header_threshold)
    }
}

/// Reveal-on-scroll observer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction of an element that counts as intersecting
    pub threshold: f64,
    /// Bottom root margin; negative values shrink the viewport
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50.0,
        }
    }
}

impl RevealConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::invalid_value(
                "reveal.threshold",
                format!("must be in range [0.0, 1.0], got {}", self.threshold),
            ));
        }
        if !self.bottom_margin.is_finite() {
            return Err(ConfigError::invalid_value(
                "reveal.bottom_margin",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Typewriter heading parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    /// Delay between two revealed characters
    pub interval_ms: u32,
    /// Delay before the first character appears
    pub start_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            interval_ms: 50,
            start_delay_ms: 500,
        }
    }
}

impl TypewriterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::invalid_value(
                "typewriter.interval_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Button press feedback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PressConfig {
    /// Scale applied while the button is "pressed"
    pub scale: f64,
    /// How long the pressed scale is held
    pub restore_ms: u32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            scale: 0.95,
            restore_ms: 200,
        }
    }
}

impl PressConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return Err(ConfigError::invalid_value(
                "press.scale",
                format!("must be in range (0.0, 1.0], got {}", self.scale),
            ));
        }
        Ok(())
    }
}

/// Complete configuration for every behavior on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub typewriter: TypewriterConfig,
    pub press: PressConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing sections and keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON, names an unknown
    /// key, or holds a value outside its allowed range.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| ConfigError::parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carousel.validate()?;
        self.scroll.validate()?;
        self.reveal.validate()?;
        self.typewriter.validate()?;
        self.press.validate()
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid_value(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid_value(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
