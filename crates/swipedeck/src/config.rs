//! Stack and default-animation configuration.
//!
//! Configuration is plain serde data so it can live in an application
//! manifest next to the rest of the UI description:
//!
//! ```
//! use swipedeck::StackConfig;
//!
//! let config = StackConfig::from_yaml(
//!     "buffer_size: 3\nanimation:\n  duration_ms: 250\n",
//! )
//! .unwrap();
//! assert_eq!(config.buffer_size, 3);
//! assert_eq!(config.animation.duration_ms, 250);
//! assert_eq!(config.settle_delay_ms, 1);
//! ```

use crate::error::StackError;
use serde::{Deserialize, Serialize};
use swipedeck_core::EasingFunction;

/// Default number of pre-materialized cards.
pub const DEFAULT_BUFFER_SIZE: usize = 2;

/// Default delay between removing a swiped card and notifying/refilling.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 1;

/// Parameters of the default swipe-away animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeAnimationConfig {
    /// Duration of the off-screen motion
    pub duration_ms: u32,
    /// Duration of the directional overlay fade-in
    pub overlay_fade_ms: u32,
    /// Tilt applied over the motion, sign follows the direction
    pub rotation_degrees: f32,
    /// Vertical displacement over the motion (negative is up)
    pub vertical_offset: f32,
    /// Extra horizontal travel as a fraction of the container width,
    /// so the tilted corners leave the container as well
    pub exit_overshoot: f32,
    /// Easing for the motion
    pub easing: EasingFunction,
}

impl Default for SwipeAnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            overlay_fade_ms: 200,
            rotation_degrees: 30.0,
            vertical_offset: -30.0,
            exit_overshoot: 0.3,
            easing: EasingFunction::Linear,
        }
    }
}

/// Card stack configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Maximum number of materialized cards, front card included
    pub buffer_size: usize,
    /// Delay between swipe removal and the outcome notification + refill
    pub settle_delay_ms: u32,
    /// Default animator parameters
    pub animation: SwipeAnimationConfig,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            animation: SwipeAnimationConfig::default(),
        }
    }
}

impl StackConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set buffer size.
    #[must_use]
    pub const fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set settle delay.
    #[must_use]
    pub const fn settle_delay_ms(mut self, delay_ms: u32) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    /// Set default animation parameters.
    #[must_use]
    pub const fn animation(mut self, animation: SwipeAnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), StackError> {
        if self.buffer_size == 0 {
            return Err(StackError::InvalidConfiguration {
                field: "buffer_size",
                message: "must be at least 1".to_string(),
            });
        }
        let anim = &self.animation;
        if !anim.rotation_degrees.is_finite()
            || !anim.vertical_offset.is_finite()
            || !anim.exit_overshoot.is_finite()
        {
            return Err(StackError::InvalidConfiguration {
                field: "animation",
                message: "values must be finite".to_string(),
            });
        }
        if anim.exit_overshoot < 0.0 {
            return Err(StackError::InvalidConfiguration {
                field: "animation.exit_overshoot",
                message: format!("must not be negative, got {}", anim.exit_overshoot),
            });
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, StackError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, StackError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StackConfig::default();
        assert_eq!(config.buffer_size, 2);
        assert_eq!(config.settle_delay_ms, 1);
        assert_eq!(config.animation.duration_ms, 400);
        assert_eq!(config.animation.overlay_fade_ms, 200);
        assert_eq!(config.animation.rotation_degrees, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = StackConfig::new().buffer_size(5).settle_delay_ms(0);
        assert_eq!(config.buffer_size, 5);
        assert_eq!(config.settle_delay_ms, 0);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = StackConfig::new().buffer_size(0).validate().unwrap_err();
        assert!(matches!(
            err,
            StackError::InvalidConfiguration {
                field: "buffer_size",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_overshoot_rejected() {
        let animation = SwipeAnimationConfig {
            exit_overshoot: -0.5,
            ..SwipeAnimationConfig::default()
        };
        assert!(StackConfig::new().animation(animation).validate().is_err());
    }

    #[test]
    fn test_non_finite_rotation_rejected() {
        let animation = SwipeAnimationConfig {
            rotation_degrees: f32::NAN,
            ..SwipeAnimationConfig::default()
        };
        assert!(StackConfig::new().animation(animation).validate().is_err());
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = StackConfig::from_yaml("settle_delay_ms: 16").unwrap();
        assert_eq!(config.settle_delay_ms, 16);
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.animation, SwipeAnimationConfig::default());
    }

    #[test]
    fn test_from_yaml_validates() {
        let err = StackConfig::from_yaml("buffer_size: 0").unwrap_err();
        assert!(matches!(err, StackError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let err = StackConfig::from_yaml("buffer_size: [1, 2]").unwrap_err();
        assert!(matches!(err, StackError::Config(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = StackConfig::new().buffer_size(4);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(StackConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_json_easing_field() {
        let json = r#"{"animation": {"easing": "EaseOutQuad"}}"#;
        let config: StackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.animation.easing, EasingFunction::EaseOutQuad);
        assert_eq!(config.animation.duration_ms, 400);
    }
}
