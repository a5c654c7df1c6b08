// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trail parameters.

use core::fmt;

/// The three parameters of a trail.
///
/// Values are not checked on construction; call [`TrailConfig::validate`]
/// (or construct through [`TrailConfig::try_new`]) when they come from an
/// untrusted source.
///
/// # Examples
///
/// ```
/// use ribbon::TrailConfig;
///
/// let config = TrailConfig::default().with_width(8.0);
/// assert_eq!(config, TrailConfig::new(8.0, 1.0, 10.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailConfig {
    /// Width of the trail at its newest end.
    pub width: f64,
    /// How long each vertex lasts, in seconds.
    pub lifetime: f64,
    /// The minimum distance the tracked position must travel from the newest
    /// vertex before another vertex is dropped.
    pub min_vertex_distance: f64,
}

/// The ways a [`TrailConfig`] can be invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The width was negative, infinite or NaN.
    InvalidWidth,
    /// The lifetime was not a positive finite number of seconds.
    InvalidLifetime,
    /// The minimum vertex distance was negative, infinite or NaN.
    InvalidMinVertexDistance,
}

impl TrailConfig {
    /// The default width, in surface units.
    pub const DEFAULT_WIDTH: f64 = 20.0;

    /// The default lifetime, in seconds.
    pub const DEFAULT_LIFETIME: f64 = 1.0;

    /// The default minimum vertex distance, in surface units.
    pub const DEFAULT_MIN_VERTEX_DISTANCE: f64 = 10.0;

    /// Create a new configuration.
    #[inline]
    pub const fn new(width: f64, lifetime: f64, min_vertex_distance: f64) -> TrailConfig {
        TrailConfig {
            width,
            lifetime,
            min_vertex_distance,
        }
    }

    /// Create a new configuration, checking that the values make sense.
    ///
    /// # Errors
    ///
    /// Returns the first parameter that fails [`TrailConfig::validate`].
    pub fn try_new(
        width: f64,
        lifetime: f64,
        min_vertex_distance: f64,
    ) -> Result<TrailConfig, ConfigError> {
        let config = TrailConfig::new(width, lifetime, min_vertex_distance);
        config.validate()?;
        Ok(config)
    }

    /// Builder method for setting the width.
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Builder method for setting the lifetime, in seconds.
    #[must_use]
    pub const fn with_lifetime(mut self, lifetime: f64) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Builder method for setting the minimum vertex distance.
    #[must_use]
    pub const fn with_min_vertex_distance(mut self, min_vertex_distance: f64) -> Self {
        self.min_vertex_distance = min_vertex_distance;
        self
    }

    /// The lifetime expressed in milliseconds, the unit of sample timestamps.
    #[inline]
    pub fn lifetime_millis(&self) -> f64 {
        self.lifetime * 1000.0
    }

    /// Check that every parameter is usable.
    ///
    /// A zero width or zero minimum vertex distance is allowed; a zero
    /// lifetime is not, since no vertex would ever survive a frame.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found to be out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(ConfigError::InvalidWidth);
        }
        if !(self.lifetime.is_finite() && self.lifetime > 0.0) {
            return Err(ConfigError::InvalidLifetime);
        }
        if !(self.min_vertex_distance.is_finite() && self.min_vertex_distance >= 0.0) {
            return Err(ConfigError::InvalidMinVertexDistance);
        }
        Ok(())
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        TrailConfig::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_LIFETIME,
            Self::DEFAULT_MIN_VERTEX_DISTANCE,
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth => {
                write!(f, "trail width must be a finite, non-negative number")
            }
            ConfigError::InvalidLifetime => {
                write!(f, "trail lifetime must be a finite, positive number of seconds")
            }
            ConfigError::InvalidMinVertexDistance => {
                write!(
                    f,
                    "minimum vertex distance must be a finite, non-negative number"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrailConfig::default();
        assert_eq!(config.width, 20.0);
        assert_eq!(config.lifetime, 1.0);
        assert_eq!(config.min_vertex_distance, 10.0);
        assert_eq!(config.lifetime_millis(), 1000.0);
    }

    #[test]
    fn builders() {
        let config = TrailConfig::default()
            .with_width(4.0)
            .with_lifetime(0.25)
            .with_min_vertex_distance(0.0);
        assert_eq!(config, TrailConfig::new(4.0, 0.25, 0.0));
        assert_eq!(config.lifetime_millis(), 250.0);
    }

    #[test]
    fn validation() {
        assert_eq!(TrailConfig::try_new(0.0, 0.5, 0.0), Ok(TrailConfig::new(0.0, 0.5, 0.0)));
        assert_eq!(
            TrailConfig::try_new(-1.0, 1.0, 10.0),
            Err(ConfigError::InvalidWidth)
        );
        assert_eq!(
            TrailConfig::try_new(f64::NAN, 1.0, 10.0),
            Err(ConfigError::InvalidWidth)
        );
        assert_eq!(
            TrailConfig::try_new(20.0, 0.0, 10.0),
            Err(ConfigError::InvalidLifetime)
        );
        assert_eq!(
            TrailConfig::try_new(20.0, f64::INFINITY, 10.0),
            Err(ConfigError::InvalidLifetime)
        );
        assert_eq!(
            TrailConfig::try_new(20.0, 1.0, -0.5),
            Err(ConfigError::InvalidMinVertexDistance)
        );
    }

    #[test]
    fn error_display() {
        let msg = format!("{}", ConfigError::InvalidLifetime);
        assert!(msg.contains("lifetime"));
    }
}
