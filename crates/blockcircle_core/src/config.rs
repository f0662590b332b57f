//! # Circle Configuration
//!
//! The immutable input to every engine stage.
//!
//! The engine fails fast on out-of-range input. Clamping user input into
//! range is the caller's job and never happens here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CircleError, CircleResult};

// =============================================================================
// LIMITS
// =============================================================================

/// Smallest supported radius in blocks.
pub const RADIUS_MIN: i32 = 1;

/// Largest supported radius in blocks.
pub const RADIUS_MAX: i32 = 50;

/// Radius used when nothing else is specified.
pub const DEFAULT_RADIUS: i32 = 5;

/// Which blocks of the circle are included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleMode {
    /// Boundary blocks only.
    #[default]
    Outline,
    /// Boundary and interior blocks.
    Filled,
}

impl CircleMode {
    /// Both modes, in display order.
    pub const ALL: [Self; 2] = [Self::Outline, Self::Filled];

    /// Returns the wire name of this mode.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Filled => "filled",
        }
    }

    /// Returns true for [`CircleMode::Filled`].
    #[inline]
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl fmt::Display for CircleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircleMode {
    type Err = CircleError;

    fn from_str(s: &str) -> CircleResult<Self> {
        match s {
            "outline" => Ok(Self::Outline),
            "filled" => Ok(Self::Filled),
            other => Err(CircleError::UnknownMode(other.to_string())),
        }
    }
}

/// A validated circle request.
///
/// Construction through [`CircleConfig::new`] guarantees
/// `RADIUS_MIN <= radius <= RADIUS_MAX`, so every downstream stage is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CircleConfig {
    radius: i32,
    mode: CircleMode,
}

impl CircleConfig {
    /// Creates a configuration, rejecting radii outside the supported range.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::RadiusOutOfRange`] if `radius` is below
    /// [`RADIUS_MIN`] or above [`RADIUS_MAX`].
    pub fn new(radius: i64, mode: CircleMode) -> CircleResult<Self> {
        if radius < i64::from(RADIUS_MIN) || radius > i64::from(RADIUS_MAX) {
            return Err(CircleError::RadiusOutOfRange {
                radius,
                min: RADIUS_MIN,
                max: RADIUS_MAX,
            });
        }
        Ok(Self {
            // Range check above guarantees the narrowing is lossless.
            radius: radius as i32,
            mode,
        })
    }

    /// Creates a configuration from a raw mode string.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::UnknownMode`] for an unrecognised mode and
    /// [`CircleError::RadiusOutOfRange`] for an unsupported radius.
    pub fn parse(radius: i64, mode: &str) -> CircleResult<Self> {
        let mode = mode.parse()?;
        Self::new(radius, mode)
    }

    /// Radius in blocks.
    #[inline]
    #[must_use]
    pub const fn radius(self) -> i32 {
        self.radius
    }

    /// Fill mode.
    #[inline]
    #[must_use]
    pub const fn mode(self) -> CircleMode {
        self.mode
    }

    /// Returns a copy with a different mode.
    #[inline]
    #[must_use]
    pub const fn with_mode(self, mode: CircleMode) -> Self {
        Self {
            radius: self.radius,
            mode,
        }
    }

    /// Width of the circle in blocks, center block included.
    #[inline]
    #[must_use]
    pub const fn diameter(self) -> i32 {
        self.radius * 2 + 1
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            mode: CircleMode::Outline,
        }
    }
}
