//! Engine configuration and construction-time validation.
//!
//! A [`FractalConfig`] is a small value object handed to [`crate::fractal::Fractal::new`]
//! once. The tree shape it describes is fixed afterwards: changing the depth
//! means tearing the fractal down and constructing a new one, never resizing
//! mid-frame.

use std::f32::consts::PI;

use thiserror::Error;

/// Smallest accepted tree depth (a single root part).
pub const MIN_DEPTH: u32 = 1;
/// Largest accepted tree depth. Depth 8 already means 97_656 parts; anything
/// beyond that is a configuration mistake rather than a scene.
pub const MAX_DEPTH: u32 = 8;

/// Every non-root part has exactly five children.
pub const CHILD_COUNT: usize = 5;

/// How child orientations react to deviating from world-up.
///
/// `Rigid` places children with the parent's rotation only. `Sag` bends each
/// child slightly towards the ground, proportional to how far its composed
/// orientation tilts away from world-up, which makes branch-like fractals
/// droop organically instead of staying perfectly stiff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SagMode {
    Rigid,
    /// `max_angle` is the droop in radians applied at full deviation.
    Sag { max_angle: f32 },
}

impl SagMode {
    /// The droop used by branch-like fractals: a quarter turn at full tilt.
    pub fn branching() -> Self {
        SagMode::Sag {
            max_angle: 0.25 * PI,
        }
    }
}

impl Default for SagMode {
    fn default() -> Self {
        SagMode::Rigid
    }
}

/// Construction-time parameters of a fractal. Fan-out is fixed at five.
#[derive(Clone, Copy, Debug)]
pub struct FractalConfig {
    /// Number of tree levels, `MIN_DEPTH..=MAX_DEPTH`. Level `L` holds `5^L` parts.
    pub depth: u32,
    /// Spin accumulated by every part, in radians per second.
    pub spin_rate: f32,
    /// Orientation policy for child placement.
    pub sag: SagMode,
    /// Seed for the per-part procedural variation hashes.
    pub seed: i32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            // 22.5 degrees per second, the classic slow fractal spin.
            spin_rate: PI / 8.0,
            sag: SagMode::Rigid,
            seed: 0,
        }
    }
}

impl FractalConfig {
    /// Reject configurations the engine cannot build. Called by
    /// `Fractal::new` before any allocation happens, so a failed
    /// configuration never leaves partial state behind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth < MIN_DEPTH || self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        if !self.spin_rate.is_finite() {
            return Err(ConfigError::NonFiniteSpinRate(self.spin_rate));
        }
        if let SagMode::Sag { max_angle } = self.sag {
            if !max_angle.is_finite() || max_angle < 0.0 {
                return Err(ConfigError::InvalidSagAngle(max_angle));
            }
        }
        Ok(())
    }
}

/// Rejected configuration. These only surface at construction time; a
/// per-frame `update` has no failure path.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fractal depth {0} is outside the supported range {MIN_DEPTH}..={MAX_DEPTH}")]
    DepthOutOfRange(u32),
    #[error("spin rate must be finite, got {0}")]
    NonFiniteSpinRate(f32),
    #[error("sag angle must be finite and non-negative, got {0}")]
    InvalidSagAngle(f32),
}
