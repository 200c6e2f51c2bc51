//! Pure easing functions for transition animations.
//!
//! Maps input progress [0, 1] to output [0, 1] with various acceleration
//! curves. Used by the zoom strategy and configurable from the config file.

use serde::{Deserialize, Serialize};

/// Easing curve selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Snap to the end value (no animation)
    None,
    /// Constant velocity
    Linear,
    /// Cubic ease-out (fast start, gentle stop)
    Cubic,
    /// Quintic ease-out (very fast start, very gentle stop)
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Quadratic ease-in-out (slow start, fast middle, slow stop)
    #[default]
    EaseInOut,
}

impl EasingType {
    /// Apply the easing function to a progress value in [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::EaseInOut => quadratic_ease_in_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Quadratic ease-in-out: accelerate to the midpoint, decelerate after
#[inline]
fn quadratic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 2.0 * inv * inv
    }
}
