//! Wheel input normalization.
//!
//! Raw wheel events arrive as a noisy, high-frequency stream of vertical
//! deltas. The normalizer turns them into discrete directional intents,
//! rejecting anything inside the active debounce window. Rejected events
//! are dropped outright; there is no queueing.

use std::time::{Duration, Instant};

/// Navigation direction derived from the sign of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Deeper into the deck (scroll down).
    Forward,
    /// Back toward the start (scroll up).
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Zero deltas carry no direction and are rejected.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// A debounced, directional navigation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    pub direction: Direction,
    pub at: Instant,
}

/// Turns raw wheel deltas into at most one intent per debounce window.
#[derive(Debug, Default)]
pub struct InputNormalizer {
    last_accepted: Option<Instant>,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject a raw wheel event.
    ///
    /// `window` is the active debounce window; sections with sub-progress
    /// typically use a shorter one than boundary-only sections. On
    /// acceptance `last_accepted` is updated before the intent is handed
    /// downstream, so a burst arriving during slow downstream work cannot
    /// re-enter.
    pub fn normalize(
        &mut self,
        delta_y: f64,
        now: Instant,
        window: Duration,
    ) -> Option<NavigationIntent> {
        let direction = Direction::from_delta(delta_y)?;

        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < window {
                return None;
            }
        }

        self.last_accepted = Some(now);
        Some(NavigationIntent { direction, at: now })
    }

    /// Forget the last accepted timestamp, re-arming the normalizer.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
