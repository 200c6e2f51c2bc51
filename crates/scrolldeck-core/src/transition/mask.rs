//! Mask reveal: the incoming section is uncovered progressively by
//! continued wheel input instead of a timed animation. Scrolling the
//! other way retracts the reveal; retract far enough and the crossing
//! is abandoned.

use std::time::{Duration, Instant};

use crate::config::TransitionConfig;
use crate::input::Direction;
use crate::stage::{AnchorId, Stage};

use super::{StrategyStatus, TransitionRequest, TransitionStrategy};

pub(super) struct MaskReveal {
    step: f64,
    complete_at: f64,
    cancel_below: f64,
    throttle: Duration,
    /// Direction of the crossing; wheel intents along it reveal,
    /// against it retract.
    travel: Direction,
    /// Revealed portion of the incoming section, 0..=100.
    progress: f64,
    last_applied: Option<Instant>,
    /// Set once a retraction step lands, cleared by the next reveal
    /// step. Prevents cancelling a reveal that never moved backward.
    retracted: bool,
    degraded: bool,
}

impl MaskReveal {
    pub(super) fn new(config: &TransitionConfig) -> Self {
        Self {
            step: config.mask_step,
            complete_at: config.mask_complete_at,
            cancel_below: config.mask_cancel_below,
            throttle: config.mask_throttle(),
            travel: Direction::Forward,
            progress: 0.0,
            last_applied: None,
            retracted: false,
            degraded: false,
        }
    }

    #[cfg(test)]
    fn progress(&self) -> f64 {
        self.progress
    }
}

impl TransitionStrategy for MaskReveal {
    fn begin(&mut self, request: &TransitionRequest, stage: &mut dyn Stage, _now: Instant) {
        self.travel = request.direction;
        if !stage.has_anchor(AnchorId::MaskOverlay) {
            self.degraded = true;
            return;
        }
        stage.show(AnchorId::MaskOverlay);
        stage.set_clip_top_inset(AnchorId::MaskOverlay, 100.0);
    }

    fn tick(&mut self, stage: &mut dyn Stage, now: Instant) -> StrategyStatus {
        let _ = now;
        if self.degraded {
            return StrategyStatus::SwapAndComplete;
        }

        stage.set_clip_top_inset(AnchorId::MaskOverlay, 100.0 - self.progress);

        if self.progress >= self.complete_at {
            stage.set_clip_top_inset(AnchorId::MaskOverlay, 0.0);
            stage.hide(AnchorId::MaskOverlay);
            return StrategyStatus::SwapAndComplete;
        }
        if self.retracted && self.progress <= self.cancel_below {
            stage.hide(AnchorId::MaskOverlay);
            return StrategyStatus::Cancelled;
        }
        StrategyStatus::Running
    }

    fn drive(&mut self, direction: Direction, now: Instant) -> bool {
        if self.degraded {
            return false;
        }
        // Wheel intents are consumed even when the throttle drops them,
        // so they never leak back into the sequencer.
        if let Some(last) = self.last_applied {
            if now.saturating_duration_since(last) < self.throttle {
                return true;
            }
        }
        self.last_applied = Some(now);

        if direction == self.travel {
            self.progress = (self.progress + self.step).min(100.0);
            self.retracted = false;
        } else {
            self.progress = (self.progress - self.step).max(0.0);
            self.retracted = true;
        }
        true
    }
}
