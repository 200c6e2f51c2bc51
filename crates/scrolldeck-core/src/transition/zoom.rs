//! Cinematic zoom: a central element scales up until it fills the
//! viewport, the content swaps behind it, and the element fades out.

use std::time::{Duration, Instant};

use crate::config::TransitionConfig;
use crate::stage::{AnchorId, Stage};

use super::easing::EasingType;
use super::{timing, StrategyStatus, TransitionRequest, TransitionStrategy};

enum Phase {
    ZoomIn { start: Instant },
    FadeOut { start: Instant },
}

pub(super) struct CinematicZoom {
    duration: Duration,
    peak_scale: f64,
    fade_out: Duration,
    easing: EasingType,
    phase: Phase,
    degraded: bool,
}

impl CinematicZoom {
    pub(super) fn new(config: &TransitionConfig) -> Self {
        Self {
            duration: config.zoom_duration(),
            peak_scale: config.zoom_peak_scale,
            fade_out: config.zoom_fade_out(),
            easing: config.zoom_easing,
            phase: Phase::ZoomIn {
                start: Instant::now(),
            },
            degraded: false,
        }
    }
}

impl TransitionStrategy for CinematicZoom {
    fn begin(&mut self, _request: &TransitionRequest, stage: &mut dyn Stage, now: Instant) {
        if !stage.has_anchor(AnchorId::ZoomOverlay) {
            self.degraded = true;
            return;
        }
        stage.show(AnchorId::ZoomOverlay);
        stage.set_scale(AnchorId::ZoomOverlay, 1.0);
        stage.set_opacity(AnchorId::ZoomOverlay, 1.0);
        self.phase = Phase::ZoomIn { start: now };
    }

    fn tick(&mut self, stage: &mut dyn Stage, now: Instant) -> StrategyStatus {
        if self.degraded {
            return StrategyStatus::SwapAndComplete;
        }

        match self.phase {
            Phase::ZoomIn { start } => {
                let t = timing::progress(start, now, self.duration);
                let eased = self.easing.apply(t);
                stage.set_scale(
                    AnchorId::ZoomOverlay,
                    timing::lerp(1.0, self.peak_scale, eased),
                );
                if t >= 1.0 {
                    self.phase = Phase::FadeOut { start: now };
                    // Overlay now covers everything: swap behind it.
                    return StrategyStatus::Swap;
                }
                StrategyStatus::Running
            }
            Phase::FadeOut { start } => {
                let t = timing::progress(start, now, self.fade_out);
                stage.set_opacity(AnchorId::ZoomOverlay, 1.0 - t);
                if t >= 1.0 {
                    stage.hide(AnchorId::ZoomOverlay);
                    return StrategyStatus::Complete;
                }
                StrategyStatus::Running
            }
        }
    }
}
