//! Grid wipe: a grid of opaque cells pops in with random stagger to cover
//! the viewport, the content swaps underneath, and the cells pop back out.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::TransitionConfig;
use crate::stage::{AnchorId, Stage};

use super::{timing, StrategyStatus, TransitionRequest, TransitionStrategy};

enum Phase {
    CoverIn { start: Instant },
    Hold { start: Instant },
    FadeOut { start: Instant },
}

pub(super) struct GridWipe {
    stagger: Duration,
    hold: Duration,
    fade_out: Duration,
    cell_count: usize,
    /// Per-cell pop-in offsets within the stagger window
    in_delays: Vec<Duration>,
    /// Per-cell pop-out offsets, drawn fresh when the fade starts
    out_delays: Vec<Duration>,
    phase: Phase,
    degraded: bool,
}

impl GridWipe {
    pub(super) fn new(config: &TransitionConfig) -> Self {
        let cell_count = config.grid_cell_count();
        Self {
            stagger: config.grid_stagger(),
            hold: config.grid_hold(),
            fade_out: config.grid_fade_out(),
            cell_count,
            in_delays: random_delays(cell_count, config.grid_stagger()),
            out_delays: Vec::new(),
            phase: Phase::CoverIn {
                start: Instant::now(),
            },
            degraded: false,
        }
    }
}

fn random_delays(count: usize, window: Duration) -> Vec<Duration> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| window.mul_f64(rng.random_range(0.0..1.0)))
        .collect()
}

impl TransitionStrategy for GridWipe {
    fn begin(&mut self, _request: &TransitionRequest, stage: &mut dyn Stage, now: Instant) {
        if !stage.has_anchor(AnchorId::GridOverlay) {
            self.degraded = true;
            return;
        }
        stage.show(AnchorId::GridOverlay);
        for cell in 0..self.cell_count {
            stage.set_cell_opacity(AnchorId::GridOverlay, cell, 0.0);
        }
        self.phase = Phase::CoverIn { start: now };
    }

    fn tick(&mut self, stage: &mut dyn Stage, now: Instant) -> StrategyStatus {
        if self.degraded {
            return StrategyStatus::SwapAndComplete;
        }

        match self.phase {
            Phase::CoverIn { start } => {
                if timing::is_complete(start, now, self.stagger) {
                    for cell in 0..self.cell_count {
                        stage.set_cell_opacity(AnchorId::GridOverlay, cell, 1.0);
                    }
                    self.phase = Phase::Hold { start: now };
                    // Screen is fully covered: swap behind the grid.
                    return StrategyStatus::Swap;
                }
                for (cell, delay) in self.in_delays.iter().enumerate() {
                    let visible = now.saturating_duration_since(start) >= *delay;
                    stage.set_cell_opacity(
                        AnchorId::GridOverlay,
                        cell,
                        if visible { 1.0 } else { 0.0 },
                    );
                }
                StrategyStatus::Running
            }
            Phase::Hold { start } => {
                if timing::is_complete(start, now, self.hold) {
                    self.out_delays = random_delays(self.cell_count, self.fade_out);
                    self.phase = Phase::FadeOut { start: now };
                }
                StrategyStatus::Running
            }
            Phase::FadeOut { start } => {
                if timing::is_complete(start, now, self.fade_out) {
                    stage.hide(AnchorId::GridOverlay);
                    return StrategyStatus::Complete;
                }
                for (cell, delay) in self.out_delays.iter().enumerate() {
                    let gone = now.saturating_duration_since(start) >= *delay;
                    stage.set_cell_opacity(
                        AnchorId::GridOverlay,
                        cell,
                        if gone { 0.0 } else { 1.0 },
                    );
                }
                StrategyStatus::Running
            }
        }
    }
}
