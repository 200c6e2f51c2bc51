//! Transition strategies and the orchestrator that runs them.
//!
//! Exactly one strategy animates at a time. Strategies are frame-polled:
//! the front-end calls [`TransitionOrchestrator::tick`] once per frame
//! with the current instant, and the strategy reports whether it wants
//! the content swapped, is still running, finished, or gave up.

pub mod easing;
pub mod timing;

mod grid;
mod instant;
mod mask;
mod zoom;

use std::fmt;
use std::time::Instant;

use crate::config::TransitionConfig;
use crate::input::Direction;
use crate::section::SectionId;
use crate::stage::Stage;

use grid::GridWipe;
use instant::InstantSwap;
use mask::MaskReveal;
use zoom::CinematicZoom;

/// Which visual treatment a section boundary uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Staggered grid of cells covers the screen, content swaps under it
    GridWipe,
    /// Central element scales up past the viewport, then fades away
    CinematicZoom,
    /// Incoming section revealed progressively by continued wheel input
    MaskReveal,
    /// Immediate swap with no animation
    Instant,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::GridWipe => "grid-wipe",
            StrategyKind::CinematicZoom => "cinematic-zoom",
            StrategyKind::MaskReveal => "mask-reveal",
            StrategyKind::Instant => "instant",
        };
        write!(f, "{}", name)
    }
}

/// A boundary crossing the sequencer has decided to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub from: SectionId,
    pub to: SectionId,
    pub direction: Direction,
    pub strategy: StrategyKind,
}

/// Terminal outcome of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The crossing finished; the destination section is now current
    Completed(TransitionRequest),
    /// The crossing was abandoned; the origin section stays current
    Cancelled(TransitionRequest),
}

/// What a strategy wants after one frame of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyStatus {
    Running,
    /// Swap the visible content now, keep animating
    Swap,
    /// Animation finished (swap already requested earlier)
    Complete,
    /// Swap and finish in the same frame
    SwapAndComplete,
    Cancelled,
}

trait TransitionStrategy {
    fn begin(&mut self, request: &TransitionRequest, stage: &mut dyn Stage, now: Instant);

    fn tick(&mut self, stage: &mut dyn Stage, now: Instant) -> StrategyStatus;

    /// Feed a wheel intent into a running strategy. Returns true if the
    /// strategy consumed it. Time-driven strategies ignore input.
    fn drive(&mut self, direction: Direction, now: Instant) -> bool {
        let _ = (direction, now);
        false
    }
}

struct ActiveTransition {
    request: TransitionRequest,
    strategy: Box<dyn TransitionStrategy>,
    swapped: bool,
}

/// Owns the single in-flight transition and enforces mutual exclusion.
///
/// The content swap is guarded here rather than in the strategies: no
/// matter what a strategy reports, `swap_content` runs at most once per
/// transition.
pub struct TransitionOrchestrator {
    config: TransitionConfig,
    active: Option<ActiveTransition>,
}

impl TransitionOrchestrator {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_request(&self) -> Option<&TransitionRequest> {
        self.active.as_ref().map(|a| &a.request)
    }

    /// Begin a transition. Returns false without touching the stage if
    /// another transition is already running.
    pub fn start(&mut self, request: TransitionRequest, stage: &mut dyn Stage, now: Instant) -> bool {
        if self.active.is_some() {
            return false;
        }

        let mut strategy: Box<dyn TransitionStrategy> = match request.strategy {
            StrategyKind::GridWipe => Box::new(GridWipe::new(&self.config)),
            StrategyKind::CinematicZoom => Box::new(CinematicZoom::new(&self.config)),
            StrategyKind::MaskReveal => Box::new(MaskReveal::new(&self.config)),
            StrategyKind::Instant => Box::new(InstantSwap::new()),
        };

        tracing::debug!(
            from = %request.from,
            to = %request.to,
            strategy = %request.strategy,
            "starting transition"
        );
        strategy.begin(&request, stage, now);
        self.active = Some(ActiveTransition {
            request,
            strategy,
            swapped: false,
        });
        true
    }

    /// Forward a wheel intent to the running strategy, if any.
    pub fn drive(&mut self, direction: Direction, now: Instant) -> bool {
        match self.active.as_mut() {
            Some(active) => active.strategy.drive(direction, now),
            None => false,
        }
    }

    /// Advance the running transition by one frame.
    pub fn tick(&mut self, stage: &mut dyn Stage, now: Instant) -> Option<TransitionEvent> {
        let active = self.active.as_mut()?;
        let status = active.strategy.tick(stage, now);

        match status {
            StrategyStatus::Running => None,
            StrategyStatus::Swap => {
                Self::swap_once(active, stage);
                None
            }
            StrategyStatus::Complete => {
                let request = active.request;
                self.active = None;
                Some(TransitionEvent::Completed(request))
            }
            StrategyStatus::SwapAndComplete => {
                Self::swap_once(active, stage);
                let request = active.request;
                self.active = None;
                Some(TransitionEvent::Completed(request))
            }
            StrategyStatus::Cancelled => {
                let request = active.request;
                self.active = None;
                Some(TransitionEvent::Cancelled(request))
            }
        }
    }

    fn swap_once(active: &mut ActiveTransition, stage: &mut dyn Stage) {
        if !active.swapped {
            stage.swap_content(active.request.from, active.request.to);
            active.swapped = true;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::NullStage;

    fn request(strategy: StrategyKind) -> TransitionRequest {
        TransitionRequest {
            from: SectionId::Hero,
            to: SectionId::Intro,
            direction: Direction::Forward,
            strategy,
        }
    }

    #[test]
    fn test_rejects_concurrent_start() {
        let mut orchestrator = TransitionOrchestrator::new(TransitionConfig::default());
        let mut stage = NullStage::new();
        let now = Instant::now();

        assert!(orchestrator.start(request(StrategyKind::MaskReveal), &mut stage, now));
        assert!(orchestrator.is_animating());
        assert!(!orchestrator.start(request(StrategyKind::GridWipe), &mut stage, now));
    }

    #[test]
    fn test_instant_swaps_and_completes_first_tick() {
        let mut orchestrator = TransitionOrchestrator::new(TransitionConfig::default());
        let mut stage = NullStage::new();
        let now = Instant::now();

        orchestrator.start(request(StrategyKind::Instant), &mut stage, now);
        let event = orchestrator.tick(&mut stage, now);
        assert_eq!(
            event,
            Some(TransitionEvent::Completed(request(StrategyKind::Instant)))
        );
        assert_eq!(stage.swaps, vec![(SectionId::Hero, SectionId::Intro)]);
        assert!(!orchestrator.is_animating());
    }

    #[test]
    fn test_missing_anchor_degrades_to_instant() {
        // NullStage has no anchors; every animated strategy should fall
        // back to a same-frame swap instead of stalling.
        for kind in [
            StrategyKind::GridWipe,
            StrategyKind::CinematicZoom,
            StrategyKind::MaskReveal,
        ] {
            let mut orchestrator = TransitionOrchestrator::new(TransitionConfig::default());
            let mut stage = NullStage::new();
            let now = Instant::now();

            orchestrator.start(request(kind), &mut stage, now);
            let event = orchestrator.tick(&mut stage, now);
            assert_eq!(
                event,
                Some(TransitionEvent::Completed(request(kind))),
                "{kind} did not degrade"
            );
            assert_eq!(stage.swaps.len(), 1, "{kind} swap count");
        }
    }

    #[test]
    fn test_swap_runs_at_most_once() {
        let mut orchestrator = TransitionOrchestrator::new(TransitionConfig::default());
        let mut stage = testutil::FakeStage::new();
        let start = Instant::now();

        orchestrator.start(request(StrategyKind::GridWipe), &mut stage, start);
        // Tick well past every phase boundary until completion.
        let mut now = start;
        for _ in 0..500 {
            now += std::time::Duration::from_millis(10);
            if orchestrator.tick(&mut stage, now).is_some() {
                break;
            }
        }
        assert!(!orchestrator.is_animating());
        assert_eq!(stage.swaps.len(), 1);
    }
}
