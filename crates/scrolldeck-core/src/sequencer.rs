//! The layered state machine that turns navigation intents into section
//! changes, sub-progress steps, and transition requests.
//!
//! Layering, outermost first: which section is current, where that
//! section's internal counter sits, and whether a boundary crossing is
//! animating. Wheel input enters at the top and is resolved by exactly
//! one layer.

use std::time::Instant;

use crate::config::TransitionConfig;
use crate::input::{Direction, InputNormalizer, NavigationIntent};
use crate::progress::SubProgressState;
use crate::section::{Deck, SectionId};
use crate::stage::Stage;
use crate::transition::{TransitionEvent, TransitionOrchestrator, TransitionRequest};

/// Observer callbacks fired as the deck moves. All default to no-ops.
pub trait DeckHooks {
    fn on_enter_forward(&mut self, _section: SectionId) {}
    fn on_enter_backward(&mut self, _section: SectionId) {}
    fn on_sub_progress_changed(&mut self, _section: SectionId, _value: i32, _max: i32) {}
    fn on_edge_reached(&mut self, _section: SectionId, _direction: Direction) {}
}

pub struct NullHooks;

impl DeckHooks for NullHooks {}

pub struct Sequencer {
    deck: Deck,
    current: SectionId,
    sub_progress: Option<SubProgressState>,
    normalizer: InputNormalizer,
    orchestrator: TransitionOrchestrator,
}

impl Sequencer {
    pub fn new(deck: Deck, transition: TransitionConfig) -> Self {
        let first = deck.first();
        Self::with_start(deck, transition, first)
    }

    /// Start somewhere other than the first section. The section is
    /// treated as entered moving forward.
    pub fn with_start(deck: Deck, transition: TransitionConfig, start: SectionId) -> Self {
        let sub_progress = deck
            .sub_progress_spec(start)
            .map(|spec| SubProgressState::entered(start, &spec, Direction::Forward));
        Self {
            deck,
            current: start,
            sub_progress,
            normalizer: InputNormalizer::new(),
            orchestrator: TransitionOrchestrator::new(transition),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    /// Internal step value of the current section, if it has one.
    pub fn sub_progress(&self) -> Option<i32> {
        self.sub_progress.as_ref().map(|s| s.value())
    }

    pub fn is_transitioning(&self) -> bool {
        self.orchestrator.is_animating()
    }

    pub fn active_transition(&self) -> Option<&TransitionRequest> {
        self.orchestrator.active_request()
    }

    /// Feed a raw wheel delta. While a transition is animating the delta
    /// goes to the running strategy (which may ignore it); otherwise it
    /// passes through the debounce and, if accepted, moves the deck.
    pub fn handle_wheel(
        &mut self,
        delta_y: f64,
        now: Instant,
        stage: &mut dyn Stage,
        hooks: &mut dyn DeckHooks,
    ) {
        if self.orchestrator.is_animating() {
            if let Some(direction) = Direction::from_delta(delta_y) {
                if !self.orchestrator.drive(direction, now) {
                    tracing::trace!("wheel dropped during transition");
                }
                self.pump(now, stage, hooks);
            }
            return;
        }

        let window = self.deck.debounce(self.current);
        if let Some(intent) = self.normalizer.normalize(delta_y, now, window) {
            self.on_intent(intent, stage, hooks);
        }
    }

    /// Key-driven forward step. Skips the wheel debounce but otherwise
    /// behaves like an accepted forward intent.
    pub fn request_forward(&mut self, now: Instant, stage: &mut dyn Stage, hooks: &mut dyn DeckHooks) {
        self.request(Direction::Forward, now, stage, hooks);
    }

    pub fn request_backward(&mut self, now: Instant, stage: &mut dyn Stage, hooks: &mut dyn DeckHooks) {
        self.request(Direction::Backward, now, stage, hooks);
    }

    fn request(
        &mut self,
        direction: Direction,
        now: Instant,
        stage: &mut dyn Stage,
        hooks: &mut dyn DeckHooks,
    ) {
        if self.orchestrator.is_animating() {
            if !self.orchestrator.drive(direction, now) {
                tracing::trace!("key navigation dropped during transition");
            }
            self.pump(now, stage, hooks);
            return;
        }
        self.on_intent(NavigationIntent { direction, at: now }, stage, hooks);
    }

    /// Advance the running transition (if any) by one frame.
    pub fn tick(&mut self, now: Instant, stage: &mut dyn Stage, hooks: &mut dyn DeckHooks) {
        self.pump(now, stage, hooks);
    }

    fn on_intent(
        &mut self,
        intent: NavigationIntent,
        stage: &mut dyn Stage,
        hooks: &mut dyn DeckHooks,
    ) {
        // The inner counter gets first claim on the intent.
        if let (Some(spec), Some(state)) = (
            self.deck.sub_progress_spec(self.current),
            self.sub_progress.as_mut(),
        ) {
            let advance = state.apply(&spec, intent.direction);
            if advance.changed {
                hooks.on_sub_progress_changed(self.current, advance.value, spec.max);
                return;
            }
            if !advance.overflowed {
                // Pinned at the boundary, threshold not yet reached.
                return;
            }
        }

        let Some(to) = self.deck.neighbor(self.current, intent.direction) else {
            hooks.on_edge_reached(self.current, intent.direction);
            return;
        };

        let request = TransitionRequest {
            from: self.current,
            to,
            direction: intent.direction,
            strategy: self.deck.strategy(self.current, to),
        };
        if self.orchestrator.start(request, stage, intent.at) {
            // Instant and degraded strategies finish in the same frame.
            self.pump(intent.at, stage, hooks);
        }
    }

    fn pump(&mut self, now: Instant, stage: &mut dyn Stage, hooks: &mut dyn DeckHooks) {
        match self.orchestrator.tick(stage, now) {
            Some(TransitionEvent::Completed(request)) => self.commit(request, hooks),
            Some(TransitionEvent::Cancelled(request)) => {
                tracing::debug!(from = %request.from, to = %request.to, "transition cancelled");
            }
            None => {}
        }
    }

    fn commit(&mut self, request: TransitionRequest, hooks: &mut dyn DeckHooks) {
        self.current = request.to;
        self.sub_progress = self
            .deck
            .sub_progress_spec(request.to)
            .map(|spec| SubProgressState::entered(request.to, &spec, request.direction));
        tracing::info!(section = %request.to, strategy = %request.strategy, "entered section");
        match request.direction {
            Direction::Forward => hooks.on_enter_forward(request.to),
            Direction::Backward => hooks.on_enter_backward(request.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::NullStage;
    use std::time::Duration;

    struct RecordingHooks {
        entered: Vec<(SectionId, Direction)>,
        sub_progress: Vec<(SectionId, i32)>,
        edges: Vec<(SectionId, Direction)>,
    }

    impl RecordingHooks {
        fn new() -> Self {
            Self {
                entered: Vec::new(),
                sub_progress: Vec::new(),
                edges: Vec::new(),
            }
        }
    }

    impl DeckHooks for RecordingHooks {
        fn on_enter_forward(&mut self, section: SectionId) {
            self.entered.push((section, Direction::Forward));
        }
        fn on_enter_backward(&mut self, section: SectionId) {
            self.entered.push((section, Direction::Backward));
        }
        fn on_sub_progress_changed(&mut self, section: SectionId, value: i32, _max: i32) {
            self.sub_progress.push((section, value));
        }
        fn on_edge_reached(&mut self, section: SectionId, direction: Direction) {
            self.edges.push((section, direction));
        }
    }

    fn sequencer() -> Sequencer {
        Sequencer::new(Deck::standard(), TransitionConfig::default())
    }

    fn sequencer_at(start: SectionId) -> Sequencer {
        Sequencer::with_start(Deck::standard(), TransitionConfig::default(), start)
    }

    /// Send one wheel step, spaced past any debounce window, and run the
    /// resulting transition to completion against a bare stage.
    fn scroll(
        seq: &mut Sequencer,
        delta: f64,
        now: &mut Instant,
        stage: &mut NullStage,
        hooks: &mut RecordingHooks,
    ) {
        *now += Duration::from_millis(1100);
        seq.handle_wheel(delta, *now, stage, hooks);
        // With NullStage every strategy degrades to a same-frame swap,
        // but run a few extra frames in case a future strategy needs them.
        for _ in 0..3 {
            *now += Duration::from_millis(16);
            seq.tick(*now, stage, hooks);
        }
    }

    #[test]
    fn test_full_forward_walk() {
        let mut seq = sequencer();
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        assert_eq!(seq.current_section(), SectionId::Hero);
        // Hero..Footer is 10 boundary crossings, plus the interior steps
        // of every sub-progress section along the way.
        let mut steps = 0;
        while seq.current_section() != SectionId::Footer && steps < 200 {
            scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
            steps += 1;
        }
        assert_eq!(seq.current_section(), SectionId::Footer);
        assert_eq!(
            hooks.entered.iter().filter(|(_, d)| *d == Direction::Forward).count(),
            10
        );
    }

    #[test]
    fn test_round_trip_returns_to_start() {
        let mut seq = sequencer();
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        let mut steps = 0;
        while seq.current_section() != SectionId::Footer && steps < 200 {
            scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
            steps += 1;
        }
        steps = 0;
        while seq.current_section() != SectionId::Hero && steps < 200 {
            scroll(&mut seq, -1.0, &mut now, &mut stage, &mut hooks);
            steps += 1;
        }
        assert_eq!(seq.current_section(), SectionId::Hero);
    }

    #[test]
    fn test_sub_progress_consumes_intents_before_crossing() {
        let mut seq = sequencer_at(SectionId::Benefits);
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        assert_eq!(seq.sub_progress(), Some(0));
        // 15 steps walk the counter to its max without leaving.
        for _ in 0..15 {
            scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        }
        assert_eq!(seq.current_section(), SectionId::Benefits);
        assert_eq!(seq.sub_progress(), Some(15));
        assert_eq!(hooks.sub_progress.len(), 15);

        // Threshold of 2 at the max: first overflow arms, second crosses.
        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::Benefits);
        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::Problem);
    }

    #[test]
    fn test_backward_entry_lands_at_max() {
        let mut seq = sequencer_at(SectionId::WhoAreWe);
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        scroll(&mut seq, -1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::Projects);
        assert_eq!(seq.sub_progress(), Some(31));
        assert_eq!(hooks.entered, vec![(SectionId::Projects, Direction::Backward)]);
    }

    #[test]
    fn test_projects_zoom_walk_exhausts_before_crossing() {
        let mut seq = sequencer_at(SectionId::Projects);
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        // The intro, five projects at six zoom levels each, and the
        // closing dim step: 31 interior steps before the boundary arms.
        for expected in 1..=31 {
            scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
            assert_eq!(seq.current_section(), SectionId::Projects);
            assert_eq!(seq.sub_progress(), Some(expected));
        }
        assert_eq!(hooks.sub_progress.len(), 31);

        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::WhoAreWe);
    }

    #[test]
    fn test_with_spec_tunes_a_section_walk() {
        use crate::section::{SectionSpec, SubProgressSpec};

        let deck = Deck::standard().with_spec(SectionSpec {
            id: SectionId::Projects,
            debounce: Duration::from_millis(400),
            sub_progress: Some(SubProgressSpec {
                min: 0,
                max: 2,
                overflow_threshold: 1,
            }),
        });
        let mut seq = Sequencer::with_start(deck, TransitionConfig::default(), SectionId::Projects);
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.sub_progress(), Some(2));
        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::WhoAreWe);
    }

    #[test]
    fn test_entry_direction_is_pre_exhausted() {
        // Entering Projects backward leaves the forward overflow counter
        // one short of its threshold: a single forward intent at the max
        // crosses straight back out.
        let mut seq = sequencer_at(SectionId::WhoAreWe);
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        scroll(&mut seq, -1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::Projects);
        scroll(&mut seq, 1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::WhoAreWe);
    }

    #[test]
    fn test_edge_hook_fires_at_ends() {
        let mut seq = sequencer();
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        scroll(&mut seq, -1.0, &mut now, &mut stage, &mut hooks);
        assert_eq!(seq.current_section(), SectionId::Hero);
        assert_eq!(hooks.edges, vec![(SectionId::Hero, Direction::Backward)]);
    }

    #[test]
    fn test_debounce_swallows_rapid_wheel() {
        let mut seq = sequencer();
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let now = Instant::now();

        // Hero debounce is 1000ms; only the first event lands.
        seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        seq.handle_wheel(1.0, now + Duration::from_millis(100), &mut stage, &mut hooks);
        seq.handle_wheel(1.0, now + Duration::from_millis(200), &mut stage, &mut hooks);
        // NullStage: the first crossing completed in-frame, landing on
        // Intro; the rest fell inside the debounce window.
        assert_eq!(seq.current_section(), SectionId::Intro);
        assert_eq!(hooks.entered.len(), 1);
    }

    #[test]
    fn test_wheel_is_dropped_while_timed_transition_runs() {
        use crate::transition::testutil::FakeStage;

        let mut seq = sequencer();
        let mut stage = FakeStage::new();
        let mut hooks = RecordingHooks::new();
        let now = Instant::now();

        // Hero -> Intro is a grid wipe; against a full stage it animates.
        seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        assert!(seq.is_transitioning());

        // Wheel spam mid-animation neither queues nor interrupts.
        seq.handle_wheel(1.0, now + Duration::from_millis(1200), &mut stage, &mut hooks);
        seq.handle_wheel(-1.0, now + Duration::from_millis(2400), &mut stage, &mut hooks);
        assert!(seq.is_transitioning());
        assert_eq!(seq.current_section(), SectionId::Hero);

        // Run it out: stagger + hold + fade, from where the clock left off.
        let mut t = now + Duration::from_millis(2400);
        for _ in 0..100 {
            t += Duration::from_millis(16);
            seq.tick(t, &mut stage, &mut hooks);
        }
        assert!(!seq.is_transitioning());
        assert_eq!(seq.current_section(), SectionId::Intro);
        assert_eq!(stage.swaps.len(), 1);
        assert_eq!(hooks.entered, vec![(SectionId::Intro, Direction::Forward)]);
    }

    #[test]
    fn test_mask_cancel_stays_on_origin() {
        use crate::transition::testutil::FakeStage;

        // Raise the completion threshold so a 60% reveal can retract.
        let config = TransitionConfig {
            mask_complete_at: 75.0,
            ..TransitionConfig::default()
        };
        let mut seq = Sequencer::with_start(Deck::standard(), config, SectionId::Cta);
        let mut stage = FakeStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        now += Duration::from_millis(1100);
        seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        assert!(seq.is_transitioning());

        // Reveal to 60, then retract to the cancel floor.
        for _ in 0..15 {
            now += Duration::from_millis(60);
            seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        }
        assert!(seq.is_transitioning());
        // 14 retract steps land on 4.0, under the 5.0 cancel floor.
        for _ in 0..14 {
            now += Duration::from_millis(60);
            seq.handle_wheel(-1.0, now, &mut stage, &mut hooks);
        }
        now += Duration::from_millis(16);
        seq.tick(now, &mut stage, &mut hooks);

        assert!(!seq.is_transitioning());
        assert_eq!(seq.current_section(), SectionId::Cta);
        assert!(stage.swaps.is_empty());
        assert!(hooks.entered.is_empty());
    }

    #[test]
    fn test_mask_complete_crosses() {
        use crate::transition::testutil::FakeStage;

        let mut seq = sequencer_at(SectionId::Cta);
        let mut stage = FakeStage::new();
        let mut hooks = RecordingHooks::new();
        let mut now = Instant::now();

        now += Duration::from_millis(1100);
        seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        assert!(seq.is_transitioning());

        // 13 steps of 4.0 pass the default 50.0 completion threshold.
        for _ in 0..13 {
            now += Duration::from_millis(60);
            seq.handle_wheel(1.0, now, &mut stage, &mut hooks);
        }
        assert!(!seq.is_transitioning());
        assert_eq!(seq.current_section(), SectionId::Footer);
        assert_eq!(stage.swaps, vec![(SectionId::Cta, SectionId::Footer)]);
    }

    #[test]
    fn test_key_navigation_skips_debounce() {
        let mut seq = sequencer();
        let mut stage = NullStage::new();
        let mut hooks = RecordingHooks::new();
        let now = Instant::now();

        seq.request_forward(now, &mut stage, &mut hooks);
        seq.request_forward(now + Duration::from_millis(10), &mut stage, &mut hooks);
        // Two immediate crossings despite Hero's 1000ms wheel debounce.
        assert_eq!(seq.current_section(), SectionId::Benefits);
    }
}
