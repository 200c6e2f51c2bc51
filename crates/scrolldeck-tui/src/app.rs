use std::time::Instant;

use scrolldeck_core::{Deck, DeckConfig, DeckHooks, Direction, SectionId, Sequencer};

use crate::input::Action;
use crate::stage::TermStage;

/// Status bar messages surfaced by sequencer hooks.
#[derive(Debug, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl DeckHooks for StatusLine {
    fn on_enter_forward(&mut self, _section: SectionId) {
        self.message = None;
    }

    fn on_enter_backward(&mut self, _section: SectionId) {
        self.message = None;
    }

    fn on_edge_reached(&mut self, _section: SectionId, direction: Direction) {
        self.message = Some(match direction {
            Direction::Backward => "Already at the first section".to_string(),
            Direction::Forward => "Already at the last section".to_string(),
        });
    }
}

/// Top-level application state
pub struct App {
    pub config: DeckConfig,
    pub sequencer: Sequencer,
    pub stage: TermStage,
    pub status: StatusLine,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: DeckConfig, start: Option<SectionId>) -> Self {
        let deck = Deck::standard();
        let start = start.unwrap_or_else(|| deck.first());
        let sequencer = Sequencer::with_start(deck, config.transition.clone(), start);
        let stage = TermStage::new(start, &config.transition);
        Self {
            config,
            sequencer,
            stage,
            status: StatusLine::default(),
            should_quit: false,
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Forward => {
                self.sequencer
                    .request_forward(now, &mut self.stage, &mut self.status)
            }
            Action::Backward => {
                self.sequencer
                    .request_backward(now, &mut self.stage, &mut self.status)
            }
            Action::None => {}
        }
    }

    pub fn handle_wheel(&mut self, delta_y: f64, now: Instant) {
        self.sequencer
            .handle_wheel(delta_y, now, &mut self.stage, &mut self.status);
    }

    pub fn tick(&mut self, now: Instant) {
        self.sequencer.tick(now, &mut self.stage, &mut self.status);
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_transitioning()
    }

    /// Sub-progress of the section currently on screen, if it is the
    /// logical current section (during a transition they can differ).
    pub fn visible_sub_progress(&self) -> Option<i32> {
        if self.stage.visible_section == self.sequencer.current_section() {
            self.sequencer.sub_progress()
        } else {
            None
        }
    }
}
