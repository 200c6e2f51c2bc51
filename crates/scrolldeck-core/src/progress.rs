//! Sub-progress: the bounded step counter owned by sections with an
//! internal multi-step reveal (card carousels, staged menus).
//!
//! The counter always stays inside `[min, max]`. At a boundary, extra
//! same-direction intents accumulate in an overflow counter; once it
//! reaches the section's threshold the section is exhausted in that
//! direction and the sequencer may cross the boundary.

use crate::input::Direction;
use crate::section::{SectionId, SubProgressSpec};

/// Result of applying one intent to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// The step value moved (visual state must be re-rendered).
    pub changed: bool,
    /// Value after the intent.
    pub value: i32,
    /// The overflow threshold was reached; the boundary may be crossed.
    pub overflowed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubProgressState {
    pub section: SectionId,
    value: i32,
    overflow_count: u8,
    overflow_direction: Option<Direction>,
}

impl SubProgressState {
    /// Fresh state for a section entered by crossing a boundary.
    ///
    /// Forward entry starts at `min`, backward entry at `max`: a section
    /// entered "from the end" must present itself already walked through.
    /// In both cases the outward direction is pre-loaded to one intent
    /// short of the threshold, so a single further intent back out
    /// re-crosses the boundary instead of demanding the full overflow
    /// count again.
    pub fn entered(section: SectionId, spec: &SubProgressSpec, entry: Direction) -> Self {
        let value = match entry {
            Direction::Forward => spec.min,
            Direction::Backward => spec.max,
        };
        Self {
            section,
            value,
            overflow_count: spec.overflow_threshold.saturating_sub(1),
            overflow_direction: Some(entry.opposite()),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Apply one directional intent.
    pub fn apply(&mut self, spec: &SubProgressSpec, direction: Direction) -> Advance {
        // Oscillating input must not fast-forward an exhaustion that was
        // being accumulated in the other direction.
        if self.overflow_count > 0 && self.overflow_direction != Some(direction) {
            self.overflow_count = 0;
        }

        let at_boundary = match direction {
            Direction::Forward => self.value >= spec.max,
            Direction::Backward => self.value <= spec.min,
        };

        if !at_boundary {
            self.value += match direction {
                Direction::Forward => 1,
                Direction::Backward => -1,
            };
            self.overflow_count = 0;
            self.overflow_direction = None;
            return Advance {
                changed: true,
                value: self.value,
                overflowed: false,
            };
        }

        self.overflow_direction = Some(direction);
        self.overflow_count += 1;
        let overflowed = self.overflow_count >= spec.overflow_threshold;
        if overflowed {
            self.overflow_count = 0;
        }
        Advance {
            changed: false,
            value: self.value,
            overflowed,
        }
    }
}
