//! The deck: the fixed ordered set of sections, their sub-progress
//! specs, debounce windows and the transition table between neighbors.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::input::Direction;
use crate::transition::StrategyKind;

/// One full-screen narrative unit. The order of the variants is the
/// deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Intro,
    Benefits,
    Problem,
    Interface,
    Results,
    HowItWorks,
    Projects,
    WhoAreWe,
    Cta,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 11] = [
        SectionId::Hero,
        SectionId::Intro,
        SectionId::Benefits,
        SectionId::Problem,
        SectionId::Interface,
        SectionId::Results,
        SectionId::HowItWorks,
        SectionId::Projects,
        SectionId::WhoAreWe,
        SectionId::Cta,
        SectionId::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Intro => "intro",
            SectionId::Benefits => "benefits",
            SectionId::Problem => "problem",
            SectionId::Interface => "interface",
            SectionId::Results => "results",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Projects => "projects",
            SectionId::WhoAreWe => "who-are-we",
            SectionId::Cta => "cta",
            SectionId::Footer => "footer",
        }
    }

    /// Position in deck order.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// Bounds and overflow behavior for a section's internal step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubProgressSpec {
    pub min: i32,
    pub max: i32,
    /// Extra same-direction intents absorbed at a boundary before the
    /// section counts as exhausted in that direction.
    pub overflow_threshold: u8,
}

/// Static per-section definition. Immutable once the deck is built.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub id: SectionId,
    /// Debounce window for wheel input while this section is current.
    pub debounce: Duration,
    pub sub_progress: Option<SubProgressSpec>,
}

/// Ordered, immutable definition of the whole deck.
///
/// Pure lookup structure: neighbors are adjacency in deck order, and the
/// transition strategy for each crossing is a static table keyed by the
/// ordered section pair.
#[derive(Debug, Clone)]
pub struct Deck {
    specs: [SectionSpec; SectionId::ALL.len()],
}

impl Deck {
    /// The deck as shipped: eleven sections, four of them with staged
    /// internal reveals.
    pub fn standard() -> Self {
        let boundary = Duration::from_millis(1000);
        let spec = |id: SectionId, debounce_ms: u64, sub: Option<SubProgressSpec>| SectionSpec {
            id,
            debounce: Duration::from_millis(debounce_ms),
            sub_progress: sub,
        };
        let steps = |min: i32, max: i32, overflow_threshold: u8| {
            Some(SubProgressSpec {
                min,
                max,
                overflow_threshold,
            })
        };

        Self {
            specs: [
                SectionSpec {
                    id: SectionId::Hero,
                    debounce: boundary,
                    sub_progress: None,
                },
                spec(SectionId::Intro, 1000, None),
                // Card carousel: sixteen positions, two extra scrolls to leave.
                spec(SectionId::Benefits, 600, steps(0, 15, 2)),
                spec(SectionId::Problem, 1000, None),
                spec(SectionId::Interface, 1000, None),
                // Staged menu: four rows appear, then vanish one by one.
                spec(SectionId::Results, 300, steps(0, 8, 1)),
                spec(SectionId::HowItWorks, 300, steps(0, 5, 1)),
                // Project walk with per-project zoom staging flattened
                // into one range: 0 is the intro text, each of the five
                // projects then holds six zoom levels (1..=30), and 31
                // dims the last project before the boundary.
                spec(SectionId::Projects, 400, steps(0, 31, 1)),
                spec(SectionId::WhoAreWe, 1000, None),
                spec(SectionId::Cta, 1000, None),
                spec(SectionId::Footer, 1000, None),
            ],
        }
    }

    /// Replace one section's spec. Used to tune thresholds in tests and
    /// custom decks; the order itself is fixed.
    pub fn with_spec(mut self, spec: SectionSpec) -> Self {
        self.specs[spec.id.ordinal()] = spec;
        self
    }

    pub fn first(&self) -> SectionId {
        SectionId::ALL[0]
    }

    pub fn spec(&self, id: SectionId) -> &SectionSpec {
        &self.specs[id.ordinal()]
    }

    pub fn sub_progress_spec(&self, id: SectionId) -> Option<SubProgressSpec> {
        self.spec(id).sub_progress
    }

    pub fn debounce(&self, id: SectionId) -> Duration {
        self.spec(id).debounce
    }

    /// Adjacent section in the given direction, `None` at the deck ends.
    pub fn neighbor(&self, id: SectionId, direction: Direction) -> Option<SectionId> {
        let ordinal = id.ordinal();
        match direction {
            Direction::Forward => SectionId::ALL.get(ordinal + 1).copied(),
            Direction::Backward => ordinal.checked_sub(1).map(|i| SectionId::ALL[i]),
        }
    }

    /// Transition effect for a crossing. Keyed by the ordered pair; the
    /// table is deliberately asymmetric in places (a zoom into the
    /// interface, a wipe back out of it).
    pub fn strategy(&self, from: SectionId, to: SectionId) -> StrategyKind {
        use SectionId::*;
        match (from, to) {
            (Hero, Intro)
            | (Intro, Hero)
            | (Intro, Benefits)
            | (Benefits, Intro)
            | (Benefits, Problem)
            | (Problem, Benefits)
            | (Interface, Problem)
            | (HowItWorks, Projects)
            | (Projects, HowItWorks)
            | (Projects, WhoAreWe) => StrategyKind::GridWipe,
            (Problem, Interface)
            | (Interface, Results)
            | (Results, Interface)
            | (Results, HowItWorks)
            | (HowItWorks, Results)
            | (WhoAreWe, Projects)
            | (WhoAreWe, Cta)
            | (Cta, WhoAreWe) => StrategyKind::CinematicZoom,
            (Cta, Footer) | (Footer, Cta) => StrategyKind::MaskReveal,
            _ => StrategyKind::Instant,
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_order_matches_ordinals() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.ordinal(), i);
        }
    }

    #[test]
    fn test_neighbors_follow_deck_order() {
        let deck = Deck::standard();
        assert_eq!(
            deck.neighbor(SectionId::Hero, Direction::Forward),
            Some(SectionId::Intro)
        );
        assert_eq!(
            deck.neighbor(SectionId::Intro, Direction::Backward),
            Some(SectionId::Hero)
        );
        assert_eq!(deck.neighbor(SectionId::Hero, Direction::Backward), None);
        assert_eq!(deck.neighbor(SectionId::Footer, Direction::Forward), None);
    }

    #[test]
    fn test_sub_progress_only_on_staged_sections() {
        let deck = Deck::standard();
        assert!(deck.sub_progress_spec(SectionId::Hero).is_none());
        assert!(deck.sub_progress_spec(SectionId::Cta).is_none());

        let benefits = deck.sub_progress_spec(SectionId::Benefits).unwrap();
        assert_eq!(benefits.max, 15);
        assert_eq!(benefits.overflow_threshold, 2);
    }

    #[test]
    fn test_projects_walk_covers_the_zoom_staging() {
        // Five projects at six zoom levels each, plus the intro and the
        // closing dim step.
        let deck = Deck::standard();
        let projects = deck.sub_progress_spec(SectionId::Projects).unwrap();
        assert_eq!(projects.min, 0);
        assert_eq!(projects.max, 31);
        assert_eq!(projects.overflow_threshold, 1);
        assert_eq!(deck.debounce(SectionId::Projects), Duration::from_millis(400));
    }

    #[test]
    fn test_strategy_table_is_asymmetric_around_interface() {
        let deck = Deck::standard();
        assert_eq!(
            deck.strategy(SectionId::Problem, SectionId::Interface),
            StrategyKind::CinematicZoom
        );
        assert_eq!(
            deck.strategy(SectionId::Interface, SectionId::Problem),
            StrategyKind::GridWipe
        );
    }

    #[test]
    fn test_terminal_pair_uses_the_mask() {
        let deck = Deck::standard();
        assert_eq!(
            deck.strategy(SectionId::Cta, SectionId::Footer),
            StrategyKind::MaskReveal
        );
        assert_eq!(
            deck.strategy(SectionId::Footer, SectionId::Cta),
            StrategyKind::MaskReveal
        );
    }

    #[test]
    fn test_unlisted_pairs_fall_back_to_instant() {
        let deck = Deck::standard();
        assert_eq!(
            deck.strategy(SectionId::Hero, SectionId::Footer),
            StrategyKind::Instant
        );
    }

    #[test]
    fn test_section_names_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.name().parse::<SectionId>().unwrap(), id);
        }
        assert!("lobby".parse::<SectionId>().is_err());
    }
}
