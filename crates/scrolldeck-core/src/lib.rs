pub mod config;
pub mod error;
pub mod input;
pub mod progress;
pub mod section;
pub mod sequencer;
pub mod stage;
pub mod transition;

pub use config::{DeckConfig, TransitionConfig};
pub use error::{Error, Result};
pub use input::{Direction, InputNormalizer, NavigationIntent};
pub use section::{Deck, SectionId, SectionSpec, SubProgressSpec};
pub use sequencer::{DeckHooks, NullHooks, Sequencer};
pub use stage::{AnchorId, NullStage, Stage};
pub use transition::{StrategyKind, TransitionEvent, TransitionRequest};
