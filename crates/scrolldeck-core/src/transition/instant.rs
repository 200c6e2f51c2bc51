//! Instant swap: the fallback for boundaries with no animated treatment.

use std::time::Instant;

use crate::stage::Stage;

use super::{StrategyStatus, TransitionRequest, TransitionStrategy};

pub(super) struct InstantSwap;

impl InstantSwap {
    pub(super) fn new() -> Self {
        Self
    }
}

impl TransitionStrategy for InstantSwap {
    fn begin(&mut self, _request: &TransitionRequest, _stage: &mut dyn Stage, _now: Instant) {}

    fn tick(&mut self, _stage: &mut dyn Stage, _now: Instant) -> StrategyStatus {
        StrategyStatus::SwapAndComplete
    }
}
