//! Render adapter between transition strategies and whatever actually
//! draws the deck.
//!
//! Strategies never touch the terminal (or any other surface) directly;
//! they mutate named anchors through this trait. A missing anchor is not
//! an error: the strategy degrades to an instant swap.

use crate::section::SectionId;

/// Overlay elements a strategy may drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorId {
    /// Full-screen grid of opaque cells for the wipe effect.
    GridOverlay,
    /// Radial element scaled up by the cinematic zoom.
    ZoomOverlay,
    /// Clip-region overlay revealed by continued wheel input.
    MaskOverlay,
}

pub trait Stage {
    fn has_anchor(&self, anchor: AnchorId) -> bool;

    fn show(&mut self, anchor: AnchorId);
    fn hide(&mut self, anchor: AnchorId);

    /// Whole-anchor opacity, 0.0..=1.0.
    fn set_opacity(&mut self, anchor: AnchorId, value: f64);
    /// Uniform scale factor, 1.0 = natural size.
    fn set_scale(&mut self, anchor: AnchorId, value: f64);
    /// Per-cell opacity for the grid overlay.
    fn set_cell_opacity(&mut self, anchor: AnchorId, cell: usize, value: f64);
    /// Top inset of the clip region in percent; 100 = fully hidden.
    fn set_clip_top_inset(&mut self, anchor: AnchorId, percent: f64);

    /// Make `to` the visible section. Called by the orchestrator at the
    /// strategy-controlled midpoint, at most once per transition.
    fn swap_content(&mut self, from: SectionId, to: SectionId);
}

/// A stage with no anchors at all. Every strategy running against it
/// takes the no-op path: swap immediately, complete immediately.
/// Recorded swaps make it useful in headless tests.
#[derive(Debug, Default)]
pub struct NullStage {
    pub swaps: Vec<(SectionId, SectionId)>,
}

impl NullStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stage for NullStage {
    fn has_anchor(&self, _anchor: AnchorId) -> bool {
        false
    }

    fn show(&mut self, _anchor: AnchorId) {}
    fn hide(&mut self, _anchor: AnchorId) {}
    fn set_opacity(&mut self, _anchor: AnchorId, _value: f64) {}
    fn set_scale(&mut self, _anchor: AnchorId, _value: f64) {}
    fn set_cell_opacity(&mut self, _anchor: AnchorId, _cell: usize, _value: f64) {}
    fn set_clip_top_inset(&mut self, _anchor: AnchorId, _percent: f64) {}

    fn swap_content(&mut self, from: SectionId, to: SectionId) {
        self.swaps.push((from, to));
    }
}
