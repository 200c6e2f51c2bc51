//! Terminal stage: the render-side state the transition strategies
//! mutate, read back by the widgets each frame.

use scrolldeck_core::{AnchorId, SectionId, Stage, TransitionConfig};

/// Grid wipe overlay state
#[derive(Debug)]
pub struct GridOverlay {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell opacities, 0.0..=1.0
    pub cell_opacity: Vec<f64>,
    pub visible: bool,
}

/// Cinematic zoom overlay state
#[derive(Debug)]
pub struct ZoomOverlay {
    pub scale: f64,
    pub opacity: f64,
    pub visible: bool,
}

/// Mask reveal overlay state
#[derive(Debug)]
pub struct MaskOverlay {
    /// Percent of the viewport still covered, measured from the top
    pub top_inset: f64,
    pub visible: bool,
}

#[derive(Debug)]
pub struct TermStage {
    pub visible_section: SectionId,
    pub grid: GridOverlay,
    pub zoom: ZoomOverlay,
    pub mask: MaskOverlay,
}

impl TermStage {
    pub fn new(visible_section: SectionId, config: &TransitionConfig) -> Self {
        Self {
            visible_section,
            grid: GridOverlay {
                rows: config.grid_rows,
                cols: config.grid_cols,
                cell_opacity: vec![0.0; config.grid_cell_count()],
                visible: false,
            },
            zoom: ZoomOverlay {
                scale: 1.0,
                opacity: 1.0,
                visible: false,
            },
            mask: MaskOverlay {
                top_inset: 100.0,
                visible: false,
            },
        }
    }
}

impl Stage for TermStage {
    fn has_anchor(&self, _anchor: AnchorId) -> bool {
        true
    }

    fn show(&mut self, anchor: AnchorId) {
        match anchor {
            AnchorId::GridOverlay => self.grid.visible = true,
            AnchorId::ZoomOverlay => self.zoom.visible = true,
            AnchorId::MaskOverlay => self.mask.visible = true,
        }
    }

    fn hide(&mut self, anchor: AnchorId) {
        match anchor {
            AnchorId::GridOverlay => self.grid.visible = false,
            AnchorId::ZoomOverlay => self.zoom.visible = false,
            AnchorId::MaskOverlay => self.mask.visible = false,
        }
    }

    fn set_opacity(&mut self, anchor: AnchorId, value: f64) {
        if anchor == AnchorId::ZoomOverlay {
            self.zoom.opacity = value.clamp(0.0, 1.0);
        }
    }

    fn set_scale(&mut self, anchor: AnchorId, value: f64) {
        if anchor == AnchorId::ZoomOverlay {
            self.zoom.scale = value.max(0.0);
        }
    }

    fn set_cell_opacity(&mut self, anchor: AnchorId, cell: usize, value: f64) {
        if anchor == AnchorId::GridOverlay {
            if let Some(slot) = self.grid.cell_opacity.get_mut(cell) {
                *slot = value.clamp(0.0, 1.0);
            }
        }
    }

    fn set_clip_top_inset(&mut self, anchor: AnchorId, percent: f64) {
        if anchor == AnchorId::MaskOverlay {
            self.mask.top_inset = percent.clamp(0.0, 100.0);
        }
    }

    fn swap_content(&mut self, from: SectionId, to: SectionId) {
        tracing::debug!(%from, %to, "content swap");
        self.visible_section = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_changes_visible_section() {
        let config = TransitionConfig::default();
        let mut stage = TermStage::new(SectionId::Hero, &config);
        stage.swap_content(SectionId::Hero, SectionId::Intro);
        assert_eq!(stage.visible_section, SectionId::Intro);
    }

    #[test]
    fn test_cell_opacity_out_of_range_ignored() {
        let config = TransitionConfig::default();
        let mut stage = TermStage::new(SectionId::Hero, &config);
        stage.set_cell_opacity(AnchorId::GridOverlay, 10_000, 1.0);
        assert!(stage.grid.cell_opacity.iter().all(|&o| o == 0.0));
    }
}
