use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::theme::Palette;
use crate::widgets::SectionView;

/// Draws whichever transition overlay is live on top of the section.
pub struct OverlayView;

impl OverlayView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if app.stage.grid.visible {
            Self::render_grid(frame, area, app);
        }
        if app.stage.zoom.visible {
            Self::render_zoom(frame, area, app);
        }
        if app.stage.mask.visible {
            Self::render_mask(frame, area, app);
        }
    }

    fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
        let grid = &app.stage.grid;
        if grid.rows == 0 || grid.cols == 0 {
            return;
        }
        let cell_w = area.width as f64 / grid.cols as f64;
        let cell_h = area.height as f64 / grid.rows as f64;

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let opacity = grid
                    .cell_opacity
                    .get(row * grid.cols + col)
                    .copied()
                    .unwrap_or(0.0);
                if opacity < 0.5 {
                    continue;
                }
                let x = area.x + (col as f64 * cell_w) as u16;
                let y = area.y + (row as f64 * cell_h) as u16;
                let w = (((col + 1) as f64 * cell_w) as u16).saturating_sub((col as f64 * cell_w) as u16);
                let h = (((row + 1) as f64 * cell_h) as u16).saturating_sub((row as f64 * cell_h) as u16);
                let cell = Rect::new(x, y, w.max(1), h.max(1)).intersection(area);
                frame.render_widget(
                    Block::default().style(Style::default().bg(Palette::WIPE)),
                    cell,
                );
            }
        }
    }

    fn render_zoom(frame: &mut Frame, area: Rect, app: &App) {
        let zoom = &app.stage.zoom;
        // No per-cell alpha in a terminal: the overlay disappears once
        // its fade drops past the halfway point.
        if zoom.opacity < 0.5 {
            return;
        }
        let peak = app.config.transition.zoom_peak_scale.max(1.0 + f64::EPSILON);
        let coverage = ((zoom.scale - 1.0) / (peak - 1.0)).clamp(0.0, 1.0);
        let w = ((area.width as f64 * coverage) as u16).max(2);
        let h = ((area.height as f64 * coverage) as u16).max(1);
        let x = area.x + (area.width.saturating_sub(w)) / 2;
        let y = area.y + (area.height.saturating_sub(h)) / 2;
        let rect = Rect::new(x, y, w, h).intersection(area);
        frame.render_widget(
            Block::default().style(Style::default().bg(Palette::ZOOM)),
            rect,
        );
    }

    fn render_mask(frame: &mut Frame, area: Rect, app: &App) {
        let Some(request) = app.sequencer.active_transition() else {
            return;
        };
        let revealed = (100.0 - app.stage.mask.top_inset) / 100.0;
        let height = (area.height as f64 * revealed) as u16;
        if height == 0 {
            return;
        }
        // The incoming section rises from the bottom of the viewport.
        let rect = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(height),
            area.width,
            height,
        );
        frame.render_widget(
            Block::default().style(Style::default().bg(Palette::BG_RAISED)),
            rect,
        );
        SectionView::render(frame, rect, request.to, None);
    }
}
