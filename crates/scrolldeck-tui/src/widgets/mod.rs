mod overlay;
mod section_view;
mod status_bar;

pub use overlay::OverlayView;
pub use section_view::SectionView;
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Draw one full frame: section, overlays, status bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    SectionView::render(
        frame,
        main_layout[0],
        app.stage.visible_section,
        app.visible_sub_progress(),
    );
    OverlayView::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
