use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scrolldeck_core::SectionId;

use crate::app::App;
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let current = app.sequencer.current_section();
        let position = format!("{}/{}", current.ordinal() + 1, SectionId::ALL.len());

        let status_text = if let Some(msg) = &app.status.message {
            format!(" {}", msg)
        } else {
            let mut text = format!(" {} | {}", current.name(), position);
            if let Some(value) = app.visible_sub_progress() {
                text.push_str(&format!(" | step {}", value));
            }
            if let Some(request) = app.sequencer.active_transition() {
                text.push_str(&format!(" | {} -> {}", request.strategy, request.to.name()));
            }
            text
        };

        let help_hint = " j/k:navigate wheel:scroll q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Palette::FG).bg(Palette::BG_RAISED),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(Palette::BG_RAISED),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(Palette::DIM).bg(Palette::BG_RAISED),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
