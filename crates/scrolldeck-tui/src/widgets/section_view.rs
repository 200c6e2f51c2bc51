use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use scrolldeck_core::SectionId;

use crate::theme::Palette;

/// Renders the currently visible section full-frame.
pub struct SectionView;

impl SectionView {
    pub fn render(frame: &mut Frame, area: Rect, section: SectionId, sub_progress: Option<i32>) {
        let mut lines: Vec<Line> = Vec::new();

        // Vertical centering: pad to a third of the viewport.
        for _ in 0..area.height / 3 {
            lines.push(Line::from(""));
        }

        lines.push(
            Line::from(Span::styled(
                title(section),
                Style::default()
                    .fg(Palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(Line::from(""));
        for text in tagline(section) {
            lines.push(
                Line::from(Span::styled(*text, Style::default().fg(Palette::FG)))
                    .alignment(Alignment::Center),
            );
        }

        if section == SectionId::Projects {
            if let Some(value) = sub_progress {
                render_project_walk(&mut lines, value);
            }
        } else if let (Some(items), Some(value)) = (step_labels(section), sub_progress) {
            lines.push(Line::from(""));
            for (idx, label) in items.iter().enumerate() {
                let style = if idx as i32 == value {
                    Style::default()
                        .fg(Palette::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else if (idx as i32) < value {
                    Style::default().fg(Palette::DIM)
                } else {
                    Style::default().fg(Palette::FG)
                };
                let marker = if idx as i32 == value { "▸ " } else { "  " };
                lines.push(
                    Line::from(Span::styled(format!("{marker}{label}"), style))
                        .alignment(Alignment::Center),
                );
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().style(Style::default().bg(Palette::BG)));
        frame.render_widget(paragraph, area);
    }
}

pub(crate) fn title(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "SCROLLDECK",
        SectionId::Intro => "Introduction",
        SectionId::Benefits => "Why a wow front matters",
        SectionId::Problem => "The problem",
        SectionId::Interface => "The interface",
        SectionId::Results => "Results",
        SectionId::HowItWorks => "How it works",
        SectionId::Projects => "Projects",
        SectionId::WhoAreWe => "Who are we",
        SectionId::Cta => "Ready when you are",
        SectionId::Footer => "Thanks for scrolling",
    }
}

fn tagline(section: SectionId) -> &'static [&'static str] {
    match section {
        SectionId::Hero => &["A section deck driven entirely by your scroll wheel.", "Scroll down to begin."],
        SectionId::Intro => &["Every screen is one section.", "Each boundary has its own way of getting you across."],
        SectionId::Benefits => &["Step through the cards one scroll at a time."],
        SectionId::Problem => &["Most pages scroll past their best content."],
        SectionId::Interface => &["One viewport, one idea, no competing scrollbars."],
        SectionId::Results => &["Walk the menu before moving on."],
        SectionId::HowItWorks => &["Six steps from intent to transition."],
        SectionId::Projects => &["A few things built this way."],
        SectionId::WhoAreWe => &["A small team that cares about motion."],
        SectionId::Cta => &["Keep scrolling to reveal the footer."],
        SectionId::Footer => &["That's the whole deck. Scroll up to go back."],
    }
}

/// Labels for the stepped sections; index matches the sub-progress value.
pub(crate) fn step_labels(section: SectionId) -> Option<&'static [&'static str]> {
    match section {
        SectionId::Benefits => Some(&[
            "Integration flexibility",
            "Data access",
            "Efficiency enhancement",
            "Extended capabilities",
            "First impressions that stick",
            "Motion with intent",
            "No layout jank",
            "Readable at any pace",
            "Keyboard friendly",
            "Predictable navigation",
            "One idea per screen",
            "Fast initial paint",
            "Graceful degradation",
            "Consistent pacing",
            "Accessible focus order",
            "A finish worth reaching",
        ]),
        SectionId::Results => Some(&[
            "Menu item 1",
            "Menu item 2",
            "Menu item 3",
            "Menu item 4",
            "Menu item 5",
            "Menu item 6",
            "Menu item 7",
            "Menu item 8",
            "Menu item 9",
        ]),
        SectionId::HowItWorks => Some(&[
            "Wheel input arrives",
            "Debounce picks one intent",
            "The section claims it first",
            "Or the boundary does",
            "A strategy animates the crossing",
            "The next section takes over",
        ]),
        _ => None,
    }
}

pub(crate) const PROJECT_TITLES: [&str; 5] = [
    "Therapeutic Services Platform",
    "Kane Solutions",
    "PACT Habit Builder",
    "Trendy Builds",
    "Amahle Visa Pro",
];

pub(crate) const PROJECT_ZOOM_LEVELS: i32 = 5;

/// Position in the flattened Projects walk: which project is showing,
/// its zoom level, and whether the closing dim step has been taken.
/// `None` while the intro text is still up.
pub(crate) fn project_walk(value: i32) -> Option<(usize, i32, bool)> {
    if value <= 0 {
        return None;
    }
    let per_project = PROJECT_ZOOM_LEVELS + 1;
    let last = PROJECT_TITLES.len() as i32 * per_project;
    if value > last {
        return Some((PROJECT_TITLES.len() - 1, PROJECT_ZOOM_LEVELS, true));
    }
    let step = value - 1;
    Some(((step / per_project) as usize, step % per_project, false))
}

fn render_project_walk(lines: &mut Vec<Line<'static>>, value: i32) {
    lines.push(Line::from(""));
    let Some((current, zoom, dimmed)) = project_walk(value) else {
        lines.push(
            Line::from(Span::styled(
                "Recent successes",
                Style::default().fg(Palette::FG),
            ))
            .alignment(Alignment::Center),
        );
        return;
    };

    for (idx, title) in PROJECT_TITLES.iter().enumerate() {
        let (marker, style) = if idx == current {
            let fg = if dimmed { Palette::DIM } else { Palette::ACCENT };
            ("▸ ", Style::default().fg(fg).add_modifier(Modifier::BOLD))
        } else if idx < current {
            ("  ", Style::default().fg(Palette::DIM))
        } else {
            ("  ", Style::default().fg(Palette::FG))
        };
        let text = if idx == current {
            format!("{marker}{title}  zoom {zoom}/{PROJECT_ZOOM_LEVELS}")
        } else {
            format!("{marker}{title}")
        };
        lines.push(Line::from(Span::styled(text, style)).alignment(Alignment::Center));
    }
}
