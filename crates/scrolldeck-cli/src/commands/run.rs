use std::io;
use std::time::Instant;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use scrolldeck_core::{DeckConfig, SectionId};
use scrolldeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets,
};

pub fn run(config: DeckConfig, start: Option<String>) -> Result<()> {
    let start = start
        .map(|name| {
            name.parse::<SectionId>()
                .map_err(|_| anyhow!("unknown section: {name} (try `scrolldeck sections`)"))
        })
        .transpose()?;
    if let Some(section) = start {
        tracing::debug!(%section, "starting mid-deck");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Scrolldeck")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);
    let mut app = App::new(config, start);

    // Main loop
    loop {
        terminal.draw(|frame| widgets::draw(frame, &app))?;

        if let Some(event) = event_handler.next(app.is_animating())? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Wheel(delta_y) => app.handle_wheel(delta_y, now),
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => app.tick(now),
            }
            // Keep a running transition advancing even while input
            // events are arriving faster than ticks.
            app.tick(Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
