//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crate::watchlist::Watchlist;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Run the TUI until the user quits
pub async fn run_app(config: &Config, watchlist: Watchlist, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = restore_on_error(
        || setup_terminal(mouse_enabled),
        || {
            if let Err(e) = restore_terminal(mouse_enabled) {
                error!("Failed to restore terminal: {}", e);
            }
        },
    )?;

    let mut app = AppComponent::new(watchlist, config.ui.clone(), logger);
    let mut event_handler = EventHandler::new();
    info!("Started with {} items", app.watchlist().items().len());

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal, even when the loop failed
    restore_terminal(mouse_enabled)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal(mouse_enabled: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(mouse_enabled: bool) -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(stdout, LeaveAlternateScreen)?;
    }
    Ok(())
}

/// Run `setup`, calling `restore` before handing back its error
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            restore();
            Err(e)
        }
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick | EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
