//! Full-screen registration form.

mod app;
mod event;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use signup_core::config::loader::ConfigLoader;
use signup_core::inspect::FsInspector;

use app::App;
use event::map_key_event;

/// Run the TUI application.
pub fn run(config_path: Option<&Path>, profile: Option<&str>) -> Result<()> {
    // Load config (fail fast if config broken)
    let config = ConfigLoader::load(config_path, profile).map_err(|e| {
        color_eyre::eyre::eyre!("Configuration error: {e}\nRun 'signup doctor' to diagnose.")
    })?;

    // stderr belongs to the terminal UI; only the log file (if any) is written.
    crate::logging::init(&config, false);

    let app = App::new(config, Box::new(FsInspector));

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(color_eyre::eyre::eyre!("Application panicked")),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // 1. Render current state
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // 2. Poll for events (with timeout for responsiveness)
        if poll(Duration::from_millis(100))?
            && let Event::Key(key) = read()?
            && let Some(msg) = map_key_event(key)
        {
            // 3. Process message
            app.update(msg);
        }

        // 4. Check quit condition
        if app.should_quit {
            return Ok(());
        }
    }
}
