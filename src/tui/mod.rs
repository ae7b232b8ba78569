pub mod app;
pub mod event;
pub mod ui;
pub mod views;

use std::io;

use chrono::Utc;
use crossterm::{
    cursor::Show,
    event::{Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::alarm::Alarm;
use crate::config::Config;
use app::{App, Message, RunningState};

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Any failure past this point still restores via drop
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort; safe to call more than once
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Give the terminal back before a panic message is printed on the UI thread
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if std::thread::current().name() == Some("main") {
            restore_terminal();
        }
        previous(info);
    }));
}

/// Main entry point for TUI mode
pub fn run_tui(config: &Config, alarm: Box<dyn Alarm>) -> io::Result<()> {
    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, alarm);
    if config.start_immediately {
        app.update(Message::StartOrReset, Utc::now());
    }

    // Main loop; the guard restores the terminal on every exit path
    let result = run_app(&mut terminal, &mut app, config);

    info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Keys are handled as they arrive; the timeout paces the ticks
        if poll(config.tick_interval)? {
            if let Event::Key(key) = read()? {
                if let Some(msg) = event::handle_key(key, app) {
                    // Process message and any follow-up messages
                    let mut current_msg = Some(msg);
                    while let Some(m) = current_msg {
                        current_msg = app.update(m, Utc::now());
                    }
                }
            }
        }

        // Remaining time is recomputed from the start instant, so extra
        // ticks after key presses never skew the countdown
        app.update(Message::Tick, Utc::now());

        if app.running_state == RunningState::Done {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_setup_is_harmless() {
        restore_terminal();
        restore_terminal();
        drop(TerminalGuard);
    }
}
