mod app;
mod cli;
mod clipboard;
mod logging;
mod models;
mod prefs;
mod release_note;
mod theme;
mod toast;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::prelude::*;

use crate::app::App;
use crate::cli::{CliConfig, parse_args};
use crate::clipboard::Osc52Clipboard;
use crate::prefs::JsonFileStore;
use crate::release_note::ReleaseNoteState;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let config = parse_args();

    if let Some(log_dir) = &config.log_dir {
        if let Err(e) = logging::init_logging(&config.log_level, log_dir) {
            eprintln!("Warning: file logging disabled: {e}");
        }
    }

    let app = build_app(&config);
    install_terminal_restore_hook();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("event=app_exit module=main status={}", if result.is_ok() { "ok" } else { "error" });
    result
}

fn build_app(config: &CliConfig) -> App {
    let prefs = JsonFileStore::open_or_empty(&config.prefs_path);
    let mut state = ReleaseNoteState::load(Box::new(prefs));
    state.set_toast_duration(config.toast_duration);
    App::new(state, Box::new(Osc52Clipboard::stdout()))
}

// Leave the alternate screen before the panic message is printed.
fn install_terminal_restore_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        previous_hook(panic_info);
    }));
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }

    Ok(())
}
