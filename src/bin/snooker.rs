use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use snooker_scoreboard::config::FrameConfig;
use snooker_scoreboard::tui::{app::AppState, controller};
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Mutex;
use std::time::Duration;

/// File that receives engine logs. Unset means no logging at all.
const LOG_ENV: &str = "SNOOKER_LOG";

fn init_logging() {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return;
    };
    let file = match File::create(&path) {
        Ok(f) => f,
        Err(err) => {
            eprintln!("could not open log file {}: {err}", path.to_string_lossy());
            return;
        }
    };
    // The terminal belongs to the TUI, so logs only ever go to the file.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn load_prefs() -> (FrameConfig, Option<std::path::PathBuf>) {
    let Some(path) = FrameConfig::default_path() else {
        return (FrameConfig::default(), None);
    };
    match FrameConfig::load(&path) {
        Ok(cfg) => (cfg, Some(path)),
        Err(err) => {
            tracing::warn!(%err, "falling back to default preferences");
            (FrameConfig::default(), Some(path))
        }
    }
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "snooker-scoreboard requires a real terminal (TTY).\n\
             Run in Terminal and press q to quit. Version: {}",
            snooker_scoreboard::VERSION
        );
        return Ok(());
    }
    init_logging();
    let (cfg, prefs_path) = load_prefs();
    tracing::info!(?cfg, "starting scoreboard");

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(cfg, prefs_path);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
