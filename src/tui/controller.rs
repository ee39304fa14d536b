use crate::balls::Ball;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Maps a key press to an input action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    // Name entry swallows every key, including the global toggles.
    if app.name_entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::NameCancel);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::NameSubmit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::NameBackspace);
            }
            KeyCode::Char(c) => {
                let _ = app.handle_input(InputAction::NameChar(c));
            }
            _ => {}
        }
        return false;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if matches!(code, KeyCode::Char('h') | KeyCode::Char('H')) {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }
    if app.foul_picker_open() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::FoulCancel);
            }
            KeyCode::Char(c @ '4'..='7') => {
                let points = i32::from(c as u8 - b'0');
                let _ = app.handle_input(InputAction::Foul(points));
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Setup => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let _ = app.handle_input(InputAction::NameOpen);
            }
            KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                let _ = app.handle_input(InputAction::MenuRemove);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(ball) = Ball::ALL.get(usize::from(c as u8 - b'1')).copied() {
                    let _ = app.handle_input(InputAction::Pot(ball));
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                let _ = app.handle_input(InputAction::FoulOpen);
            }
            KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') => {
                let _ = app.handle_input(InputAction::EndTurn);
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                let _ = app.handle_input(InputAction::Undo);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let _ = app.handle_input(InputAction::FreeBall);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let _ = app.handle_input(InputAction::OffTableFoul);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::Replay);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let _ = app.handle_input(InputAction::Concede);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let _ = app.handle_input(InputAction::NewFrame);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                // Quitting from the table is only allowed between frames.
                return !app.engine().game_started();
            }
            _ => {}
        },
    }
    false
}
