use crate::balls::Ball;
use crate::config::FrameConfig;
use crate::engine::FrameEngine;
use crate::frame::{Frame, FrameError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuRemove,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NameOpen,
    NameChar(char),
    NameBackspace,
    NameSubmit,
    NameCancel,
    Pot(Ball),
    FoulOpen,
    Foul(i32),
    FoulCancel,
    EndTurn,
    Undo,
    FreeBall,
    OffTableFoul,
    Replay,
    Concede,
    NewFrame,
}

/// Penalties offered by the foul picker, with the ball each one is tied to.
pub const FOUL_OPTIONS: [(i32, Option<Ball>); 4] =
    [(4, None), (5, Some(Ball::Blue)), (6, Some(Ball::Pink)), (7, Some(Ball::Black))];

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    engine: Box<dyn FrameEngine>,
    // Setup selection: settings rows first, then one row per player
    pub menu_index: usize,
    // Settings being edited on the setup screen
    pub cfg: FrameConfig,
    prefs_path: Option<PathBuf>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    name_entry: Option<String>,
    name_entry_error: Option<String>,
    foul_picker_open: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FrameConfig::default(), None)
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const NAME_MAX_LEN: usize = 24;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// `prefs_path` is where settings are written when a frame is started.
    pub fn new(cfg: FrameConfig, prefs_path: Option<PathBuf>) -> Self {
        Self {
            scene: Scene::Setup,
            started: Instant::now(),
            engine: Box::new(Frame::new(cfg)),
            menu_index: 0,
            cfg,
            prefs_path,
            help_open: false,
            history_open: false,
            history_offset: 0,
            name_entry: None,
            name_entry_error: None,
            foul_picker_open: false,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn engine(&self) -> &dyn FrameEngine {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> &mut dyn FrameEngine {
        self.engine.as_mut()
    }

    pub fn name_entry_active(&self) -> bool {
        self.name_entry.is_some()
    }

    pub fn name_entry_text(&self) -> Option<&str> {
        self.name_entry.as_deref()
    }

    pub fn name_entry_error(&self) -> Option<&str> {
        self.name_entry_error.as_deref()
    }

    pub fn foul_picker_open(&self) -> bool {
        self.foul_picker_open
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn prefs_path(&self) -> Option<&std::path::Path> {
        self.prefs_path.as_deref()
    }

    pub(crate) fn close_overlays(&mut self) {
        self.help_open = false;
        self.history_open = false;
        self.foul_picker_open = false;
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    /// Whether a scoring key should be live: frame running, on the table screen.
    fn can_score(&self) -> bool {
        self.scene == Scene::Table && self.engine.game_started()
    }

    /// Whether the foul worth `points` may be called right now.
    pub fn foul_enabled(&self, points: i32) -> bool {
        if !self.can_score() {
            return false;
        }
        if !self.engine.config().enforce_rules {
            return true;
        }
        match FOUL_OPTIONS.iter().find(|(p, _)| *p == points) {
            Some((_, Some(ball))) => self.engine.is_color_on_table(*ball),
            Some((_, None)) => true,
            None => false,
        }
    }

    /// Whether the pot key for `ball` should be live.
    pub fn pot_enabled(&self, ball: Ball) -> bool {
        if !self.can_score() {
            return false;
        }
        !self.engine.config().enforce_rules || self.engine.allowed_pots().contains(&ball)
    }

    fn run(&mut self, result: Result<(), FrameError>) -> bool {
        match result {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn open_name_entry(&mut self) -> bool {
        if self.scene != Scene::Setup || self.engine.game_started() {
            return false;
        }
        self.name_entry = Some(String::new());
        self.name_entry_error = None;
        true
    }

    fn name_entry_push(&mut self, c: char) {
        if let Some(buf) = self.name_entry.as_mut() {
            if buf.chars().count() >= Self::NAME_MAX_LEN || c.is_control() {
                return;
            }
            buf.push(c);
        }
        self.name_entry_error = None;
    }

    fn name_entry_backspace(&mut self) {
        if let Some(buf) = self.name_entry.as_mut() {
            buf.pop();
        }
        self.name_entry_error = None;
    }

    fn name_entry_submit(&mut self) -> bool {
        let Some(buf) = self.name_entry.as_ref() else {
            return false;
        };
        let name = buf.clone();
        match self.engine.add_player(&name) {
            Ok(_) => {
                self.name_entry = None;
                self.name_entry_error = None;
                true
            }
            Err(err) => {
                self.name_entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn name_entry_cancel(&mut self) {
        self.name_entry = None;
        self.name_entry_error = None;
    }

    fn call_foul(&mut self, points: i32) -> bool {
        if !self.foul_enabled(points) {
            return false;
        }
        self.foul_picker_open = false;
        let res = self.engine.apply_foul(-points);
        self.run(res)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                let open = !self.help_open;
                self.close_overlays();
                self.help_open = open;
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    let open = !self.history_open;
                    self.close_overlays();
                    if open {
                        self.history_offset = 0;
                    }
                    self.history_open = open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.engine.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Setup {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Setup {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Setup {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Setup {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => self.scene == Scene::Setup && self.apply_menu(),
            InputAction::MenuRemove => self.scene == Scene::Setup && self.remove_selected_player(),
            InputAction::NameOpen => self.open_name_entry(),
            InputAction::NameChar(c) => {
                self.name_entry_push(c);
                false
            }
            InputAction::NameBackspace => {
                self.name_entry_backspace();
                false
            }
            InputAction::NameSubmit => self.name_entry_submit(),
            InputAction::NameCancel => {
                self.name_entry_cancel();
                false
            }
            InputAction::Pot(ball) => {
                if !self.pot_enabled(ball) {
                    return false;
                }
                let res = self.engine.apply_pot(ball, ball.points());
                self.run(res)
            }
            InputAction::FoulOpen => {
                if !self.can_score() {
                    return false;
                }
                self.close_overlays();
                self.foul_picker_open = true;
                true
            }
            InputAction::Foul(points) => self.call_foul(points),
            InputAction::FoulCancel => {
                self.foul_picker_open = false;
                false
            }
            InputAction::EndTurn => {
                if !self.can_score() {
                    return false;
                }
                let res = self.engine.advance_turn();
                self.run(res)
            }
            InputAction::Undo => {
                if self.scene != Scene::Table {
                    return false;
                }
                let res = self.engine.undo_last_action();
                self.run(res)
            }
            InputAction::FreeBall => {
                if !self.can_score() {
                    return false;
                }
                let res = self.engine.apply_free_ball();
                self.run(res)
            }
            InputAction::OffTableFoul => {
                if !self.can_score() {
                    return false;
                }
                let res = self.engine.apply_off_table_foul();
                self.run(res)
            }
            InputAction::Replay => {
                if !self.can_score() {
                    return false;
                }
                let res = self.engine.replay_previous_turn();
                self.run(res)
            }
            InputAction::Concede => {
                if !self.can_score() {
                    return false;
                }
                let res = self.engine.end();
                self.run(res)
            }
            InputAction::NewFrame => {
                if self.scene != Scene::Table {
                    return false;
                }
                self.new_frame();
                true
            }
        }
    }

    /// Abandons the current frame and returns to the setup screen.
    pub fn new_frame(&mut self) {
        self.engine.reset();
        self.close_overlays();
        self.history_offset = 0;
        self.clear_action_error();
        self.open_menu();
    }

    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated_app(cfg: FrameConfig) -> AppState {
        let mut app = AppState::new(cfg, None);
        app.engine_mut().add_player("John").unwrap();
        app.engine_mut().add_player("Anna").unwrap();
        app
    }

    #[test]
    fn pot_keys_ignored_before_frame_starts() {
        let mut app = seated_app(FrameConfig::default());
        app.scene = Scene::Table;
        assert!(!app.handle_input(InputAction::Pot(Ball::Red)));
        assert_eq!(app.engine().history_len(), 0);
    }

    #[test]
    fn foul_picker_needs_a_running_frame() {
        let cfg = FrameConfig { enforce_rules: true, ..FrameConfig::default() };
        let mut app = seated_app(cfg);
        assert!(app.handle_input(InputAction::MenuApply));
        assert!(app.foul_enabled(7));
        app.engine_mut().reset();
        assert!(!app.foul_enabled(4));
    }
}
