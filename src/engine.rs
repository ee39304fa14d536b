// Scoreboard API boundary. Front ends (the TUI, tests, anything else) drive a
// frame through this trait and never reach into its state. It is implemented
// for the core `Frame` type.

use crate::balls::Ball;
use crate::config::FrameConfig;
use crate::frame::{BallOnInfo, FrameError, FreeBallOption, Frame, PotRequirement, ScoreAction};
use crate::player::{Player, PlayerId};
use std::fmt;

pub trait FrameEngine: fmt::Debug {
    // Configuration
    fn config(&self) -> FrameConfig;
    fn set_config(&mut self, config: FrameConfig);

    // Roster and lifecycle
    fn add_player(&mut self, name: &str) -> Result<PlayerId, FrameError>;
    fn remove_player(&mut self, id: PlayerId) -> Result<(), FrameError>;
    fn start(&mut self) -> Result<(), FrameError>;
    fn reset(&mut self);
    fn end(&mut self) -> Result<(), FrameError>;

    // Scoring intents
    fn apply_pot(&mut self, ball: Ball, points: i32) -> Result<(), FrameError>;
    fn apply_foul(&mut self, points: i32) -> Result<(), FrameError>;
    fn apply_free_ball(&mut self) -> Result<(), FrameError>;
    fn apply_off_table_foul(&mut self) -> Result<(), FrameError>;
    fn replay_previous_turn(&mut self) -> Result<(), FrameError>;
    fn advance_turn(&mut self) -> Result<(), FrameError>;
    fn undo_last_action(&mut self) -> Result<(), FrameError>;

    // Queries
    fn players(&self) -> &[Player];
    fn current(&self) -> usize;
    fn reds_remaining(&self) -> u8;
    fn requirement(&self) -> PotRequirement;
    fn game_started(&self) -> bool;
    fn game_over(&self) -> bool;
    fn respotted_black_active(&self) -> bool;
    fn has_enough_players(&self) -> bool;
    fn allowed_pots(&self) -> Vec<Ball>;
    fn is_color_on_table(&self, ball: Ball) -> bool;
    fn current_ball_on(&self) -> Option<BallOnInfo>;
    fn can_use_free_ball(&self) -> bool;
    fn free_ball_option(&self) -> Option<FreeBallOption>;
    fn can_use_replay(&self) -> bool;
    fn can_use_off_table_foul(&self) -> bool;
    fn foul_count(&self, id: PlayerId) -> u32;
    fn current_break(&self, id: PlayerId) -> i32;
    fn highest_break(&self, id: PlayerId) -> i32;
    fn is_leading(&self, id: PlayerId) -> bool;
    fn final_standings(&self) -> Vec<&Player>;
    fn history_len(&self) -> usize;
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<ScoreAction>;
    fn describe_action(&self, action: &ScoreAction) -> String;
}

impl FrameEngine for Frame {
    fn config(&self) -> FrameConfig {
        self.config()
    }
    fn set_config(&mut self, config: FrameConfig) {
        self.set_config(config)
    }

    fn add_player(&mut self, name: &str) -> Result<PlayerId, FrameError> {
        self.add_player(name)
    }
    fn remove_player(&mut self, id: PlayerId) -> Result<(), FrameError> {
        self.remove_player(id)
    }
    fn start(&mut self) -> Result<(), FrameError> {
        self.start()
    }
    fn reset(&mut self) {
        self.reset()
    }
    fn end(&mut self) -> Result<(), FrameError> {
        self.end()
    }

    fn apply_pot(&mut self, ball: Ball, points: i32) -> Result<(), FrameError> {
        self.apply_pot(ball, points)
    }
    fn apply_foul(&mut self, points: i32) -> Result<(), FrameError> {
        self.apply_foul(points)
    }
    fn apply_free_ball(&mut self) -> Result<(), FrameError> {
        self.apply_free_ball()
    }
    fn apply_off_table_foul(&mut self) -> Result<(), FrameError> {
        self.apply_off_table_foul()
    }
    fn replay_previous_turn(&mut self) -> Result<(), FrameError> {
        self.replay_previous_turn()
    }
    fn advance_turn(&mut self) -> Result<(), FrameError> {
        self.advance_turn()
    }
    fn undo_last_action(&mut self) -> Result<(), FrameError> {
        self.undo_last_action()
    }

    fn players(&self) -> &[Player] {
        self.players()
    }
    fn current(&self) -> usize {
        self.current()
    }
    fn reds_remaining(&self) -> u8 {
        self.reds_remaining()
    }
    fn requirement(&self) -> PotRequirement {
        self.requirement()
    }
    fn game_started(&self) -> bool {
        self.game_started()
    }
    fn game_over(&self) -> bool {
        self.game_over()
    }
    fn respotted_black_active(&self) -> bool {
        self.respotted_black_active()
    }
    fn has_enough_players(&self) -> bool {
        self.has_enough_players()
    }
    fn allowed_pots(&self) -> Vec<Ball> {
        self.allowed_pots()
    }
    fn is_color_on_table(&self, ball: Ball) -> bool {
        self.is_color_on_table(ball)
    }
    fn current_ball_on(&self) -> Option<BallOnInfo> {
        self.current_ball_on()
    }
    fn can_use_free_ball(&self) -> bool {
        self.can_use_free_ball()
    }
    fn free_ball_option(&self) -> Option<FreeBallOption> {
        self.free_ball_option()
    }
    fn can_use_replay(&self) -> bool {
        self.can_use_replay()
    }
    fn can_use_off_table_foul(&self) -> bool {
        self.can_use_off_table_foul()
    }
    fn foul_count(&self, id: PlayerId) -> u32 {
        self.foul_count(id)
    }
    fn current_break(&self, id: PlayerId) -> i32 {
        self.current_break(id)
    }
    fn highest_break(&self, id: PlayerId) -> i32 {
        self.highest_break(id)
    }
    fn is_leading(&self, id: PlayerId) -> bool {
        self.is_leading(id)
    }
    fn final_standings(&self) -> Vec<&Player> {
        self.final_standings()
    }
    fn history_len(&self) -> usize {
        self.history_len()
    }
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<ScoreAction> {
        self.history_recent_offset(n, offset)
    }
    fn describe_action(&self, action: &ScoreAction) -> String {
        self.describe_action(action)
    }
}
