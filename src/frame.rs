//! The frame state machine: scoring, legal order, breaks, tie-break and undo.
//!
//! A [`Frame`] owns every piece of per-frame state. It changes only through the
//! operations below, each of which either applies completely or leaves the
//! frame untouched and returns a [`FrameError`] saying why. Callers that want
//! the permissive "buttons simply do nothing" behavior can ignore the error.

mod history;
mod requirement;

pub use history::{ScoreAction, ScoreActionKind};
pub use requirement::{BallOnInfo, FreeBallOption, PotRequirement};

use crate::balls::{Ball, COLOR_SEQUENCE, RED_COUNT};
use crate::config::{FoulAwardPolicy, FrameConfig};
use crate::player::{Player, PlayerId};
use history::Checkpoint;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    #[error("player name is empty")]
    EmptyName,
    #[error("the roster is fixed while a frame is in progress")]
    FrameInProgress,
    #[error("need at least {min} players, have {have}")]
    NotEnoughPlayers { min: usize, have: usize },
    #[error("no frame in progress")]
    NotInProgress,
    #[error("no players at the table")]
    NoPlayers,
    #[error("{0} is not on")]
    BallNotOn(Ball),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("free ball is not available")]
    FreeBallUnavailable,
    #[error("replay is not available")]
    ReplayUnavailable,
    #[error("off-table foul is not available")]
    OffTableFoulUnavailable,
    #[error("at most {max} reds can be racked, got {got}")]
    TooManyReds { max: u8, got: u8 },
    #[error("{0} points would overflow a score")]
    PointsOutOfRange(i32),
}

/// Published per-player figures, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SeatSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    pub fouls: u32,
    pub current_break: i32,
    pub highest_break: i32,
}

/// A read-only copy of everything the frame publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FrameSnapshot {
    pub seats: Vec<SeatSnapshot>,
    pub current: usize,
    pub reds_remaining: u8,
    pub requirement: PotRequirement,
    pub phase: Phase,
    pub respotted_black: bool,
    pub foul_carryover: bool,
    pub turn_has_action: bool,
    pub history_len: usize,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Frame {
    config: FrameConfig,
    players: Vec<Player>,
    next_id: u32,
    current: usize,
    reds_remaining: u8,
    requirement: PotRequirement,
    phase: Phase,
    respotted_black: bool,
    foul_carryover: bool,
    turn_has_action: bool,
    foul_counts: HashMap<PlayerId, u32>,
    current_breaks: HashMap<PlayerId, i32>,
    highest_breaks: HashMap<PlayerId, i32>,
    history: Vec<ScoreAction>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

impl Frame {
    pub const MIN_PLAYERS: usize = 2;

    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            next_id: 1,
            current: 0,
            reds_remaining: RED_COUNT,
            requirement: PotRequirement::Red,
            phase: Phase::NotStarted,
            respotted_black: false,
            foul_carryover: false,
            turn_has_action: false,
            foul_counts: HashMap::new(),
            current_breaks: HashMap::new(),
            highest_breaks: HashMap::new(),
            history: Vec::new(),
        }
    }

    // --- Configuration ---

    pub fn config(&self) -> FrameConfig {
        self.config
    }

    pub fn set_config(&mut self, config: FrameConfig) {
        self.config = config;
    }

    pub fn set_foul_award_policy(&mut self, policy: FoulAwardPolicy) {
        self.config.foul_award_policy = policy;
    }

    pub fn set_enforce_rules(&mut self, enforce: bool) {
        self.config.enforce_rules = enforce;
    }

    // --- Roster ---

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, FrameError> {
        if self.phase == Phase::InProgress {
            return Err(FrameError::FrameInProgress);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(FrameError::EmptyName);
        }
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        self.players.push(Player::new(id, name.to_string()));
        self.foul_counts.insert(id, 0);
        self.current_breaks.insert(id, 0);
        self.highest_breaks.insert(id, 0);
        debug!(player = %id, name, "player added");
        Ok(id)
    }

    /// Removes a player by id. Allowed at any time; the seat pointer keeps
    /// following the same player where one remains.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), FrameError> {
        let pos = self.seat_of(id).ok_or(FrameError::UnknownPlayer(id))?;
        self.players.remove(pos);
        self.foul_counts.remove(&id);
        self.current_breaks.remove(&id);
        self.highest_breaks.remove(&id);
        if pos < self.current {
            self.current -= 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }
        debug!(player = %id, seat = pos, "player removed");
        Ok(())
    }

    // --- Lifecycle ---

    pub fn start(&mut self) -> Result<(), FrameError> {
        self.start_from(RED_COUNT, PotRequirement::Red)
    }

    /// Starts a frame from a given table position instead of a full rack.
    pub fn start_from(
        &mut self,
        reds_remaining: u8,
        requirement: PotRequirement,
    ) -> Result<(), FrameError> {
        if self.phase == Phase::InProgress {
            return Err(FrameError::FrameInProgress);
        }
        if !self.has_enough_players() {
            return Err(FrameError::NotEnoughPlayers {
                min: Self::MIN_PLAYERS,
                have: self.players.len(),
            });
        }
        if reds_remaining > RED_COUNT {
            return Err(FrameError::TooManyReds { max: RED_COUNT, got: reds_remaining });
        }
        self.reset_frame_state();
        self.reds_remaining = reds_remaining;
        self.requirement = requirement;
        self.phase = Phase::InProgress;
        info!(players = self.players.len(), reds = reds_remaining, "frame started");
        Ok(())
    }

    /// Back to the roster screen: clears all per-frame state, keeps the players.
    pub fn reset(&mut self) {
        self.reset_frame_state();
        self.phase = Phase::NotStarted;
        info!("frame reset");
    }

    /// Concedes the frame. Scores are left as they are.
    pub fn end(&mut self) -> Result<(), FrameError> {
        if self.phase != Phase::InProgress {
            return Err(FrameError::NotInProgress);
        }
        self.finish_frame();
        Ok(())
    }

    fn reset_frame_state(&mut self) {
        self.respotted_black = false;
        self.foul_carryover = false;
        self.turn_has_action = false;
        self.current = 0;
        self.history.clear();
        self.foul_counts = self.players.iter().map(|p| (p.id, 0)).collect();
        self.current_breaks = self.players.iter().map(|p| (p.id, 0)).collect();
        self.highest_breaks = self.players.iter().map(|p| (p.id, 0)).collect();
        self.reds_remaining = RED_COUNT;
        self.requirement = PotRequirement::Red;
        for p in &mut self.players {
            p.score = 0;
        }
    }

    fn finish_frame(&mut self) {
        self.phase = Phase::Ended;
        self.respotted_black = false;
        self.foul_carryover = false;
        self.turn_has_action = false;
        info!(leading = ?self.leading_score(), "frame over");
    }

    // --- Scoring ---

    /// Pots a ball for its table value.
    pub fn pot(&mut self, ball: Ball) -> Result<(), FrameError> {
        self.apply_pot(ball, ball.points())
    }

    /// Credits `points` to the player at the table and advances the legal order.
    /// The same player stays at the table.
    pub fn apply_pot(&mut self, ball: Ball, points: i32) -> Result<(), FrameError> {
        self.ensure_in_play()?;
        if self.config.enforce_rules && !self.is_allowed_pot(ball) {
            debug!(%ball, requirement = ?self.requirement, "pot rejected");
            return Err(FrameError::BallNotOn(ball));
        }
        self.ensure_creditable(points, false)?;
        self.turn_has_action = true;
        self.foul_carryover = false;
        let action = self.credit_visit(ball, points);
        self.history.push(action);
        self.advance_after_pot(ball);
        Ok(())
    }

    /// Penalises the player at the table and passes the turn. `points` is
    /// usually given as a negative number; only its magnitude matters.
    pub fn apply_foul(&mut self, points: i32) -> Result<(), FrameError> {
        self.ensure_in_play()?;
        let penalty = points.checked_abs().ok_or(FrameError::PointsOutOfRange(points))?;
        self.ensure_creditable(penalty, true)?;
        let before = self.checkpoint();
        let action = self.charge_foul(penalty, before);
        self.history.push(action);
        self.pass_turn(true);
        Ok(())
    }

    /// Ends the visit of the player at the table without penalty.
    pub fn advance_turn(&mut self) -> Result<(), FrameError> {
        self.ensure_in_play()?;
        self.pass_turn(false);
        Ok(())
    }

    /// Scores a free ball as the ball currently on.
    pub fn apply_free_ball(&mut self) -> Result<(), FrameError> {
        self.ensure_in_play()?;
        let option = self.free_ball_option().ok_or(FrameError::FreeBallUnavailable)?;
        self.ensure_creditable(option.points, false)?;
        self.turn_has_action = true;
        self.foul_carryover = false;
        let action = self.credit_visit(option.ball, option.points);
        self.history.push(action);
        if option.counts_as_red && self.reds_remaining > 0 {
            self.requirement = PotRequirement::Color;
        } else {
            self.advance_after_pot(option.ball);
        }
        debug!(ball = %option.ball, points = option.points, "free ball");
        Ok(())
    }

    /// Hands the table back to the player who just fouled.
    pub fn replay_previous_turn(&mut self) -> Result<(), FrameError> {
        if !self.can_use_replay() {
            return Err(FrameError::ReplayUnavailable);
        }
        let n = self.players.len();
        if n == 0 {
            return Err(FrameError::NoPlayers);
        }
        self.current = (self.current + n - 1) % n;
        self.foul_carryover = false;
        self.turn_has_action = false;
        debug!(seat = self.current, "replay requested");
        Ok(())
    }

    /// The ball on left the table: it is taken out of play as though potted,
    /// but the striker is charged a foul instead of scoring.
    pub fn apply_off_table_foul(&mut self) -> Result<(), FrameError> {
        if !self.can_use_off_table_foul() {
            return Err(FrameError::OffTableFoulUnavailable);
        }
        self.ensure_in_play()?;
        let on = self.current_ball_on().ok_or(FrameError::OffTableFoulUnavailable)?;
        self.ensure_creditable(on.ball.foul_points(), true)?;
        let before = self.checkpoint();

        // Sequence arm first: a decided respot must leave no ball on.
        let mut colors_done = false;
        if self.reds_remaining > 0 && on.ball.is_red() {
            self.reds_remaining -= 1;
            self.requirement = if self.reds_remaining == 0 {
                PotRequirement::ColorSequence(0)
            } else {
                PotRequirement::Red
            };
        } else if let PotRequirement::ColorSequence(i) = self.requirement {
            let next = i + 1;
            self.requirement = PotRequirement::ColorSequence(next);
            colors_done = next >= COLOR_SEQUENCE.len();
        } else if self.respotted_black && on.ball == Ball::Black {
            colors_done = true;
        }

        let action = self.charge_foul(on.ball.foul_points(), before);
        self.history.push(action);
        self.pass_turn(true);

        if colors_done {
            self.colors_complete();
        }
        Ok(())
    }

    /// Reverts the most recent pot or foul.
    pub fn undo_last_action(&mut self) -> Result<(), FrameError> {
        let action = self.history.pop().ok_or(FrameError::NothingToUndo)?;
        for &(id, delta) in action.score_deltas() {
            if let Some(p) = self.players.iter_mut().find(|p| p.id == id) {
                p.score -= delta;
            }
        }
        for &(id, delta) in action.foul_deltas() {
            if let Some(count) = self.foul_counts.get_mut(&id) {
                *count = count.saturating_sub(delta);
            }
        }
        for &(id, value) in action.previous_current_breaks() {
            if let Some(b) = self.current_breaks.get_mut(&id) {
                *b = value;
            }
        }
        for &(id, value) in action.previous_highest_breaks() {
            if let Some(b) = self.highest_breaks.get_mut(&id) {
                *b = value;
            }
        }
        let before = action.checkpoint();
        self.current = before.current.min(self.players.len().saturating_sub(1));
        self.reds_remaining = before.reds_remaining;
        self.requirement = before.requirement;
        if self.phase == Phase::Ended {
            self.phase = Phase::InProgress;
        }
        self.respotted_black = false;
        self.foul_carryover = false;
        self.turn_has_action = false;
        debug!(kind = ?action.kind(), remaining = self.history.len(), "undo");
        Ok(())
    }

    fn ensure_in_play(&self) -> Result<(), FrameError> {
        if self.phase != Phase::InProgress {
            return Err(FrameError::NotInProgress);
        }
        if self.players.is_empty() {
            return Err(FrameError::NoPlayers);
        }
        Ok(())
    }

    /// Rejects `points` if crediting them would overflow a score or break.
    /// A foul pays the recipients under the award policy; a pot pays the striker.
    fn ensure_creditable(&self, points: i32, foul: bool) -> Result<(), FrameError> {
        let out_of_range = FrameError::PointsOutOfRange(points);
        let striker = self.players.get(self.current).ok_or(FrameError::NoPlayers)?;
        if !foul {
            striker.score.checked_add(points).ok_or(out_of_range.clone())?;
            self.current_break(striker.id).checked_add(points).ok_or(out_of_range)?;
            return Ok(());
        }
        let fits = match self.config.foul_award_policy {
            FoulAwardPolicy::NextPlayer => {
                let next = (self.current + 1) % self.players.len();
                self.players[next].score.checked_add(points).is_some()
            }
            FoulAwardPolicy::AllPlayers => {
                self.players.iter().all(|p| p.score.checked_add(points).is_some())
            }
        };
        if fits {
            Ok(())
        } else {
            Err(out_of_range)
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            current: self.current,
            reds_remaining: self.reds_remaining,
            requirement: self.requirement,
        }
    }

    /// Adds `points` to the striker's score and break and returns the record.
    fn credit_visit(&mut self, ball: Ball, points: i32) -> ScoreAction {
        let before = self.checkpoint();
        let striker = &mut self.players[self.current];
        striker.score += points;
        let id = striker.id;
        let prev_current = self.current_break(id);
        let prev_highest = self.highest_break(id);
        let new_current = prev_current + points;
        self.current_breaks.insert(id, new_current);
        if new_current > prev_highest {
            self.highest_breaks.insert(id, new_current);
        }
        debug!(player = %id, %ball, points, break_total = new_current, "pot");
        ScoreAction::new(ScoreActionKind::Pot { player: id, ball, points }, before)
            .with_score_delta(id, points)
            .with_previous_breaks(id, prev_current, prev_highest)
    }

    /// Charges the striker a foul of `penalty` and awards it per the policy.
    fn charge_foul(&mut self, penalty: i32, before: Checkpoint) -> ScoreAction {
        let offender = self.players[self.current].id;
        *self.foul_counts.entry(offender).or_insert(0) += 1;
        let prev_current = self.current_break(offender);
        let prev_highest = self.highest_break(offender);
        self.current_breaks.insert(offender, 0);

        let mut action =
            ScoreAction::new(ScoreActionKind::Foul { player: offender, points: penalty }, before)
                .with_foul_delta(offender, 1)
                .with_previous_breaks(offender, prev_current, prev_highest);
        match self.config.foul_award_policy {
            FoulAwardPolicy::NextPlayer => {
                let next = (self.current + 1) % self.players.len();
                self.players[next].score += penalty;
                action = action.with_score_delta(self.players[next].id, penalty);
            }
            FoulAwardPolicy::AllPlayers => {
                for p in &mut self.players {
                    p.score += penalty;
                    action = action.with_score_delta(p.id, penalty);
                }
            }
        }
        debug!(player = %offender, penalty, policy = ?self.config.foul_award_policy, "foul");
        action
    }

    fn pass_turn(&mut self, carry_foul: bool) {
        let id = self.players[self.current].id;
        self.current_breaks.insert(id, 0);
        self.current = (self.current + 1) % self.players.len();
        if self.config.enforce_rules && self.reds_remaining > 0 && !self.respotted_black {
            self.requirement = PotRequirement::Red;
        }
        self.foul_carryover = carry_foul;
        self.turn_has_action = false;
    }

    fn advance_after_pot(&mut self, ball: Ball) {
        if self.reds_remaining > 0 {
            if ball.is_red() {
                self.reds_remaining -= 1;
                self.requirement = if self.reds_remaining == 0 {
                    PotRequirement::ColorSequence(0)
                } else {
                    PotRequirement::Color
                };
            } else {
                self.requirement = PotRequirement::Red;
            }
            return;
        }
        if self.respotted_black {
            if ball == Ball::Black {
                self.finish_frame();
            }
            return;
        }
        match self.requirement {
            PotRequirement::ColorSequence(i) => {
                let next = i + 1;
                self.requirement = PotRequirement::ColorSequence(next);
                if self.config.enforce_rules && next >= COLOR_SEQUENCE.len() {
                    self.colors_complete();
                }
            }
            PotRequirement::Red | PotRequirement::Color => {
                self.requirement = PotRequirement::ColorSequence(0);
            }
        }
    }

    /// The black has gone: respot it on a tie for the lead, otherwise the frame is over.
    fn colors_complete(&mut self) {
        if self.is_tie_for_lead() {
            self.respotted_black = true;
            self.requirement = PotRequirement::ColorSequence(COLOR_SEQUENCE.len() - 1);
            info!(score = ?self.leading_score(), "scores level, black respotted");
        } else {
            self.finish_frame();
        }
    }

    fn is_tie_for_lead(&self) -> bool {
        let Some(max) = self.leading_score() else {
            return false;
        };
        self.players.iter().filter(|p| p.score == max).count() > 1
    }

    fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    // --- Queries ---

    /// Returns the players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Returns the seat index of the player at the table
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn reds_remaining(&self) -> u8 {
        self.reds_remaining
    }

    pub fn requirement(&self) -> PotRequirement {
        self.requirement
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_started(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn respotted_black_active(&self) -> bool {
        self.respotted_black
    }

    pub fn foul_carryover_active(&self) -> bool {
        self.foul_carryover
    }

    pub fn turn_has_action(&self) -> bool {
        self.turn_has_action
    }

    pub fn has_enough_players(&self) -> bool {
        self.players.len() >= Self::MIN_PLAYERS
    }

    /// Balls that may be potted next. Empty when rules are not enforced, since
    /// any ball is then accepted.
    pub fn allowed_pots(&self) -> Vec<Ball> {
        if !self.config.enforce_rules {
            return Vec::new();
        }
        requirement::legal_pots(self.reds_remaining, self.requirement, self.respotted_black)
    }

    pub fn is_allowed_pot(&self, ball: Ball) -> bool {
        self.allowed_pots().contains(&ball)
    }

    /// Whether `ball` can still come into play this frame.
    pub fn is_color_on_table(&self, ball: Ball) -> bool {
        requirement::balls_on_table(self.reds_remaining, self.requirement, self.respotted_black)
            .contains(&ball)
    }

    pub fn current_ball_on(&self) -> Option<BallOnInfo> {
        requirement::ball_on(self.reds_remaining, self.requirement, self.respotted_black)
    }

    pub fn can_use_free_ball(&self) -> bool {
        self.config.enforce_rules
            && self.foul_carryover
            && !self.turn_has_action
            && self.current_ball_on().is_some()
    }

    pub fn free_ball_option(&self) -> Option<FreeBallOption> {
        if self.phase != Phase::InProgress || !self.can_use_free_ball() {
            return None;
        }
        let on = self.current_ball_on()?;
        Some(FreeBallOption {
            ball: on.ball,
            points: on.points,
            counts_as_red: self.reds_remaining > 0,
        })
    }

    pub fn can_use_replay(&self) -> bool {
        self.foul_carryover && !self.turn_has_action && self.phase == Phase::InProgress
    }

    pub fn can_use_off_table_foul(&self) -> bool {
        self.phase == Phase::InProgress
            && self.config.enforce_rules
            && self.current_ball_on().is_some_and(|on| on.off_table_removes_ball)
    }

    pub fn foul_count(&self, id: PlayerId) -> u32 {
        self.foul_counts.get(&id).copied().unwrap_or(0)
    }

    pub fn current_break(&self, id: PlayerId) -> i32 {
        self.current_breaks.get(&id).copied().unwrap_or(0)
    }

    pub fn highest_break(&self, id: PlayerId) -> i32 {
        self.highest_breaks.get(&id).copied().unwrap_or(0)
    }

    pub fn player_name(&self, id: PlayerId) -> &str {
        self.player(id).map(Player::name).unwrap_or("Unknown")
    }

    pub fn leading_score(&self) -> Option<i32> {
        self.players.iter().map(|p| p.score).max()
    }

    /// Leading with a positive score while a frame is being played.
    pub fn is_leading(&self, id: PlayerId) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        match (self.player(id), self.leading_score()) {
            (Some(p), Some(max)) => p.score == max && max > 0,
            _ => false,
        }
    }

    /// Players ordered by score, highest first; ties by name.
    pub fn final_standings(&self) -> Vec<&Player> {
        let mut out: Vec<&Player> = self.players.iter().collect();
        out.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        out
    }

    pub fn history(&self) -> &[ScoreAction] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Up to `n` actions ending `offset` entries before the latest.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<ScoreAction> {
        let len = self.history.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    /// One line of log text for an action.
    pub fn describe_action(&self, action: &ScoreAction) -> String {
        match action.kind() {
            ScoreActionKind::Pot { player, ball, points } => {
                format!("{} potted {} for {} points", self.player_name(player), ball, points)
            }
            ScoreActionKind::Foul { player, points } => {
                format!("{} fouled for {} points", self.player_name(player), points)
            }
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let seats = self
            .players
            .iter()
            .map(|p| SeatSnapshot {
                id: p.id,
                name: p.name.clone(),
                score: p.score,
                fouls: self.foul_count(p.id),
                current_break: self.current_break(p.id),
                highest_break: self.highest_break(p.id),
            })
            .collect();
        FrameSnapshot {
            seats,
            current: self.current,
            reds_remaining: self.reds_remaining,
            requirement: self.requirement,
            phase: self.phase,
            respotted_black: self.respotted_black,
            foul_carryover: self.foul_carryover,
            turn_has_action: self.turn_has_action,
            history_len: self.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_frame(enforce: bool) -> (Frame, PlayerId, PlayerId) {
        let mut f = Frame::new(FrameConfig { enforce_rules: enforce, ..FrameConfig::default() });
        let a = f.add_player("John").unwrap();
        let b = f.add_player("Anna").unwrap();
        f.start().unwrap();
        (f, a, b)
    }

    #[test]
    fn red_then_black_builds_a_break_of_eight() {
        let (mut f, a, _) = mk_frame(false);
        f.pot(Ball::Red).unwrap();
        f.pot(Ball::Black).unwrap();

        assert_eq!(f.players[0].score, 8);
        assert_eq!(f.current_break(a), 8);
        assert_eq!(f.highest_break(a), 8);
        assert_eq!(f.current, 0);

        f.advance_turn().unwrap();
        assert_eq!(f.current_break(a), 0);
        assert_eq!(f.highest_break(a), 8);
        assert_eq!(f.current, 1);
    }

    #[test]
    fn foul_on_blue_goes_to_next_player() {
        let (mut f, a, b) = mk_frame(true);
        f.pot(Ball::Red).unwrap();
        f.apply_foul(-5).unwrap();

        assert_eq!(f.foul_count(a), 1);
        assert_eq!(f.current_break(a), 0);
        assert_eq!(f.highest_break(a), 1);
        assert_eq!(f.player(b).unwrap().score, 5);
        assert_eq!(f.current, 1);
        assert_eq!(f.requirement, PotRequirement::Red);
        assert!(f.foul_carryover);
    }

    #[test]
    fn last_red_opens_the_clearance() {
        let (mut f, _, _) = mk_frame(false);
        f.reds_remaining = 1;
        f.pot(Ball::Red).unwrap();
        assert_eq!(f.reds_remaining, 0);
        assert_eq!(f.requirement, PotRequirement::ColorSequence(0));
        f.pot(Ball::Yellow).unwrap();
        assert_eq!(f.requirement, PotRequirement::ColorSequence(1));
    }

    #[test]
    fn illegal_pot_is_rejected_without_side_effects() {
        let (mut f, _, _) = mk_frame(true);
        let before = f.snapshot();
        assert_eq!(f.pot(Ball::Black), Err(FrameError::BallNotOn(Ball::Black)));
        assert_eq!(f.snapshot(), before);
    }

    #[test]
    fn removing_an_earlier_seat_keeps_the_pointer_on_the_same_player() {
        let mut f = Frame::default();
        let a = f.add_player("A").unwrap();
        let _b = f.add_player("B").unwrap();
        let c = f.add_player("C").unwrap();
        f.start().unwrap();
        f.advance_turn().unwrap();
        f.advance_turn().unwrap();
        assert_eq!(f.current_player().map(Player::id), Some(c));

        f.remove_player(a).unwrap();
        assert_eq!(f.current_player().map(Player::id), Some(c));

        f.remove_player(c).unwrap();
        assert_eq!(f.current, 0);
    }

    #[test]
    fn off_table_foul_undo_restores_reds() {
        let (mut f, a, b) = mk_frame(true);
        let before = f.snapshot();
        f.apply_off_table_foul().unwrap();
        assert_eq!(f.reds_remaining, 14);
        assert_eq!(f.player(b).unwrap().score, 4);
        assert_eq!(f.foul_count(a), 1);

        f.undo_last_action().unwrap();
        let after = f.snapshot();
        assert_eq!(after.seats, before.seats);
        assert_eq!(after.reds_remaining, 15);
        assert_eq!(after.requirement, PotRequirement::Red);
        assert_eq!(after.current, 0);
    }

    #[test]
    fn history_window_pages_from_the_end() {
        let (mut f, _, _) = mk_frame(false);
        for _ in 0..5 {
            f.pot(Ball::Red).unwrap();
        }
        let latest = f.history_recent_offset(2, 0);
        assert_eq!(latest.len(), 2);
        let older = f.history_recent_offset(2, 10);
        assert_eq!(older.len(), 2);
        assert_eq!(older[0].previous_reds_remaining(), 15);
        assert_eq!(latest[1].previous_reds_remaining(), 11);
    }
}
