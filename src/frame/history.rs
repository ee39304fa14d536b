//! The undo log: one immutable record per pot or foul.

use super::PotRequirement;
use crate::balls::Ball;
use crate::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreActionKind {
    Pot { player: PlayerId, ball: Ball, points: i32 },
    Foul { player: PlayerId, points: i32 },
}

impl ScoreActionKind {
    /// The player at the table when the action happened.
    pub fn player(self) -> PlayerId {
        match self {
            ScoreActionKind::Pot { player, .. } | ScoreActionKind::Foul { player, .. } => player,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            ScoreActionKind::Pot { points, .. } | ScoreActionKind::Foul { points, .. } => points,
        }
    }
}

/// Table position before a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    pub(crate) current: usize,
    pub(crate) reds_remaining: u8,
    pub(crate) requirement: PotRequirement,
}

/// One reversible scoring transition.
///
/// Holds the deltas that were applied and the values they replaced. Undoing
/// subtracts the deltas and writes the replaced values back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAction {
    kind: ScoreActionKind,
    score_deltas: Vec<(PlayerId, i32)>,
    foul_deltas: Vec<(PlayerId, u32)>,
    before: Checkpoint,
    previous_current_breaks: Vec<(PlayerId, i32)>,
    previous_highest_breaks: Vec<(PlayerId, i32)>,
}

impl ScoreAction {
    pub(crate) fn new(kind: ScoreActionKind, before: Checkpoint) -> Self {
        Self {
            kind,
            score_deltas: Vec::new(),
            foul_deltas: Vec::new(),
            before,
            previous_current_breaks: Vec::new(),
            previous_highest_breaks: Vec::new(),
        }
    }

    pub(crate) fn with_score_delta(mut self, player: PlayerId, delta: i32) -> Self {
        self.score_deltas.push((player, delta));
        self
    }

    pub(crate) fn with_foul_delta(mut self, player: PlayerId, delta: u32) -> Self {
        self.foul_deltas.push((player, delta));
        self
    }

    pub(crate) fn with_previous_breaks(
        mut self,
        player: PlayerId,
        current: i32,
        highest: i32,
    ) -> Self {
        self.previous_current_breaks.push((player, current));
        self.previous_highest_breaks.push((player, highest));
        self
    }

    pub fn kind(&self) -> ScoreActionKind {
        self.kind
    }

    /// Score changes applied per player.
    pub fn score_deltas(&self) -> &[(PlayerId, i32)] {
        &self.score_deltas
    }

    pub fn foul_deltas(&self) -> &[(PlayerId, u32)] {
        &self.foul_deltas
    }

    /// Points this action gave `player`, zero if none.
    pub fn score_delta_for(&self, player: PlayerId) -> i32 {
        self.score_deltas.iter().filter(|(id, _)| *id == player).map(|(_, d)| d).sum()
    }

    pub fn previous_current_index(&self) -> usize {
        self.before.current
    }

    pub fn previous_reds_remaining(&self) -> u8 {
        self.before.reds_remaining
    }

    pub fn previous_requirement(&self) -> PotRequirement {
        self.before.requirement
    }

    pub fn previous_current_breaks(&self) -> &[(PlayerId, i32)] {
        &self.previous_current_breaks
    }

    pub fn previous_highest_breaks(&self) -> &[(PlayerId, i32)] {
        &self.previous_highest_breaks
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        self.before
    }
}
