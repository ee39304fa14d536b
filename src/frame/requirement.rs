//! Legal-order rules: what is "on" given the reds left and the current requirement.

use crate::balls::{Ball, COLOR_SEQUENCE};

/// The category of ball that must be potted next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PotRequirement {
    /// A red must be potted next.
    Red,
    /// Any color may be potted; reds remain on the table.
    Color,
    /// Reds are gone and the colors are cleared in order. The index selects the
    /// mandatory color in [`COLOR_SEQUENCE`]; past the end the sequence is complete.
    ColorSequence(usize),
}

impl PotRequirement {
    /// The mandatory color while clearing, if the sequence has not run out.
    pub fn sequence_ball(self) -> Option<Ball> {
        match self {
            PotRequirement::ColorSequence(i) => Ball::from_sequence_index(i),
            PotRequirement::Red | PotRequirement::Color => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            PotRequirement::Red => "Red".to_string(),
            PotRequirement::Color => "Any color".to_string(),
            PotRequirement::ColorSequence(i) => match Ball::from_sequence_index(i) {
                Some(ball) => ball.to_string(),
                None => "Colors cleared".to_string(),
            },
        }
    }
}

/// The single definite ball that is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct BallOnInfo {
    pub ball: Ball,
    pub points: i32,
    /// Whether sending this ball off the table takes it out of play.
    pub off_table_removes_ball: bool,
}

impl BallOnInfo {
    fn of(ball: Ball) -> Self {
        Self { ball, points: ball.points(), off_table_removes_ball: true }
    }
}

/// What a free ball would score if nominated now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FreeBallOption {
    pub ball: Ball,
    pub points: i32,
    /// With reds still on, the nominated ball is played as a red.
    pub counts_as_red: bool,
}

pub(crate) fn legal_pots(
    reds: u8,
    requirement: PotRequirement,
    respotted_black: bool,
) -> Vec<Ball> {
    if respotted_black {
        return vec![Ball::Black];
    }
    if reds > 0 {
        return match requirement {
            PotRequirement::Red => vec![Ball::Red],
            PotRequirement::Color | PotRequirement::ColorSequence(_) => COLOR_SEQUENCE.to_vec(),
        };
    }
    match requirement {
        PotRequirement::ColorSequence(i) => Ball::from_sequence_index(i).into_iter().collect(),
        PotRequirement::Red | PotRequirement::Color => COLOR_SEQUENCE.to_vec(),
    }
}

/// Balls that can still become "on" at some point in the rest of the frame.
pub(crate) fn balls_on_table(
    reds: u8,
    requirement: PotRequirement,
    respotted_black: bool,
) -> Vec<Ball> {
    if respotted_black {
        return vec![Ball::Black];
    }
    if reds > 0 {
        return Ball::ALL.to_vec();
    }
    match requirement {
        PotRequirement::ColorSequence(i) => COLOR_SEQUENCE.get(i..).unwrap_or_default().to_vec(),
        PotRequirement::Red | PotRequirement::Color => COLOR_SEQUENCE.to_vec(),
    }
}

pub(crate) fn ball_on(
    reds: u8,
    requirement: PotRequirement,
    respotted_black: bool,
) -> Option<BallOnInfo> {
    if respotted_black {
        return Some(BallOnInfo::of(Ball::Black));
    }
    if reds > 0 {
        return (requirement == PotRequirement::Red).then(|| BallOnInfo::of(Ball::Red));
    }
    requirement.sequence_ball().map(BallOnInfo::of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reds_on_means_only_red() {
        assert_eq!(legal_pots(15, PotRequirement::Red, false), vec![Ball::Red]);
    }

    #[test]
    fn any_color_after_a_red() {
        assert_eq!(legal_pots(9, PotRequirement::Color, false), COLOR_SEQUENCE.to_vec());
    }

    #[test]
    fn clearance_allows_exactly_one_color() {
        assert_eq!(legal_pots(0, PotRequirement::ColorSequence(3), false), vec![Ball::Blue]);
        assert!(legal_pots(0, PotRequirement::ColorSequence(6), false).is_empty());
    }

    #[test]
    fn respotted_black_overrides_everything() {
        assert_eq!(legal_pots(0, PotRequirement::ColorSequence(5), true), vec![Ball::Black]);
        assert_eq!(balls_on_table(0, PotRequirement::ColorSequence(5), true), vec![Ball::Black]);
    }

    #[test]
    fn table_shrinks_as_colors_are_cleared() {
        assert_eq!(balls_on_table(3, PotRequirement::Red, false).len(), 7);
        assert_eq!(
            balls_on_table(0, PotRequirement::ColorSequence(4), false),
            vec![Ball::Pink, Ball::Black]
        );
        assert!(balls_on_table(0, PotRequirement::ColorSequence(7), false).is_empty());
    }

    #[test]
    fn no_definite_ball_on_while_choosing_a_color() {
        assert_eq!(ball_on(5, PotRequirement::Red, false).map(|b| b.ball), Some(Ball::Red));
        assert!(ball_on(5, PotRequirement::Color, false).is_none());
        assert_eq!(
            ball_on(0, PotRequirement::ColorSequence(2), false).map(|b| b.points),
            Some(4)
        );
        assert!(ball_on(0, PotRequirement::ColorSequence(6), false).is_none());
    }
}
