use std::fmt;
use std::str::FromStr;

/// Object balls on a snooker table, ordered by point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Ball {
    Red = 1,
    Yellow = 2,
    Green = 3,
    Brown = 4,
    Blue = 5,
    Pink = 6,
    Black = 7,
}

/// Number of reds racked at the start of a frame.
pub const RED_COUNT: u8 = 15;

/// Minimum penalty for any foul.
pub const MIN_FOUL_POINTS: i32 = 4;

/// Order in which the colors must be potted once the reds are gone.
pub const COLOR_SEQUENCE: [Ball; 6] =
    [Ball::Yellow, Ball::Green, Ball::Brown, Ball::Blue, Ball::Pink, Ball::Black];

impl Ball {
    pub const ALL: [Ball; 7] =
        [Ball::Red, Ball::Yellow, Ball::Green, Ball::Brown, Ball::Blue, Ball::Pink, Ball::Black];

    /// Points scored for potting this ball.
    pub const fn points(self) -> i32 {
        self as u8 as i32
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Ball::Red)
    }

    pub const fn is_color(self) -> bool {
        !self.is_red()
    }

    /// Position in [`COLOR_SEQUENCE`]; `None` for red.
    pub const fn sequence_index(self) -> Option<usize> {
        match self {
            Ball::Red => None,
            Ball::Yellow => Some(0),
            Ball::Green => Some(1),
            Ball::Brown => Some(2),
            Ball::Blue => Some(3),
            Ball::Pink => Some(4),
            Ball::Black => Some(5),
        }
    }

    /// The color at `index` in the clearance order, if any.
    pub fn from_sequence_index(index: usize) -> Option<Ball> {
        COLOR_SEQUENCE.get(index).copied()
    }

    /// Foul value when this ball is involved: the ball's value, but never less than four.
    pub fn foul_points(self) -> i32 {
        self.points().max(MIN_FOUL_POINTS)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Ball::Red => "Red",
            Ball::Yellow => "Yellow",
            Ball::Green => "Green",
            Ball::Brown => "Brown",
            Ball::Blue => "Blue",
            Ball::Pink => "Pink",
            Ball::Black => "Black",
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BallParseError {
    #[error("invalid ball: '{0}'")]
    Invalid(String),
}

impl FromStr for Ball {
    type Err = BallParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let b = match t.to_ascii_lowercase().as_str() {
            "red" | "r" => Ball::Red,
            "yellow" | "y" => Ball::Yellow,
            "green" | "g" => Ball::Green,
            "brown" | "n" => Ball::Brown,
            "blue" | "b" => Ball::Blue,
            "pink" | "p" => Ball::Pink,
            "black" | "k" => Ball::Black,
            _ => return Err(BallParseError::Invalid(s.to_string())),
        };
        Ok(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_table() {
        let values: Vec<i32> = Ball::ALL.iter().map(|b| b.points()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn sequence_index_inverts_from_sequence_index() {
        for (i, ball) in COLOR_SEQUENCE.iter().enumerate() {
            assert_eq!(ball.sequence_index(), Some(i));
            assert_eq!(Ball::from_sequence_index(i), Some(*ball));
        }
        assert_eq!(Ball::Red.sequence_index(), None);
        assert_eq!(Ball::from_sequence_index(6), None);
    }

    #[test]
    fn foul_points_floor_at_four() {
        assert_eq!(Ball::Red.foul_points(), 4);
        assert_eq!(Ball::Brown.foul_points(), 4);
        assert_eq!(Ball::Blue.foul_points(), 5);
        assert_eq!(Ball::Black.foul_points(), 7);
    }

    #[test]
    fn parse_names_and_shorthand() {
        assert_eq!("Pink".parse::<Ball>().unwrap(), Ball::Pink);
        assert_eq!(" black ".parse::<Ball>().unwrap(), Ball::Black);
        assert_eq!("n".parse::<Ball>().unwrap(), Ball::Brown);
        assert!(matches!("cue".parse::<Ball>(), Err(BallParseError::Invalid(_))));
    }
}
