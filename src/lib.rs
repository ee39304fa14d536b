//! snooker-scoreboard: snooker frame scoring engine
//!
//! Goals:
//! - Deterministic scoring of a single frame for two or more players
//! - Optional enforcement of the legal potting order, with the respotted-black tie-break
//! - Every pot and foul can be undone exactly, one step at a time
//! - Invalid intents never change state; they return a `FrameError` instead
//!
//! ## Quick start: score a short break
//! ```
//! use snooker_scoreboard::balls::Ball;
//! use snooker_scoreboard::config::FrameConfig;
//! use snooker_scoreboard::frame::{Frame, PotRequirement};
//!
//! let mut frame = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
//! let john = frame.add_player("John").unwrap();
//! frame.add_player("Anna").unwrap();
//! frame.start().unwrap();
//!
//! frame.pot(Ball::Red).unwrap();
//! frame.pot(Ball::Black).unwrap();
//! assert_eq!(frame.current_break(john), 8);
//! assert_eq!(frame.requirement(), PotRequirement::Red);
//!
//! frame.undo_last_action().unwrap();
//! assert_eq!(frame.current_break(john), 1);
//! ```
//!
//! ## TUI
//! Run the interactive scoreboard with:
//! ```sh
//! cargo run --bin snooker-scoreboard
//! ```

pub mod balls;
pub mod config;
pub mod engine;
pub mod frame;
pub mod player;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
