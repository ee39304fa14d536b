//! Terminal scoreboard built on ratatui. It only talks to the engine through
//! [`crate::engine::FrameEngine`].

pub mod app;
pub mod controller;
mod ui;
