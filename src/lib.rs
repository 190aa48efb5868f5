//! Pong against a simple AI, played with the mouse in a terminal.
//!
//! The simulation (`vector`, `sprite`, `ball`, `paddle`, `ai`, `game`) knows
//! nothing about terminals; `input` and `render` adapt it to crossterm and
//! ratatui.

pub mod ai;
pub mod ball;
pub mod config;
pub mod game;
pub mod game_theme;
pub mod helpers;
pub mod input;
pub mod paddle;
pub mod render;
pub mod sprite;
pub mod vector;

pub use config::{Config, ConfigError, CourtBounds, Params};
pub use game::{check_win, Game, GameEvent, Screen, Winner};
pub use input::InputEvent;
pub use vector::Vector2;
