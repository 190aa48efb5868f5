use std::path::PathBuf;

use thiserror::Error;

use crate::{game_theme::GameTheme, vector::Vector2};

/// Court geometry and tuning
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 600.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    // Ball
    pub const BALL_DIAMETER: f32 = 15.0;
    pub const BALL_BASE_SPEED: f32 = 4.0;
    pub const SERVE_SLOPE_DIVISORS: std::ops::RangeInclusive<i32> = 1..=10;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 85.0;
    pub const PADDLE_INSET: f32 = 40.0;
    pub const AI_MAX_SPEED: f32 = 1.0;

    // Score: a side wins once its score goes past this
    pub const WINNING_MARGIN: u32 = 10;

    // Physics
    pub const TIME_STEP: f32 = 0.05;
    pub const TICK_RATE_HZ: u32 = 1000;
    pub const MAX_TICK_RATE_HZ: u32 = 10_000;
}

/// Read-only court description handed to the ball and paddles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtBounds {
    pub width: f32,
    pub height: f32,
    pub base_speed: f32,
}

impl CourtBounds {
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X of the left (0) or right (1) paddle.
    pub fn paddle_x(&self, side: usize) -> f32 {
        if side == 0 {
            Params::PADDLE_INSET
        } else {
            self.width - Params::PADDLE_INSET
        }
    }
}

impl Default for CourtBounds {
    fn default() -> Self {
        Self {
            width: Params::COURT_WIDTH,
            height: Params::COURT_HEIGHT,
            base_speed: Params::BALL_BASE_SPEED,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("tick rate must be between 1 and {max} Hz, got {value}")]
    TickRate { value: u32, max: u32 },
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_speed: f32,
    pub ai_max_speed: f32,
    pub tick_rate_hz: u32,
    pub seed: Option<u64>,
    pub theme: GameTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_speed: Params::BALL_BASE_SPEED,
            ai_max_speed: Params::AI_MAX_SPEED,
            tick_rate_hz: Params::TICK_RATE_HZ,
            seed: None,
            theme: GameTheme::Classic,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("ball speed", self.ball_speed), ("AI speed", self.ai_max_speed)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.tick_rate_hz == 0 || self.tick_rate_hz > Params::MAX_TICK_RATE_HZ {
            return Err(ConfigError::TickRate {
                value: self.tick_rate_hz,
                max: Params::MAX_TICK_RATE_HZ,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> CourtBounds {
        CourtBounds {
            base_speed: self.ball_speed,
            ..CourtBounds::default()
        }
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_standard_court() {
        let bounds = Config::new().bounds();
        assert_eq!(bounds.width, 600.0);
        assert_eq!(bounds.height, 400.0);
        assert_eq!(bounds.base_speed, 4.0);
        assert_eq!(bounds.paddle_x(0), 40.0);
        assert_eq!(bounds.paddle_x(1), 560.0);
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speeds() {
        let config = Config {
            ball_speed: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "ball speed", .. })
        ));

        let config = Config {
            ai_max_speed: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "AI speed", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_tick_rate() {
        for tick_rate_hz in [0, Params::MAX_TICK_RATE_HZ + 1] {
            let config = Config {
                tick_rate_hz,
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::TickRate { .. })));
        }
    }

    #[test]
    fn tick_interval_follows_rate() {
        let config = Config {
            tick_rate_hz: 500,
            ..Config::default()
        };
        assert_eq!(config.tick_interval(), std::time::Duration::from_millis(2));
    }
}
