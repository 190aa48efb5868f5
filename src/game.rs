use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::{
    ai::AiController,
    ball::Ball,
    config::{Config, CourtBounds, Params},
    input::InputEvent,
    paddle::Paddle,
};

/// Score/paddle index of the computer, on the left.
pub const AI_SIDE: usize = 0;
/// Score/paddle index of the pointer-driven player, on the right.
pub const HUMAN_SIDE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Computer,
    Player,
}

impl Winner {
    /// 1 for the computer, 2 for the player.
    pub fn number(&self) -> u8 {
        match self {
            Winner::Computer => 1,
            Winner::Player => 2,
        }
    }

    pub fn side(&self) -> usize {
        match self {
            Winner::Computer => AI_SIDE,
            Winner::Player => HUMAN_SIDE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Winner::Computer => "COMPUTER",
            Winner::Player => "PLAYER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    GameOver { winner: Winner },
}

type InputHandler = fn(&mut Game, InputEvent);

impl Screen {
    fn input_handler(&self) -> InputHandler {
        match self {
            Screen::Title => Game::handle_title_input,
            Screen::Playing => Game::handle_playing_input,
            Screen::GameOver { .. } => Game::handle_game_over_input,
        }
    }
}

/// What a tick produced, for the caller to log or react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PointScored { scorer: usize, scores: [u32; 2] },
    GameWon { winner: Winner, scores: [u32; 2] },
}

/// The first side to go past ten points wins.
pub fn check_win(scores: [u32; 2]) -> Option<Winner> {
    if scores[AI_SIDE] > Params::WINNING_MARGIN {
        Some(Winner::Computer)
    } else if scores[HUMAN_SIDE] > Params::WINNING_MARGIN {
        Some(Winner::Player)
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Game {
    bounds: CourtBounds,
    ball: Ball,
    paddles: [Paddle; 2],
    ai: AiController,
    scores: [u32; 2],
    winner: Option<Winner>,
    screen: Screen,
    rng: Pcg32,
    pending_input: VecDeque<InputEvent>,
}

impl Game {
    pub fn new(config: &Config) -> Self {
        let bounds = config.bounds();
        let seed = config.seed.unwrap_or_else(rand::random);
        let mid_y = bounds.height / 2.0;

        let paddles = [
            Paddle::new((bounds.paddle_x(AI_SIDE), mid_y).into()),
            Paddle::new((bounds.paddle_x(HUMAN_SIDE), mid_y).into()),
        ];
        let ai = AiController::new(&paddles[AI_SIDE], config.ai_max_speed);

        info!(seed, base_speed = bounds.base_speed, ai_speed = config.ai_max_speed, "new game");

        Self {
            bounds,
            ball: Ball::new(bounds.center()),
            paddles,
            ai,
            scores: [0, 0],
            winner: None,
            screen: Screen::Title,
            rng: Pcg32::seed_from_u64(seed),
            pending_input: VecDeque::new(),
        }
    }

    pub fn bounds(&self) -> &CourtBounds {
        &self.bounds
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: usize) -> &Paddle {
        &self.paddles[side]
    }

    /// Queues an input event; it takes effect on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending_input.push_back(event);
    }

    /// Drains queued input through the current screen's handler, then runs
    /// one physics step if a rally is in progress.
    pub fn tick(&mut self) -> Option<GameEvent> {
        while let Some(event) = self.pending_input.pop_front() {
            let handler = self.screen.input_handler();
            handler(self, event);
        }

        match self.screen {
            Screen::Playing => self.step_rally(),
            _ => None,
        }
    }

    fn handle_title_input(&mut self, event: InputEvent) {
        if event == InputEvent::PrimaryClick {
            self.start_game();
        }
    }

    fn handle_playing_input(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved { y } = event {
            self.paddles[HUMAN_SIDE].follow_pointer(y);
        }
    }

    fn handle_game_over_input(&mut self, event: InputEvent) {
        if event == InputEvent::PrimaryClick {
            info!("rematch");
            self.start_game();
        }
    }

    fn start_game(&mut self) {
        self.scores = [0, 0];
        self.winner = None;
        self.screen = Screen::Playing;
        self.new_point();
        info!("game started");
    }

    fn new_point(&mut self) {
        self.ball.reset_for_serve(&self.bounds, &mut self.rng);

        let mid_y = self.bounds.height / 2.0;
        for paddle in &mut self.paddles {
            paddle.recenter(mid_y);
        }
        self.ai.sync(&self.paddles[AI_SIDE]);
    }

    fn step_rally(&mut self) -> Option<GameEvent> {
        self.ball.update();

        let target_y = self.ball.position().y;
        self.ai.tick(&mut self.paddles[AI_SIDE], target_y);

        // human paddle is tested first
        for side in [HUMAN_SIDE, AI_SIDE] {
            if self.ball.collides_with(&self.paddles[side]) {
                self.ball.bounce_off_paddle(&self.paddles[side]);
            }
        }

        if self.ball.hits_wall(&self.bounds) {
            self.ball.bounce_off_wall();
        }

        let mut event = None;

        if self.ball.is_out_of_bounds(&self.bounds) {
            // Leaving past the right edge (x > 0) credits the left side.
            let scorer = if self.ball.position().x > 0.0 {
                AI_SIDE
            } else {
                HUMAN_SIDE
            };
            self.scores[scorer] += 1;
            debug!(scorer, scores = ?self.scores, "point scored");

            self.new_point();
            event = Some(GameEvent::PointScored {
                scorer,
                scores: self.scores,
            });
        }

        if let Some(winner) = check_win(self.scores) {
            self.winner = Some(winner);
            self.screen = Screen::GameOver { winner };
            info!(winner = winner.label(), scores = ?self.scores, "game over");
            event = Some(GameEvent::GameWon {
                winner,
                scores: self.scores,
            });
        }

        event
    }
}
