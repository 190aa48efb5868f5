use std::{
    fs::File,
    io::{self},
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    ExecutableCommand,
};
use ratatui::DefaultTerminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use court_pong::{
    config::{Config, ConfigError, Params},
    game::{Game, GameEvent},
    game_theme::GameTheme,
    input::{self, Action, Viewport},
    render,
};

/// Longest we wait for input before drawing again.
const FRAME: Duration = Duration::from_millis(16);
/// Physics catch-up cap per frame; any backlog past this is dropped.
const MAX_TICKS_PER_FRAME: u32 = 250;

#[derive(Debug, Parser)]
#[command(name = "court-pong", version, about = "Mouse-driven Pong against the computer")]
struct Cli {
    /// Seed for serve randomness (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = GameTheme::Classic)]
    theme: GameTheme,

    /// Physics updates per second
    #[arg(long, default_value_t = Params::TICK_RATE_HZ)]
    tick_rate: u32,

    /// Horizontal ball speed, in court units per time step
    #[arg(long, default_value_t = Params::BALL_BASE_SPEED)]
    ball_speed: f32,

    /// Top speed of the computer's paddle
    #[arg(long, default_value_t = Params::AI_MAX_SPEED)]
    ai_speed: f32,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            ball_speed: self.ball_speed,
            ai_max_speed: self.ai_speed,
            tick_rate_hz: self.tick_rate,
            seed: self.seed,
            theme: self.theme,
        }
    }
}

struct App {
    exit: bool,
    game: Game,
    theme: GameTheme,
    viewport: Viewport,
    tick_interval: Duration,
    // matches won this session: [computer, player]
    wins: [u32; 2],
}

impl App {
    fn new(config: &Config) -> Self {
        Self {
            exit: false,
            game: Game::new(config),
            theme: config.theme,
            viewport: Viewport::default(),
            tick_interval: config.tick_interval(),
            wins: [0, 0],
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        let mut last_frame = Instant::now();
        let mut lag = Duration::ZERO;

        while !self.exit {
            self.handle_events()?;

            let now = Instant::now();
            lag += now - last_frame;
            last_frame = now;

            let mut ticks = 0;
            while lag >= self.tick_interval && ticks < MAX_TICKS_PER_FRAME {
                if let Some(GameEvent::GameWon { winner, .. }) = self.game.tick() {
                    self.wins[winner.side()] += 1;
                }
                lag -= self.tick_interval;
                ticks += 1;
            }
            if ticks == MAX_TICKS_PER_FRAME {
                debug!(dropped = ?lag, "physics fell behind");
                lag = Duration::ZERO;
            }

            terminal.draw(|frame| self.viewport = render::draw(frame, &self.game, self.theme))?;
        }

        Ok(())
    }

    /// Waits up to one frame for input, then drains whatever else is ready.
    fn handle_events(&mut self) -> io::Result<()> {
        let mut timeout = FRAME;
        while event::poll(timeout)? {
            match input::translate(&event::read()?, &self.viewport) {
                Some(Action::Quit) => self.exit = true,
                Some(Action::Game(input_event)) => self.game.push_input(input_event),
                None => {}
            }
            timeout = Duration::ZERO;
        }
        Ok(())
    }
}

fn init_logging(path: &Path) -> Result<(), ConfigError> {
    let file = File::create(path).map_err(|source| ConfigError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.config();
    config.validate().context("invalid configuration")?;
    info!(theme = config.theme.name(), tick_rate = config.tick_rate_hz, "starting");

    let mut app = App::new(&config);

    let terminal = ratatui::init();
    let mut stdout = io::stdout();
    let app_result = stdout
        .execute(EnableMouseCapture)
        .and_then(|_| app.run(terminal));

    // best effort: the terminal must be restored even if capture never started
    let _ = stdout.lock().execute(DisableMouseCapture);
    ratatui::restore();

    app_result.context("terminal I/O failed")?;

    let scores = app.game.scores();
    println!("Thanks for playing court.pong!");
    println!(
        "Last score: computer {} - {} player  |  matches won: computer {}, player {}",
        scores[0], scores[1], app.wins[0], app.wins[1]
    );
    info!(wins = ?app.wins, "exiting");

    Ok(())
}
