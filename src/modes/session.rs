use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use crate::game::{World, WorldConfig, WorldStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Painter, RenderTarget};
use crate::screen::{GameOverReason, GameOverScreen, GameScreen, Screen, Transition};

/// Drives screens: routes input, swaps screens and restarts worlds.
///
/// The caller decides the cadence; each `step` is one frame.
pub struct Session<T: RenderTarget> {
    config: WorldConfig,
    base_seed: u64,
    games_started: u64,
    screen: Box<dyn Screen>,
    target: T,
    input_handler: InputHandler,
    metrics: GameMetrics,
    finished: bool,
}

impl<T: RenderTarget> Session<T> {
    /// Start a session on a fresh world. With a seed, every game of the
    /// session is reproducible.
    pub fn new(config: WorldConfig, seed: Option<u64>, mut target: T) -> Result<Self> {
        config.validate().context("Invalid world configuration")?;
        let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

        let world = World::with_seed(&config, base_seed)?;
        let mut screen: Box<dyn Screen> =
            Box::new(GameScreen::new(world, Painter::new(config.cell_size)));
        screen.mount(&mut target);

        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        info!("session started with seed {}", base_seed);

        Ok(Self {
            config,
            base_seed,
            games_started: 1,
            screen,
            target,
            input_handler: InputHandler::new(),
            metrics,
            finished: false,
        })
    }

    /// Feed a raw key character
    pub fn press(&mut self, key: char) {
        let action = self.input_handler.handle_key(key);
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        if !self.finished {
            self.screen.handle_key(action);
        }
    }

    /// Run one frame of the current screen and act on its transition
    pub fn step(&mut self) -> Result<Transition> {
        if self.finished {
            return Ok(Transition::Exit);
        }

        let transition = self.screen.refresh(&mut self.target);
        self.metrics.update();

        match transition {
            Transition::Stay => {
                if self.screen.world().is_some() {
                    self.metrics.on_tick();
                }
            }
            Transition::GameOver { score, reason } => {
                // The fatal tick did not move the snake; only winning ticks count
                if reason == GameOverReason::Won {
                    self.metrics.on_tick();
                }
                self.finish_game(score, reason);
            }
            Transition::Restart => {
                self.record_abandoned_game();
                self.restart()?;
            }
            Transition::Exit => {
                self.record_abandoned_game();
                info!("session finished after {} games", self.metrics.games_played);
                self.screen.unmount();
                self.finished = true;
            }
        }

        Ok(transition)
    }

    /// End the running game early and show the game over screen
    pub fn end_game(&mut self) {
        let Some(world) = self.screen.world() else {
            return;
        };
        let score = world.score();
        let reason = match world.status() {
            WorldStatus::Won => GameOverReason::Won,
            WorldStatus::Dead(collision) => GameOverReason::Collision(collision),
            WorldStatus::Alive => GameOverReason::Stopped,
        };

        info!("game stopped at score {}", score);
        self.finish_game(score, reason);
    }

    /// The world being played, if a game is running
    pub fn world(&self) -> Option<&World> {
        self.screen.world()
    }

    pub fn screen_name(&self) -> &'static str {
        self.screen.name()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    fn finish_game(&mut self, score: u32, reason: GameOverReason) {
        self.metrics.on_game_over(score);
        info!(
            "game {} over: {:?}, score {}, high score {}",
            self.games_started, reason, score, self.metrics.high_score
        );

        let screen = GameOverScreen::new(
            score,
            self.metrics.high_score,
            reason,
            Painter::new(self.config.cell_size),
        );
        self.put_screen(Box::new(screen));
    }

    /// A game left via restart or quit still counts as played
    fn record_abandoned_game(&mut self) {
        if let Some(world) = self.screen.world() {
            let score = world.score();
            info!("game {} abandoned at score {}", self.games_started, score);
            self.metrics.on_game_over(score);
        }
    }

    fn restart(&mut self) -> Result<()> {
        let seed = self.base_seed.wrapping_add(self.games_started);
        let world = World::with_seed(&self.config, seed)?;
        self.games_started += 1;
        self.metrics.on_game_start();
        info!("restarting, game {} with seed {}", self.games_started, seed);

        let screen = GameScreen::new(world, Painter::new(self.config.cell_size));
        self.put_screen(Box::new(screen));
        Ok(())
    }

    fn put_screen(&mut self, mut screen: Box<dyn Screen>) {
        self.screen.unmount();
        screen.mount(&mut self.target);
        self.screen = screen;
    }
}
