use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use snake_cage::game::{ConfigError, Position, WorldConfig};
use snake_cage::modes::{AutoplayMode, ScriptMode, Session};
use snake_cage::render::AsciiCanvas;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_cage")]
#[command(version, about = "Fenced grid Snake world with headless drivers")]
struct Cli {
    /// How the snake is steered
    #[arg(long, default_value = "autoplay")]
    mode: Mode,

    /// JSON world configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width, fence included
    #[arg(long)]
    width: Option<i32>,

    /// Grid height, fence included
    #[arg(long)]
    height: Option<i32>,

    /// Start column of the head
    #[arg(long, requires = "start_y")]
    start_x: Option<i32>,

    /// Start row of the head
    #[arg(long, requires = "start_x")]
    start_y: Option<i32>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Games to play in autoplay mode
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,

    /// Tick cap per game in autoplay mode
    #[arg(long, default_value = "5000")]
    max_ticks: u64,

    /// Keys for script mode, one per frame ('.' = no key)
    #[arg(long, default_value = "")]
    script: String,

    /// Print every frame as text
    #[arg(long)]
    frames: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Greedy bot plays
    Autoplay,
    /// Replay a key script
    Script,
}

impl Cli {
    fn world_config(&self) -> Result<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::load(path)?,
            None => WorldConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        match (self.start_x, self.start_y) {
            (Some(x), Some(y)) => config.start = Position::new(x, y),
            _ if self.width.is_some() || self.height.is_some() => {
                let centred = WorldConfig::new(config.width, config.height).start;
                if let Err(ConfigError::StartOutsideInterior(_)) = config.validate() {
                    warn!(
                        "start ({}, {}) does not fit the resized grid, using ({}, {})",
                        config.start.x, config.start.y, centred.x, centred.y
                    );
                    config.start = centred;
                }
            }
            _ => {}
        }

        config.validate().context("Invalid world configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.world_config()?;
    info!(
        "world {}x{}, start ({}, {})",
        config.width, config.height, config.start.x, config.start.y
    );

    let canvas = AsciiCanvas::new(
        config.width as usize,
        config.height as usize,
        config.cell_size,
    );
    let session = Session::new(config, cli.seed, canvas)?;

    let print_frames = cli.frames;
    let on_frame = |session: &Session<AsciiCanvas>| {
        if print_frames {
            println!("{}", session.target().frame());
        }
    };

    let summary = match cli.mode {
        Mode::Autoplay => AutoplayMode::new(session, cli.games, cli.max_ticks).run(on_frame)?,
        Mode::Script => ScriptMode::new(session, cli.script.as_str()).run(on_frame)?,
    };

    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    println!("{}", json);

    Ok(())
}
