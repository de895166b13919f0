use serde::Serialize;

use super::session::Session;
use crate::game::WorldSnapshot;
use crate::render::RenderTarget;

/// What a finished run reports
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub mode: String,
    pub games_played: u32,
    pub high_score: u32,
    pub mean_score: f32,
    pub scores: Vec<u32>,
    pub total_ticks: u64,
    pub elapsed: String,
    /// State of the game still on screen, if any
    pub final_world: Option<WorldSnapshot>,
}

impl SessionSummary {
    pub fn from_session<T: RenderTarget>(mode: &str, session: &Session<T>) -> Self {
        let metrics = session.metrics();
        Self {
            mode: mode.to_string(),
            games_played: metrics.games_played,
            high_score: metrics.high_score,
            mean_score: metrics.mean_score(),
            scores: metrics.scores.clone(),
            total_ticks: metrics.total_ticks,
            elapsed: metrics.format_time(),
            final_world: session.world().map(|world| world.snapshot()),
        }
    }
}
