use serde::Serialize;
use std::time::{Duration, Instant};

/// Statistics across every game played in one session
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    /// When the session began; never reset
    #[serde(skip)]
    pub session_start: Instant,
    /// When the current game began
    #[serde(skip)]
    pub game_start: Instant,
    /// Time since the session began
    #[serde(skip)]
    pub elapsed_time: Duration,
    /// Time since the current game began
    #[serde(skip)]
    pub game_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Successful ticks across all games
    pub total_ticks: u64,
    /// Final score of each finished game, in order
    pub scores: Vec<u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            session_start: now,
            game_start: now,
            elapsed_time: Duration::ZERO,
            game_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            total_ticks: 0,
            scores: Vec::new(),
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.session_start.elapsed();
        self.game_time = self.game_start.elapsed();
    }

    /// Restart the per-game clock; the session clock keeps running
    pub fn on_game_start(&mut self) {
        self.game_start = Instant::now();
        self.game_time = Duration::ZERO;
    }

    pub fn on_tick(&mut self) {
        self.total_ticks += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.scores.push(final_score);
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn mean_score(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<u32>() as f32 / self.scores.len() as f32
    }

    /// Session time as mm:ss
    pub fn format_time(&self) -> String {
        format_duration(self.elapsed_time)
    }

    /// Current game time as mm:ss
    pub fn format_game_time(&self) -> String {
        format_duration(self.game_time)
    }
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_game_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.game_time = Duration::from_secs(61);
        assert_eq!(metrics.format_game_time(), "01:01");
    }

    #[test]
    fn test_game_start_keeps_session_clock() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.game_time.as_millis() < 50);
        assert!(metrics.elapsed_time.as_millis() >= 50);
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(50);
        assert_eq!(metrics.high_score, 50);

        metrics.on_game_over(30);
        assert_eq!(metrics.high_score, 50); // Should not decrease
        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.scores, vec![10, 50, 30]);
        assert!((metrics.mean_score() - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tick_counting() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.mean_score(), 0.0);

        metrics.on_tick();
        metrics.on_tick();
        assert_eq!(metrics.total_ticks, 2);
    }

    #[test]
    fn test_serializes_counters_only() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(20);

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["high_score"], 20);
        assert_eq!(json["games_played"], 1);
        assert!(json.get("session_start").is_none());
        assert!(json.get("game_time").is_none());
    }
}
