//! Read-only view of the game handed to the renderer

/// Everything the renderer needs from one frame
#[derive(Clone, Debug, PartialEq)]
pub struct GameStateSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score_player: u32,
    pub score_opponent: u32,
    pub frame: u64,
}

impl GameStateSnapshot {
    /// Scoreboard lines, player first
    pub fn score_lines(&self) -> (String, String) {
        (
            format!("You: {}", self.score_player),
            format!("CPU: {}", self.score_opponent),
        )
    }
}
