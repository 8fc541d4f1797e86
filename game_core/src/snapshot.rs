//! Plain values handed to the renderer once per tick

use glam::Vec2;

use crate::{MatchPhase, Score, Side};

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub paddle_height: f32,
    pub paddle_width: f32,
    pub paddle_plane_x: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub score: Score,
    pub winner: Option<Side>,
    pub score_text: String,
    pub overlay_text: Option<String>,
}

pub fn score_text(score: &Score) -> String {
    format!("{}  {}", score.left, score.right)
}

pub fn overlay_text(phase: MatchPhase, winner: Option<Side>) -> Option<String> {
    match (phase, winner) {
        (MatchPhase::AwaitingStart, _) => Some("Press ENTER to start".to_string()),
        (MatchPhase::Playing, _) => None,
        (MatchPhase::GameOver, Some(side)) => {
            Some(format!("{} player wins! Press R to restart", side.name()))
        }
        (MatchPhase::GameOver, None) => Some("Game over! Press R to restart".to_string()),
    }
}
