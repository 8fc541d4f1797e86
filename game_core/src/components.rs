use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Vertical offset of the paddle centre
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub prev_pos: Vec2, // Position before the last integration
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            prev_pos: pos,
        }
    }

    /// Reset ball to centre, flying horizontally at `speed` toward a random side
    pub fn reset(&mut self, speed: f32, rng: &mut GameRng) {
        self.pos = Vec2::ZERO;
        self.prev_pos = Vec2::ZERO;

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir * speed, 0.0);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // 1 = up, 0 = stop, -1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
