use crate::components::Side;

/// Time resource: seconds to simulate this step
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator used for ball launches
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment(Side::Right);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..3 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(3), Some(Side::Right));
        assert_eq!(score.has_winner(4), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 4, right: 2 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let xs: Vec<bool> = (0..16).map(|_| a.0.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..16).map(|_| b.0.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.record_score(Side::Left);
        events.record_score(Side::Right);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
