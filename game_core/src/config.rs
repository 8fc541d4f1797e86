use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_height: f32,
    pub paddle_width: f32,
    pub paddle_plane_x: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub ball_angle_factor: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_plane_x: Params::PADDLE_PLANE_X,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_angle_factor: Params::BALL_ANGLE_FACTOR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same physics, different score limit (clamped to at least 1)
    pub fn with_win_score(mut self, win_score: u8) -> Self {
        self.win_score = win_score.max(1);
        self
    }

    /// X of the face a paddle hits the ball with
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_plane_x,
            Side::Right => self.paddle_plane_x,
        }
    }

    /// Clamp paddle Y so the whole paddle stays on the court
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(-1.0 + half_height, 1.0 - half_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), -0.8, "Left paddle face");
        assert_eq!(config.paddle_x(Side::Right), 0.8, "Right paddle face");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(-5.0), -1.0 + half_height);
        assert_eq!(config.clamp_paddle_y(5.0), 1.0 - half_height);
        let valid_y = 0.3;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_win_score_never_zero() {
        assert_eq!(Config::new().with_win_score(0).win_score, 1);
        assert_eq!(Config::new().with_win_score(3).win_score, 3);
    }
}
