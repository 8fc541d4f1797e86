/// Game tuning parameters for Pong
///
/// The court spans normalized device coordinates: x and y in [-1, 1], y up.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_HEIGHT: f32 = 0.2;
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_PLANE_X: f32 = 0.8; // |x| of the inner face
    pub const PADDLE_SPEED: f32 = 0.6; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 0.025;
    pub const BALL_SPEED_INITIAL: f32 = 0.5;
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // Multiply vx on paddle hit
    pub const BALL_ANGLE_FACTOR: f32 = 5.0; // vy per unit of hit offset

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Longest frame the driver hands to a tick

    // Frame pacing
    pub const TARGET_FPS: u32 = 60;
}
