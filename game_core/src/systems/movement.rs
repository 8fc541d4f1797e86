use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * config.paddle_speed * time.dt;
            paddle.y += delta;

            // Clamp to court bounds
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_pos = ball.pos;
        ball.pos += ball.vel * time.dt;
    }
}
