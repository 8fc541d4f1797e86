use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    bounce_off_walls(world, config, events);
    bounce_off_paddles(world, config, events);
}

/// Reflect the ball off the top and bottom walls
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Only flip while heading into the wall so one contact flips once
        if ball.pos.y + radius >= 1.0 && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = 1.0 - radius;
            events.ball_hit_wall = true;
        } else if ball.pos.y - radius <= -1.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = -1.0 + radius;
            events.ball_hit_wall = true;
        }
    }
}

/// Return the ball when its leading edge crossed a paddle face this step
pub fn bounce_off_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y))
        .collect();

    let radius = config.ball_radius;
    let half_height = config.paddle_height / 2.0;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let plane = config.paddle_x(side);

            let crossed = match side {
                Side::Left => {
                    ball.vel.x < 0.0
                        && ball.prev_pos.x - radius >= plane
                        && ball.pos.x - radius <= plane
                }
                Side::Right => {
                    ball.vel.x > 0.0
                        && ball.prev_pos.x + radius <= plane
                        && ball.pos.x + radius >= plane
                }
            };

            let offset = ball.pos.y - paddle_y;
            if !crossed || offset.abs() > half_height {
                continue;
            }

            let multiplier = config.ball_speed_increase;
            ball.vel.x = -ball.vel.x * multiplier;
            // Steeper returns the further from the paddle centre
            ball.vel.y = offset * config.ball_angle_factor * multiplier;

            ball.pos.x = match side {
                Side::Left => plane + radius,
                Side::Right => plane - radius,
            };

            events.ball_hit_paddle = true;
            log::trace!(
                "{} paddle hit at offset {:.3}, ball velocity now {:?}",
                side.name(),
                offset,
                ball.vel
            );
            break;
        }
    }
}
