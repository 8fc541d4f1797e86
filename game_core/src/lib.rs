pub mod components;
pub mod config;
pub mod driver;
pub mod fsm;
pub mod input;
pub mod match_loop;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use match_loop::*;
pub use params::*;
pub use resources::*;
pub use snapshot::Snapshot;

pub use glam::Vec2;

use hecs::World;
use systems::*;

/// Run the deterministic Pong match simulation for one tick
///
/// Does nothing unless the match is being played. Ends early on the
/// micro-step a side reaches the score limit.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    fsm: &mut MatchFsm,
    rng: &mut GameRng,
    input: &InputSnapshot,
) {
    // Clear events at start of tick
    events.clear();

    if !fsm.is_playing() {
        return;
    }

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // Fixed micro-steps for stable physics; the whole dt is simulated
    let mut remaining_dt = if time.dt.is_finite() {
        time.dt.max(0.0)
    } else {
        0.0
    };
    while remaining_dt > 0.0 {
        let step_time = Time::new(remaining_dt.min(Params::FIXED_DT));
        remaining_dt -= step_time.dt;

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Check collisions (ball vs walls, paddles)
        check_collisions(world, config, events);

        // 5. Check scoring (ball exited court)
        check_scoring(world, score, events, rng, config);

        // 6. Stop the match once someone reaches the limit
        if let Some(winner) = score.has_winner(config.win_score) {
            if fsm.transition(MatchAction::ScoreLimitReached).success {
                log::info!(
                    "{} player wins {} - {}",
                    winner.name(),
                    score.left,
                    score.right
                );
            }
            break;
        }
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
