use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball's leading edge left the court (scoring)
pub fn check_scoring(
    world: &mut World,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - radius <= -1.0 {
            Side::Right
        } else if ball.pos.x + radius >= 1.0 {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        events.record_score(scorer);
        log::debug!(
            "{} player scores point {} ({} - {})",
            scorer.name(),
            score.get(scorer),
            score.left,
            score.right
        );

        ball.reset(config.ball_speed_initial, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.99, 0.3), Vec2::new(-0.5, 0.0));

        check_scoring(&mut world, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored && !events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.98, -0.2), Vec2::new(0.5, 0.1));

        check_scoring(&mut world, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.2, 0.7), Vec2::new(-2.0, 1.5));

        check_scoring(&mut world, &mut score, &mut events, &mut rng, &config);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::ZERO, "Ball should reset to centre");
            assert_eq!(ball.vel.x.abs(), config.ball_speed_initial);
            assert_eq!(ball.vel.y, 0.0, "Relaunch is horizontal");
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.9, 0.0), Vec2::new(0.5, 0.4));

        check_scoring(&mut world, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();

        for _ in 0..2 {
            world.clear();
            create_ball(&mut world, Vec2::new(1.1, 0.0), Vec2::new(0.5, 0.0));
            check_scoring(&mut world, &mut score, &mut events, &mut rng, &config);
            events.clear();
        }

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
