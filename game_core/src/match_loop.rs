//! The match a front end drives: owns every piece of game state

use hecs::World;

use crate::snapshot::{self, Snapshot};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, InputSnapshot, Key,
    MatchAction, MatchFsm, MatchPhase, Paddle, Score, Side, Time, Vec2,
};

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

pub struct Match {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub fsm: MatchFsm,
    pub rng: GameRng,
}

impl Match {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, 0.0);
        create_paddle(&mut world, Side::Right, 0.0);

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config.ball_speed_initial, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            time: Time::new(0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            fsm: MatchFsm::new(),
            rng,
        }
    }

    /// Advance the match by `dt` seconds with the keys currently held
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot) -> TickOutcome {
        if input.wants_quit() {
            log::info!("Quit requested during {:?}", self.fsm.phase());
            return TickOutcome::Quit;
        }

        if input.is_held(Key::Enter) && self.fsm.can_transition(MatchAction::Start) {
            self.fsm.transition(MatchAction::Start);
        } else if input.is_held(Key::R) {
            self.restart();
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.fsm,
            &mut self.rng,
            input,
        );

        TickOutcome::Continue
    }

    /// Zero the scores, relaunch from the centre and play again
    ///
    /// Only a finished match restarts; in any other phase nothing changes.
    fn restart(&mut self) {
        if !self.fsm.transition(MatchAction::Restart).success {
            return;
        }
        self.score.reset();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(self.config.ball_speed_initial, &mut self.rng);
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
            .unwrap_or(0.0)
    }

    /// Overwrite the ball's kinematics, e.g. to set up a serve
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = Ball::new(pos, vel);
        }
    }

    /// Move a paddle directly (clamped to the court)
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }

    pub fn winner(&self) -> Option<Side> {
        if self.fsm.is_game_over() {
            self.score.has_winner(self.config.win_score)
        } else {
            None
        }
    }

    /// Renderable state for this tick
    pub fn snapshot(&self) -> Snapshot {
        let phase = self.phase();
        let winner = self.winner();
        Snapshot {
            phase,
            left_paddle_y: self.paddle_y(Side::Left),
            right_paddle_y: self.paddle_y(Side::Right),
            paddle_height: self.config.paddle_height,
            paddle_width: self.config.paddle_width,
            paddle_plane_x: self.config.paddle_plane_x,
            ball_pos: self.ball().map(|ball| ball.pos).unwrap_or(Vec2::ZERO),
            ball_radius: self.config.ball_radius,
            score: self.score,
            winner,
            score_text: snapshot::score_text(&self.score),
            overlay_text: snapshot::overlay_text(phase, winner),
        }
    }
}
