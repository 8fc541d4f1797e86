//! Frame loop: poll input, tick the match, draw, wait out the frame budget

use std::time::{Duration, Instant};

use crate::{InputSnapshot, Match, MatchPhase, Params, Score, Snapshot, TickOutcome};

/// Reports which logical keys are held right now
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Draws one frame from plain values
pub trait Renderer {
    type Error;

    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;
}

/// Monotonic time plus a bounded wait for frame pacing
pub trait Clock {
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Wall-clock budget for one iteration of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacing {
    pub frame_budget: Duration,
}

impl FramePacing {
    pub fn from_fps(fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / fps.max(1),
        }
    }
}

impl Default for FramePacing {
    fn default() -> Self {
        Self::from_fps(Params::TARGET_FPS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: Score,
    pub phase: MatchPhase,
}

/// Drive the match until quit is requested or the renderer fails
pub fn run<I, R, C>(
    game: &mut Match,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
    pacing: FramePacing,
) -> Result<RunSummary, R::Error>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut frames = 0u64;
    let mut last = clock.now();

    loop {
        let frame_start = clock.now();
        // A stalled frame (debugger, suspended terminal) must not fling the ball
        let dt = frame_start
            .saturating_sub(last)
            .as_secs_f32()
            .min(Params::MAX_DT);
        last = frame_start;

        let keys = input.poll();
        if game.tick(dt, &keys) == TickOutcome::Quit {
            break;
        }

        renderer.draw(&game.snapshot())?;
        frames += 1;

        let spent = clock.now().saturating_sub(frame_start);
        if let Some(rest) = pacing.frame_budget.checked_sub(spent) {
            if !rest.is_zero() {
                clock.sleep(rest);
            }
        }
    }

    log::info!(
        "Loop ended after {} frames at {} - {}",
        frames,
        game.score.left,
        game.score.right
    );

    Ok(RunSummary {
        frames,
        score: game.score,
        phase: game.phase(),
    })
}
