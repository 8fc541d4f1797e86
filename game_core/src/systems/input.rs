use hecs::World;

use crate::components::*;
use crate::input::InputSnapshot;

/// Turn the held keys into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.paddle_dir(paddle.side);
    }
}
