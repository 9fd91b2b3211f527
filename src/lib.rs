// Lane Fighter: two-player lane fighting game core
//
// - `engine`: input, kinematic physics and the fixed-timestep loop
// - `game`: fighters, animation state machine, combat and the match session

pub mod engine;
pub mod game;
