// Kinematic physics for fighters: gravity, grounding and lane movement

pub mod body;
pub mod lane;

pub use body::{Gravity, KinematicBody};
pub use lane::Lane;
