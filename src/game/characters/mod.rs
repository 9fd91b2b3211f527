// Fighter system
//
// Everything that belongs to a single fighter:
// - Fighter entity: body, health and the attack queued against it
// - Fixed fighter stats
// - Animation state machine and the bridge table it drives
// - Animation playback capability and a timing-only implementation

pub mod animation;
pub mod bridge;
pub mod fighter;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{Animator, Clip, ClipPlayer};
pub use bridge::Bridge;
pub use fighter::{Fighter, PlayerId};
pub use state::{AnimState, AnimStateMachine};
pub use stats::{FighterStats, BASE_STATS};
