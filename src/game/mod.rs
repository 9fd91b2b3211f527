// Game layer: fighters, combat rules and the match that ties them together

pub mod characters;
pub mod combat;
pub mod config;
pub mod effects;
pub mod session;

pub use config::{ConfigError, ImpactTuning, MatchConfig, DEFAULT_MATCH};
pub use effects::MatchEffects;
pub use session::{FighterView, MatchSession, MatchView, TickReport};
