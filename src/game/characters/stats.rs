// Fighter stats - both players use the same body and the same numbers

use crate::engine::physics::Gravity;

/// Fixed per-fighter tuning
#[derive(Debug, Clone)]
pub struct FighterStats {
    // Movement
    /// Lane walking speed (units/second)
    pub move_speed: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,
    /// Gravity and ground plane
    pub gravity: Gravity,

    // Combat
    /// Health at match start
    pub max_health: f32,

    // Animation
    /// Blend progress added per tick while a bridge is ramping
    pub blend_rate: f32,
}

/// The ONE set of fighter stats used by both players
pub const BASE_STATS: FighterStats = FighterStats {
    move_speed: 2.5,
    jump_force: 6.0,
    gravity: Gravity::new(-10.0, 0.0),

    max_health: 100.0,

    blend_rate: 0.13,
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl FighterStats {
    /// Get the standard fighter stats (same for both players)
    pub fn standard() -> Self {
        BASE_STATS
    }
}
