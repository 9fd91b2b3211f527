// Match rules - lane, reach, attack windups and impact feedback

use crate::engine::physics::Lane;

/// Match configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Lane bounds are inverted: min {min} >= max {max}")]
    InvertedLane { min: f32, max: f32 },

    #[error("Minimum separation {separation} does not fit in a lane {width} wide")]
    SeparationTooWide { separation: f32, width: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("Spawn point {z} for player {player} is outside the lane")]
    SpawnOutsideLane { player: usize, z: f32 },

    #[error("Spawn points are {distance} apart, closer than the minimum separation {separation}")]
    SpawnsTooClose { distance: f32, separation: f32 },
}

/// Damage and feedback applied when an attack resolves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactTuning {
    /// Health removed from the victim
    pub damage: f32,
    /// Gameplay freeze after the impact (seconds)
    pub hit_stop: f32,
    /// Camera shake duration (seconds)
    pub shake_duration: f32,
    /// Camera shake starting intensity
    pub shake_intensity: f32,
}

/// Rules shared by both fighters for one match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Playfield bounds and minimum fighter separation
    pub lane: Lane,
    /// Maximum attacker-victim distance for an attack to connect
    pub hit_distance: f32,
    /// Delay between pressing punch and its damage
    pub punch_windup: f32,
    /// Delay between pressing jump-kick and its damage
    pub jump_kick_windup: f32,
    /// Clean hit
    pub hit: ImpactTuning,
    /// Hit taken while holding away
    pub block: ImpactTuning,
    /// Camera shake intensity lost per second
    pub shake_decay: f32,
    /// Lane position each player starts at
    pub spawn_z: [f32; 2],
}

/// Default rules for the two-player demo
pub const DEFAULT_MATCH: MatchConfig = MatchConfig {
    lane: Lane::new(-5.0, 5.0, 1.5),
    hit_distance: 2.5,
    punch_windup: 0.35,
    jump_kick_windup: 1.3,
    hit: ImpactTuning {
        damage: 5.0,
        hit_stop: 0.24,
        shake_duration: 0.5,
        shake_intensity: 0.5,
    },
    block: ImpactTuning {
        damage: 2.0,
        hit_stop: 0.12,
        shake_duration: 0.3,
        shake_intensity: 0.2,
    },
    shake_decay: 5.0,
    spawn_z: [-2.0, 2.0],
};

impl Default for MatchConfig {
    fn default() -> Self {
        DEFAULT_MATCH
    }
}

impl MatchConfig {
    /// Check the rules describe a playable match
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lane = &self.lane;
        if lane.min >= lane.max {
            return Err(ConfigError::InvertedLane {
                min: lane.min,
                max: lane.max,
            });
        }

        let width = lane.max - lane.min;
        if lane.min_separation >= width {
            return Err(ConfigError::SeparationTooWide {
                separation: lane.min_separation,
                width,
            });
        }

        for (name, value) in [
            ("hit_distance", self.hit_distance),
            ("punch_windup", self.punch_windup),
            ("jump_kick_windup", self.jump_kick_windup),
            ("shake_decay", self.shake_decay),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (player, &z) in self.spawn_z.iter().enumerate() {
            if z < lane.min || z > lane.max {
                return Err(ConfigError::SpawnOutsideLane { player, z });
            }
        }

        let distance = (self.spawn_z[0] - self.spawn_z[1]).abs();
        if distance <= lane.min_separation {
            return Err(ConfigError::SpawnsTooClose {
                distance,
                separation: lane.min_separation,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_match_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_block_is_milder_than_hit() {
        let config = MatchConfig::default();
        assert!(config.block.damage < config.hit.damage);
        assert!(config.block.hit_stop < config.hit.hit_stop);
        assert!(config.block.shake_duration < config.hit.shake_duration);
    }

    #[test]
    fn test_inverted_lane_rejected() {
        let mut config = MatchConfig::default();
        config.lane = Lane::new(5.0, -5.0, 1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedLane { .. })
        ));
    }

    #[test]
    fn test_separation_wider_than_lane_rejected() {
        let mut config = MatchConfig::default();
        config.lane = Lane::new(-1.0, 1.0, 3.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SeparationTooWide { .. })
        ));
    }

    #[test]
    fn test_non_positive_windup_rejected() {
        let mut config = MatchConfig::default();
        config.punch_windup = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "punch_windup",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_spawn_validation() {
        let mut config = MatchConfig::default();
        config.spawn_z = [-6.0, 2.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnOutsideLane { player: 0, .. })
        ));

        config.spawn_z = [0.0, 1.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnsTooClose { .. })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositive {
            name: "hit_distance",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "hit_distance must be positive, got -1");
    }
}
