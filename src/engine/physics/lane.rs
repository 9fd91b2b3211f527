use glam::Vec3;

/// The playfield axis fighters move along (world Z)
///
/// Movement is clamped to `[min, max]` and two bodies may never end a step
/// closer than `min_separation` on the lane axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    pub min: f32,
    pub max: f32,
    pub min_separation: f32,
}

impl Lane {
    pub const fn new(min: f32, max: f32, min_separation: f32) -> Self {
        Self {
            min,
            max,
            min_separation,
        }
    }

    /// Clamp a lane coordinate to the playfield
    pub fn clamp(&self, z: f32) -> f32 {
        z.clamp(self.min, self.max)
    }

    /// Unit vector along the lane for a signed input (-1, 0, 1)
    pub fn direction(input: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, input).normalize_or_zero()
    }

    /// Compute where a body ends up after moving `speed * dt` along `direction`
    ///
    /// Returns `None` when there is nothing to do or the step is rejected
    /// because it would end within `min_separation` of `opponent_z`.
    pub fn try_step(
        &self,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        dt: f32,
        opponent_z: f32,
    ) -> Option<Vec3> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let mut next = position + direction * speed * dt;
        if (next.z - opponent_z).abs() <= self.min_separation {
            return None;
        }

        next.z = self.clamp(next.z);
        Some(next)
    }
}

impl Default for Lane {
    fn default() -> Self {
        Self::new(-5.0, 5.0, 1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_normalizes_input() {
        assert_eq!(Lane::direction(1.0), Vec3::Z);
        assert_eq!(Lane::direction(-1.0), -Vec3::Z);
        assert_eq!(Lane::direction(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_step_moves_at_constant_speed() {
        let lane = Lane::default();
        let next = lane
            .try_step(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, 2.5, 0.1, 2.0)
            .unwrap();
        assert_relative_eq!(next.z, -1.75);
    }

    #[test]
    fn test_step_without_direction_is_rejected() {
        let lane = Lane::default();
        assert!(lane.try_step(Vec3::ZERO, Vec3::ZERO, 2.5, 0.1, 3.0).is_none());
    }

    #[test]
    fn test_step_into_opponent_is_rejected() {
        let lane = Lane::default();
        // Would end at exactly 1.5 from the opponent
        assert!(lane
            .try_step(Vec3::new(0.0, 0.0, 0.25), Vec3::Z, 2.5, 0.1, 2.0)
            .is_none());
        // Already too close and moving closer
        assert!(lane
            .try_step(Vec3::new(0.0, 0.0, 1.0), Vec3::Z, 2.5, 0.1, 2.0)
            .is_none());
    }

    #[test]
    fn test_step_away_from_close_opponent_is_allowed() {
        let lane = Lane::default();
        let next = lane
            .try_step(Vec3::new(0.0, 0.0, 0.4), -Vec3::Z, 2.5, 0.1, 2.0)
            .unwrap();
        assert_relative_eq!(next.z, 0.15, epsilon = 1e-6);
    }

    #[test]
    fn test_step_clamped_to_playfield() {
        let lane = Lane::default();
        let next = lane
            .try_step(Vec3::new(0.0, 0.0, -4.9), -Vec3::Z, 2.5, 0.1, 2.0)
            .unwrap();
        assert_eq!(next.z, -5.0);

        let next = lane
            .try_step(Vec3::new(0.0, 0.0, 4.95), Vec3::Z, 2.5, 0.1, -2.0)
            .unwrap();
        assert_eq!(next.z, 5.0);
    }

    #[test]
    fn test_step_keeps_height() {
        let lane = Lane::default();
        let next = lane
            .try_step(Vec3::new(0.0, 1.2, 0.0), Vec3::Z, 2.5, 0.1, 4.0)
            .unwrap();
        assert_eq!(next.y, 1.2);
    }
}
