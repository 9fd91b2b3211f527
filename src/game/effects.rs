// Shared impact feedback: hit-stop and camera shake

use super::config::ImpactTuning;

/// Feedback timers shared by both fighters
///
/// Hit-stop freezes gameplay while it runs but is itself counted down with
/// real frame time, as is the camera shake.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEffects {
    hit_stop_remaining: f32,
    shake_remaining: f32,
    shake_intensity: f32,
    /// Intensity lost per second
    shake_decay: f32,
}

impl MatchEffects {
    pub fn new(shake_decay: f32) -> Self {
        Self {
            hit_stop_remaining: 0.0,
            shake_remaining: 0.0,
            shake_intensity: 0.0,
            shake_decay,
        }
    }

    /// Start a tick of `real_dt` seconds, returns the gameplay delta
    ///
    /// The delta is 0 whenever hit-stop was running at the start of the tick.
    pub fn begin_tick(&mut self, real_dt: f32) -> f32 {
        let frozen = self.is_frozen();
        self.decay(real_dt);
        if frozen {
            0.0
        } else {
            real_dt
        }
    }

    /// Count all timers down by real time
    pub fn decay(&mut self, real_dt: f32) {
        self.hit_stop_remaining = (self.hit_stop_remaining - real_dt).max(0.0);
        self.shake_remaining = (self.shake_remaining - real_dt).max(0.0);
        self.shake_intensity = (self.shake_intensity - self.shake_decay * real_dt).max(0.0);
    }

    /// Start the feedback for a landed attack, replacing whatever was running
    pub fn apply(&mut self, tuning: &ImpactTuning) {
        self.hit_stop_remaining = tuning.hit_stop;
        self.shake_remaining = tuning.shake_duration;
        self.shake_intensity = tuning.shake_intensity;
    }

    pub fn reset(&mut self) {
        self.hit_stop_remaining = 0.0;
        self.shake_remaining = 0.0;
        self.shake_intensity = 0.0;
    }

    pub fn is_frozen(&self) -> bool {
        self.hit_stop_remaining > 0.0
    }

    pub fn hit_stop_remaining(&self) -> f32 {
        self.hit_stop_remaining
    }

    pub fn shake_remaining(&self) -> f32 {
        self.shake_remaining
    }

    pub fn shake_intensity(&self) -> f32 {
        self.shake_intensity
    }

    /// Scale for the camera's random offset this frame
    pub fn shake_amplitude(&self) -> f32 {
        self.shake_intensity * self.shake_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn hit() -> ImpactTuning {
        ImpactTuning {
            damage: 5.0,
            hit_stop: 0.24,
            shake_duration: 0.5,
            shake_intensity: 0.5,
        }
    }

    #[test]
    fn test_starts_idle() {
        let mut effects = MatchEffects::new(5.0);
        assert!(!effects.is_frozen());
        assert_eq!(effects.shake_amplitude(), 0.0);
        assert_eq!(effects.begin_tick(DT), DT);
    }

    #[test]
    fn test_hit_stop_freezes_gameplay() {
        let mut effects = MatchEffects::new(5.0);
        effects.apply(&hit());

        let mut frozen_ticks = 0;
        for _ in 0..30 {
            let was_running = effects.hit_stop_remaining() > 0.0;
            let before = effects.hit_stop_remaining();
            let dt = effects.begin_tick(DT);
            if was_running {
                assert_eq!(dt, 0.0);
                assert_relative_eq!(
                    effects.hit_stop_remaining(),
                    (before - DT).max(0.0),
                    epsilon = 1e-6
                );
                frozen_ticks += 1;
            } else {
                assert_eq!(dt, DT);
            }
        }

        // 0.24s at 60Hz
        assert!((14..=15).contains(&frozen_ticks));
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut effects = MatchEffects::new(5.0);
        effects.apply(&hit());

        effects.decay(0.05);
        assert_relative_eq!(effects.shake_remaining(), 0.45, epsilon = 1e-6);
        assert_relative_eq!(effects.shake_intensity(), 0.25, epsilon = 1e-6);
        assert_relative_eq!(effects.shake_amplitude(), 0.25 * 0.45, epsilon = 1e-6);

        effects.decay(1.0);
        assert_eq!(effects.shake_remaining(), 0.0);
        assert_eq!(effects.shake_intensity(), 0.0);
        assert_eq!(effects.shake_amplitude(), 0.0);
    }

    #[test]
    fn test_apply_replaces_running_effects() {
        let mut effects = MatchEffects::new(5.0);
        effects.apply(&hit());
        effects.apply(&ImpactTuning {
            damage: 2.0,
            hit_stop: 0.12,
            shake_duration: 0.3,
            shake_intensity: 0.2,
        });

        assert_eq!(effects.hit_stop_remaining(), 0.12);
        assert_eq!(effects.shake_remaining(), 0.3);
        assert_eq!(effects.shake_intensity(), 0.2);
    }

    #[test]
    fn test_reset() {
        let mut effects = MatchEffects::new(5.0);
        effects.apply(&hit());
        effects.reset();
        assert_eq!(effects, MatchEffects::new(5.0));
    }
}
