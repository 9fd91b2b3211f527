use glam::Vec3;

/// Constant downward acceleration and the ground plane it pulls toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Vertical acceleration in units/s² (negative pulls down)
    pub acceleration: f32,
    /// Height of the ground plane
    pub ground_height: f32,
}

impl Gravity {
    pub const fn new(acceleration: f32, ground_height: f32) -> Self {
        Self {
            acceleration,
            ground_height,
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(-10.0, 0.0)
    }
}

/// A body moved directly by game code: no forces besides gravity, no solver
///
/// Vertical motion is simple Euler integration against a flat ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// World position; Y is up
    pub position: Vec3,
    /// Current vertical velocity (units/s)
    pub vertical_velocity: f32,
    /// Whether the body rests on the ground plane
    pub grounded: bool,
}

impl KinematicBody {
    /// Create a body resting at `position`
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Launch upward if grounded. Returns whether the jump happened.
    pub fn jump(&mut self, force: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = force;
        self.grounded = false;
        true
    }

    /// Accelerate by gravity while airborne
    pub fn apply_gravity(&mut self, gravity: &Gravity, dt: f32) {
        if !self.grounded {
            self.vertical_velocity += gravity.acceleration * dt;
        }
    }

    /// Move by the vertical velocity and land on the ground plane
    pub fn integrate_vertical(&mut self, gravity: &Gravity, dt: f32) {
        self.position.y += self.vertical_velocity * dt;

        if self.position.y <= gravity.ground_height {
            self.position.y = gravity.ground_height;
            self.vertical_velocity = 0.0;
            self.grounded = true;
        }
    }
}
