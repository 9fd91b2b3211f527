// Input handling system
//
// Turns raw keyboard events into per-player logical actions and exposes them
// to the match through the `ActionQuery` capability.
//
// ## Architecture
//
// - `action`: Logical fighter actions and the static P1/P2 control tables
// - `player`: Per-player pressed / just-pressed state
// - `config`: Binding lookup per player plus global meta bindings
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use lane_fighter::engine::input::{Action, ActionQuery, InputManager};
//
// let mut input_manager = InputManager::new(2)?;
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // The match queries held actions per player slot
// if input_manager.is_pressed(0, Action::Punch) {
//     // Player 1 is holding punch
// }
//
// // At the end of each frame, clear per-frame edges
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{InputConfig, InputConfigManager};
pub use manager::InputManager;
pub use player::PlayerInput;

/// Input configuration errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No static control table for player slot {0}")]
    NoBindings(usize),
}

/// "Is this logical action currently held" for a player slot
///
/// The match core reads input only through this trait.
pub trait ActionQuery {
    /// Whether `action` is held by the player in slot `player`
    fn is_pressed(&self, player: usize, action: Action) -> bool;

    /// Lane direction from the move keys: -1.0 (left), 0.0, or 1.0 (right)
    fn lane_direction(&self, player: usize) -> f32 {
        let mut direction = 0.0;
        if self.is_pressed(player, Action::MoveLeft) {
            direction -= 1.0;
        }
        if self.is_pressed(player, Action::MoveRight) {
            direction += 1.0;
        }
        direction
    }
}

/// Hand-driven `ActionQuery` for gameplay tests
#[cfg(test)]
pub(crate) mod testing {
    use super::{Action, ActionQuery};
    use std::collections::HashSet;

    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        held: HashSet<(usize, Action)>,
    }

    impl ScriptedInput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn hold(&mut self, player: usize, action: Action) {
            self.held.insert((player, action));
        }

        pub fn release(&mut self, player: usize, action: Action) {
            self.held.remove(&(player, action));
        }

        pub fn clear(&mut self) {
            self.held.clear();
        }
    }

    impl ActionQuery for ScriptedInput {
        fn is_pressed(&self, player: usize, action: Action) -> bool {
            self.held.contains(&(player, action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::NoBindings(2);
        assert_eq!(err.to_string(), "No static control table for player slot 2");
    }

    #[test]
    fn test_lane_direction_sums_move_keys() {
        let mut input = testing::ScriptedInput::new();
        assert_eq!(input.lane_direction(0), 0.0);

        input.hold(0, Action::MoveLeft);
        assert_eq!(input.lane_direction(0), -1.0);

        input.hold(0, Action::MoveRight);
        assert_eq!(input.lane_direction(0), 0.0);

        input.release(0, Action::MoveLeft);
        assert_eq!(input.lane_direction(0), 1.0);
        assert_eq!(input.lane_direction(1), 0.0);
    }
}
