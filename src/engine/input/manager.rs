// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use super::{ActionQuery, InputError};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Main input manager that coordinates all input for all players
#[derive(Debug)]
pub struct InputManager {
    /// Static binding tables for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,
}

impl InputManager {
    /// Create a new input manager for `num_players` players
    pub fn new(num_players: usize) -> Result<Self, InputError> {
        let config = InputConfigManager::new(num_players)?;
        let players = (0..num_players).map(PlayerInput::new).collect();

        Ok(Self { config, players })
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let source = InputSource::key(key_code);

        // A shared key (debug overrides, Escape) reaches every player bound to it
        for player in &mut self.players {
            let Some(action) = self.config.get_action(player.player_id(), source) else {
                continue;
            };
            match event.state {
                ElementState::Pressed if !event.repeat => player.press(action),
                ElementState::Pressed => {}
                ElementState::Released => player.release(action),
            }
        }
    }

    /// Clear per-frame edges for all players
    /// Call this once per frame after the match has consumed the input
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Check if any player pressed a specific action this frame
    pub fn any_player_just_pressed(&self, action: Action) -> bool {
        self.players.iter().any(|p| p.just_pressed(action))
    }

    /// Reset all player input states (e.g. when the window loses focus)
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl ActionQuery for InputManager {
    fn is_pressed(&self, player: usize, action: Action) -> bool {
        self.player(player).is_some_and(|p| p.is_pressed(action))
    }
}
