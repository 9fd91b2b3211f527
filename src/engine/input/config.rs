// Static per-player binding tables

use super::action::{self, Action, InputSource};
use super::InputError;
use std::collections::HashMap;

/// Input configuration for a single player
/// Maps input sources (keys) to fighter actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player ID this config is for
    player_id: usize,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_id: usize, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new(player_id);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Load the static control table for a player slot
    pub fn for_player(player_id: usize) -> Result<Self, InputError> {
        action::default_bindings_for(player_id)
            .map(|bindings| Self::from_bindings(player_id, bindings))
            .ok_or(InputError::NoBindings(player_id))
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind an input source to an action, replacing any previous use of the source
    fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            log::debug!(
                "{:?} rebound from {:?} to {:?} (slot {})",
                source,
                previous,
                action,
                self.player_id
            );
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

/// Binding tables for every player plus the global (meta) table
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Build the static tables for `num_players` players
    pub fn new(num_players: usize) -> Result<Self, InputError> {
        let configs = (0..num_players)
            .map(InputConfig::for_player)
            .collect::<Result<Vec<_>, _>>()?;

        let global_config = InputConfig::from_bindings(usize::MAX, action::global_bindings());

        Ok(Self {
            configs,
            global_config,
        })
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Get the action for a given input source and player
    /// Checks player-specific bindings first, then global bindings
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.get_config(player_id)
            .and_then(|config| config.get_action(source))
            .or_else(|| self.global_config.get_action(source))
    }

    /// Number of configured players
    pub fn num_players(&self) -> usize {
        self.configs.len()
    }
}
