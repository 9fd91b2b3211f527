// Fighter action definitions and the static control tables

use winit::keyboard::KeyCode;

/// Represents all logical actions a fighter can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement along the lane
    MoveLeft,
    MoveRight,
    Jump,
    Crouch,

    // Attacks
    Punch,
    JumpKick,

    // Debug-only overrides used to preview reactions
    DebugStandBlock,
    DebugCrouchBlock,
    DebugHit,

    // Meta actions
    Pause,
    Quit,
}

impl Action {
    /// Actions that drive a fighter (everything except meta actions)
    pub const FIGHTER_ACTIONS: [Action; 9] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Crouch,
        Action::Punch,
        Action::JumpKick,
        Action::DebugStandBlock,
        Action::DebugCrouchBlock,
        Action::DebugHit,
    ];

    /// Check if this is one of the debug-only overrides
    pub fn is_debug(&self) -> bool {
        matches!(
            self,
            Self::DebugStandBlock | Self::DebugCrouchBlock | Self::DebugHit
        )
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings for Player 1 (left side of the keyboard)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyG), Action::JumpKick),
        (InputSource::key(KeyCode::KeyF), Action::Punch),
        (InputSource::key(KeyCode::KeyS), Action::Crouch),
        (InputSource::key(KeyCode::Digit1), Action::DebugStandBlock),
        (InputSource::key(KeyCode::Digit2), Action::DebugCrouchBlock),
        (InputSource::key(KeyCode::Digit3), Action::DebugHit),
    ]
}

/// Default bindings for Player 2 (arrow cluster)
/// Debug keys are shared with Player 1 and drive both fighters.
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyK), Action::JumpKick),
        (InputSource::key(KeyCode::KeyJ), Action::Punch),
        (InputSource::key(KeyCode::ArrowDown), Action::Crouch),
        (InputSource::key(KeyCode::Digit1), Action::DebugStandBlock),
        (InputSource::key(KeyCode::Digit2), Action::DebugCrouchBlock),
        (InputSource::key(KeyCode::Digit3), Action::DebugHit),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

/// Static binding table for a player slot, if that slot has one
pub fn default_bindings_for(player_id: usize) -> Option<Vec<(InputSource, Action)>> {
    match player_id {
        0 => Some(default_p1_bindings()),
        1 => Some(default_p2_bindings()),
        _ => None,
    }
}
