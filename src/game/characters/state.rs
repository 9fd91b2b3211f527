// Fighter animation state machine

use crate::engine::input::{Action, ActionQuery};
use crate::game::combat::AttackKind;

use super::animation::{Animator, Clip};
use super::bridge::Bridge;

/// Seconds of punch follow-through before returning to idle
pub const PUNCH_RECOVERY: f32 = 0.7;
/// Seconds of jump-kick follow-through before returning to idle
pub const KICK_RECOVERY: f32 = 2.0;
/// Seconds spent reeling from a hit
pub const HIT_RECOVERY: f32 = 1.0;
/// Seconds spent in a standing block
pub const BLOCK_RECOVERY: f32 = 0.5;
/// Seconds before a crouching fighter recovers from a hit or block
pub const CROUCH_RECOVERY: f32 = 0.2;

/// Animation state of a fighter
///
/// `Idle`, `Walk` and `Crouch` are steady states. Every other variant is a
/// bridge: a cross-fade between two clips that resolves into the state listed
/// in `AnimState::bridge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Crouch,

    IdleWalk,
    WalkIdle,
    IdlePunch,
    PunchIdle,
    IdleKick,
    KickIdle,
    IdleCrouch,
    CrouchIdle,
    IdleBlock,
    BlockIdle,
    CrouchBlock,
    BlockCrouch,
    IdleHit,
    HitIdle,
    CrouchHit,
    HitCrouch,
    IdleJump,
    JumpIdle,
}

impl AnimState {
    /// Bridge data for this state, `None` for steady states
    pub fn bridge(&self) -> Option<Bridge> {
        use AnimState::*;

        let bridge = match self {
            Idle | Walk | Crouch => return None,

            IdleWalk => Bridge::new(Clip::Idle, Clip::Walk, Walk, 0.0),
            WalkIdle => Bridge::new(Clip::Walk, Clip::Idle, Idle, 0.0),
            IdlePunch => Bridge::new(Clip::Idle, Clip::Punch, PunchIdle, 0.0),
            PunchIdle => Bridge::new(Clip::Punch, Clip::Idle, Idle, PUNCH_RECOVERY),
            IdleKick => Bridge::new(Clip::Idle, Clip::JumpKick, KickIdle, 0.0),
            KickIdle => Bridge::new(Clip::JumpKick, Clip::Idle, Idle, KICK_RECOVERY),
            IdleHit => Bridge::new(Clip::Idle, Clip::StandHit, HitIdle, 0.0),
            HitIdle => Bridge::new(Clip::StandHit, Clip::Idle, Idle, HIT_RECOVERY),
            IdleBlock => Bridge::new(Clip::Idle, Clip::StandBlock, BlockIdle, 0.0),
            BlockIdle => Bridge::new(Clip::StandBlock, Clip::Idle, Idle, BLOCK_RECOVERY),
            IdleCrouch => Bridge::new(Clip::Idle, Clip::Crouch, Crouch, 0.0),
            CrouchIdle => Bridge::new(Clip::Crouch, Clip::Idle, Idle, 0.0),
            // A crouching fighter is knocked up to standing and recovers as a stand hit
            CrouchHit => Bridge::new(Clip::Crouch, Clip::StandHit, HitIdle, 0.0),
            HitCrouch => Bridge::new(Clip::StandHit, Clip::Idle, Idle, CROUCH_RECOVERY),
            CrouchBlock => Bridge::new(Clip::Crouch, Clip::CrouchBlock, BlockCrouch, 0.0),
            BlockCrouch => {
                Bridge::new(Clip::CrouchBlock, Clip::Crouch, Crouch, CROUCH_RECOVERY)
            }
            IdleJump => Bridge::new(Clip::Idle, Clip::Jump, JumpIdle, 0.0),
            JumpIdle => Bridge::new(Clip::Jump, Clip::Idle, Idle, 0.0),
        };

        Some(bridge)
    }

    /// Check if this is a transitional (bridge) state
    pub fn is_bridge(&self) -> bool {
        self.bridge().is_some()
    }

    /// Check if lane input moves the fighter in this state
    pub fn can_move(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Walk | Self::IdleWalk | Self::WalkIdle
        )
    }

    /// Check if a landing attack should use the crouching reaction
    pub fn is_crouching(&self) -> bool {
        matches!(self, Self::Crouch | Self::IdleCrouch | Self::CrouchIdle)
    }

    /// Check if the fighter is already reacting to a hit or a block
    pub fn is_reeling(&self) -> bool {
        matches!(
            self,
            Self::IdleHit
                | Self::HitIdle
                | Self::CrouchHit
                | Self::HitCrouch
                | Self::IdleBlock
                | Self::BlockIdle
                | Self::CrouchBlock
                | Self::BlockCrouch
        )
    }
}

/// State machine that picks a fighter's animation state each tick
#[derive(Debug, Default)]
pub struct AnimStateMachine {
    state: AnimState,
    /// Progress of the bridge in flight (0 in steady states)
    blend: f32,
}

impl AnimStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Get the blend progress of the current bridge
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Switch to `state`, starting its fade when it is a bridge
    pub fn enter<A: Animator + ?Sized>(&mut self, state: AnimState, animator: &mut A) {
        log::debug!("{:?} -> {:?}", self.state, state);

        self.state = state;
        self.blend = 0.0;
        if let Some(bridge) = state.bridge() {
            bridge.begin(animator, &mut self.blend);
        }
    }

    /// Back to idle with the idle clip restarted
    pub fn reset<A: Animator + ?Sized>(&mut self, animator: &mut A) {
        self.state = AnimState::Idle;
        self.blend = 0.0;
        animator.play_single(Clip::Idle, 0.0);
    }

    /// Evaluate one tick for the player in slot `player`
    ///
    /// Bridge states only advance their fade; `JumpIdle` additionally waits for
    /// the fighter to land. Steady states read input and may enter a bridge.
    /// Returns the attack started this tick, if any, so the caller can arm it
    /// against the opponent.
    pub fn update<A, Q>(
        &mut self,
        input: &Q,
        player: usize,
        grounded: bool,
        animator: &mut A,
        blend_rate: f32,
    ) -> Option<AttackKind>
    where
        A: Animator + ?Sized,
        Q: ActionQuery + ?Sized,
    {
        if let Some(bridge) = self.state.bridge() {
            if self.state == AnimState::JumpIdle && !grounded {
                return None;
            }

            if let Some(next) = bridge.step(animator, &mut self.blend, blend_rate) {
                log::debug!("{:?} -> {:?}", self.state, next);
                self.state = next;
            }
            return None;
        }

        let (next, attack) = Self::steady_transition(self.state, input, player)?;
        self.enter(next, animator);
        attack
    }

    fn steady_transition<Q: ActionQuery + ?Sized>(
        state: AnimState,
        input: &Q,
        player: usize,
    ) -> Option<(AnimState, Option<AttackKind>)> {
        let pressed = |action: Action| input.is_pressed(player, action);
        let moving = pressed(Action::MoveLeft) || pressed(Action::MoveRight);

        let next = match state {
            AnimState::Idle => {
                let next = if moving {
                    Some(AnimState::IdleWalk)
                } else if pressed(Action::Punch) {
                    return Some((AnimState::IdlePunch, Some(AttackKind::Punch)));
                } else if pressed(Action::Crouch) {
                    Some(AnimState::IdleCrouch)
                } else if pressed(Action::DebugStandBlock) {
                    Some(AnimState::IdleBlock)
                } else if pressed(Action::DebugHit) {
                    Some(AnimState::IdleHit)
                } else if pressed(Action::Jump) {
                    Some(AnimState::IdleJump)
                } else {
                    None
                };

                // Jump-kick overrides anything a lone punch did not claim
                if pressed(Action::JumpKick) {
                    return Some((AnimState::IdleKick, Some(AttackKind::JumpKick)));
                }
                next?
            }
            AnimState::Walk => {
                if pressed(Action::Punch) {
                    AnimState::IdlePunch
                } else if pressed(Action::Crouch) {
                    AnimState::IdleCrouch
                } else if !moving {
                    AnimState::WalkIdle
                } else {
                    return None;
                }
            }
            AnimState::Crouch => {
                if !pressed(Action::Crouch) {
                    AnimState::CrouchIdle
                } else if pressed(Action::DebugCrouchBlock) {
                    AnimState::CrouchBlock
                } else if pressed(Action::DebugHit) {
                    AnimState::CrouchHit
                } else {
                    return None;
                }
            }
            _ => return None,
        };

        Some((next, None))
    }
}
