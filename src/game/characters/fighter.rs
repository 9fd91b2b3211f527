// Fighter entity: body, health, animation state and the hit waiting to land on it

use std::fmt;

use glam::Vec3;

use crate::engine::input::{Action, ActionQuery};
use crate::engine::physics::{KinematicBody, Lane};
use crate::game::combat::{AttackKind, PendingHit};

use super::animation::Animator;
use super::state::{AnimState, AnimStateMachine};
use super::stats::FighterStats;

/// Which side of the match a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Both players in update order
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// Input slot and array index of this player
    pub fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }

    /// The other player
    pub fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}

/// One of the two combatants in a match
#[derive(Debug)]
pub struct Fighter<A> {
    /// Player controlling this fighter
    pub player: PlayerId,
    /// Fixed tuning
    pub stats: FighterStats,

    // Physics
    body: KinematicBody,
    /// Direction the fighter last moved in along the lane
    facing: Vec3,

    // Combat
    health: f32,
    /// Attack that will land on this fighter when its windup runs out
    pending_hit: Option<PendingHit>,

    // Animation
    anim: AnimStateMachine,
    animator: A,
}

impl<A: Animator> Fighter<A> {
    /// Create a fighter standing at lane position `spawn_z`
    pub fn new(player: PlayerId, stats: FighterStats, spawn_z: f32, mut animator: A) -> Self {
        let mut anim = AnimStateMachine::new();
        anim.reset(&mut animator);

        Self {
            player,
            body: KinematicBody::at(Self::spawn_point(&stats, spawn_z)),
            facing: Self::spawn_facing(spawn_z),
            health: stats.max_health,
            pending_hit: None,
            anim,
            animator,
            stats,
        }
    }

    fn spawn_point(stats: &FighterStats, spawn_z: f32) -> Vec3 {
        Vec3::new(0.0, stats.gravity.ground_height, spawn_z)
    }

    /// Fighters start facing the middle of the lane
    fn spawn_facing(spawn_z: f32) -> Vec3 {
        if spawn_z <= 0.0 {
            Vec3::Z
        } else {
            -Vec3::Z
        }
    }

    /// Put the fighter back at `spawn_z` with full health and no pending hit
    pub fn reset(&mut self, spawn_z: f32) {
        self.body = KinematicBody::at(Self::spawn_point(&self.stats, spawn_z));
        self.facing = Self::spawn_facing(spawn_z);
        self.health = self.stats.max_health;
        self.pending_hit = None;
        self.anim.reset(&mut self.animator);
    }

    // Accessors

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    /// Health as a fraction of max health, for the UI bars
    pub fn health_ratio(&self) -> f32 {
        if self.stats.max_health <= 0.0 {
            return 0.0;
        }
        self.health / self.stats.max_health
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0.0
    }

    pub fn state(&self) -> AnimState {
        self.anim.state()
    }

    pub fn blend(&self) -> f32 {
        self.anim.blend()
    }

    pub fn pending_hit(&self) -> Option<PendingHit> {
        self.pending_hit
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    // Physics

    /// Run one physics tick: jump, gravity, lane movement, landing
    ///
    /// Lane movement is skipped in states that pin the fighter in place and is
    /// rejected outright when it would end too close to `opponent_z`.
    pub fn step_physics<Q: ActionQuery + ?Sized>(
        &mut self,
        input: &Q,
        lane: &Lane,
        opponent_z: f32,
        dt: f32,
    ) {
        let slot = self.player.index();
        let gravity = self.stats.gravity;

        if input.is_pressed(slot, Action::Jump) && self.body.jump(self.stats.jump_force) {
            log::debug!("{} jumps", self.player);
        }

        self.body.apply_gravity(&gravity, dt);

        if self.anim.state().can_move() {
            let direction = Lane::direction(input.lane_direction(slot));
            if let Some(next) = lane.try_step(
                self.body.position,
                direction,
                self.stats.move_speed,
                dt,
                opponent_z,
            ) {
                self.body.position = next;
                self.facing = direction;
            }
        }

        self.body.integrate_vertical(&gravity, dt);
    }

    // Combat

    /// Queue an attack against this fighter, replacing any attack already queued
    pub fn arm_hit(&mut self, kind: AttackKind, windup: f32) {
        if let Some(previous) = self.pending_hit {
            log::debug!(
                "{}: {:?} replaces pending {:?} ({:.2}s left)",
                self.player,
                kind,
                previous.kind,
                previous.remaining
            );
        }
        self.pending_hit = Some(PendingHit::new(kind, windup));
    }

    /// Count down the queued attack, returning it once its windup has run out
    pub fn tick_pending_hit(&mut self, dt: f32) -> Option<AttackKind> {
        let hit = self.pending_hit.as_mut()?;
        if !hit.tick(dt) {
            return None;
        }
        let kind = hit.kind;
        self.pending_hit = None;
        Some(kind)
    }

    /// Remove `amount` health, never going below zero. Returns the new health.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        self.health = (self.health - amount).max(0.0);
        self.health
    }

    // Animation

    /// Force the animation state, bypassing input
    pub fn force_state(&mut self, state: AnimState) {
        self.anim.enter(state, &mut self.animator);
    }

    /// Evaluate the animation state machine for this tick
    pub fn update_state<Q: ActionQuery + ?Sized>(&mut self, input: &Q) -> Option<AttackKind> {
        self.anim.update(
            input,
            self.player.index(),
            self.body.grounded,
            &mut self.animator,
            self.stats.blend_rate,
        )
    }

    /// Advance animation playback by gameplay time
    pub fn advance_animation(&mut self, dt: f32) {
        self.animator.advance(dt);
    }
}
