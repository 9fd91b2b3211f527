// Combat resolution
//
// Attacks do not connect on the frame they are pressed. Starting a punch or a
// jump-kick in range queues the attack on the victim with a windup; when the
// windup runs out the attack lands as a hit or, if a standing victim is
// holding away from the attacker, as a block.

use glam::Vec3;

use crate::engine::input::{Action, ActionQuery};

use super::characters::animation::Animator;
use super::characters::{AnimState, Fighter, PlayerId};
use super::config::{ImpactTuning, MatchConfig};
use super::effects::MatchEffects;

/// The two attacks a fighter can start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Punch,
    JumpKick,
}

impl AttackKind {
    /// Seconds between starting the attack and its damage
    pub fn windup(&self, config: &MatchConfig) -> f32 {
        match self {
            Self::Punch => config.punch_windup,
            Self::JumpKick => config.jump_kick_windup,
        }
    }
}

/// An attack counting down on its victim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingHit {
    pub kind: AttackKind,
    /// Seconds until the attack lands
    pub remaining: f32,
}

impl PendingHit {
    pub fn new(kind: AttackKind, windup: f32) -> Self {
        Self {
            kind,
            remaining: windup,
        }
    }

    /// Count down by `dt`, returns true once the windup has run out
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// How a landed attack was received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactKind {
    Hit,
    Block,
}

/// A resolved attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub victim: PlayerId,
    pub attack: AttackKind,
    pub kind: ImpactKind,
    /// Reaction state the victim was put in
    pub reaction: AnimState,
    pub damage: f32,
    /// Victim health after the damage
    pub health: f32,
}

/// Check if two fighters are close enough for an attack to connect
pub fn in_hit_range(attacker: Vec3, victim: Vec3, hit_distance: f32) -> bool {
    attacker.distance(victim) <= hit_distance
}

/// Check if the victim holds the lane direction pointing away from the attacker
pub fn is_holding_away<Q: ActionQuery + ?Sized>(
    input: &Q,
    victim: PlayerId,
    attacker_z: f32,
    victim_z: f32,
) -> bool {
    let away = if attacker_z - victim_z > 0.0 {
        Action::MoveLeft
    } else {
        Action::MoveRight
    };
    input.is_pressed(victim.index(), away)
}

/// How a landed attack is received and the reaction state it forces
///
/// A crouching fighter cannot block: holding away only helps standing.
pub fn reaction(holding_away: bool, crouching: bool) -> (ImpactKind, AnimState) {
    if crouching {
        (ImpactKind::Hit, AnimState::CrouchHit)
    } else if holding_away {
        (ImpactKind::Block, AnimState::IdleBlock)
    } else {
        (ImpactKind::Hit, AnimState::IdleHit)
    }
}

/// Land `attack` on `victim`
///
/// Victims already reacting to a hit or a block shrug the attack off and
/// `None` is returned. Otherwise the victim is forced into its reaction
/// state, loses health and the shared hit-stop and camera shake are set.
pub fn resolve<A: Animator>(
    victim: &mut Fighter<A>,
    attack: AttackKind,
    holding_away: bool,
    config: &MatchConfig,
    effects: &mut MatchEffects,
) -> Option<Impact> {
    let state = victim.state();
    if state.is_reeling() {
        log::warn!(
            "{} ignores {:?}: already in {:?}",
            victim.player,
            attack,
            state
        );
        return None;
    }

    let (kind, reaction) = reaction(holding_away, state.is_crouching());
    let tuning: &ImpactTuning = match kind {
        ImpactKind::Hit => &config.hit,
        ImpactKind::Block => &config.block,
    };

    victim.force_state(reaction);
    let health = victim.take_damage(tuning.damage);
    effects.apply(tuning);

    log::info!(
        "{} {:?} by {:?}: -{} (health {})",
        victim.player,
        kind,
        attack,
        tuning.damage,
        health
    );

    Some(Impact {
        victim: victim.player,
        attack,
        kind,
        reaction,
        damage: tuning.damage,
        health,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::testing::ScriptedInput;
    use crate::game::characters::animation::ClipPlayer;
    use crate::game::characters::FighterStats;
    use approx::assert_relative_eq;

    fn victim_at(z: f32) -> Fighter<ClipPlayer> {
        Fighter::new(
            PlayerId::P2,
            FighterStats::standard(),
            z,
            ClipPlayer::with_fighter_clips(),
        )
    }

    #[test]
    fn test_windups() {
        let config = MatchConfig::default();
        assert_eq!(AttackKind::Punch.windup(&config), 0.35);
        assert_eq!(AttackKind::JumpKick.windup(&config), 1.3);
    }

    #[test]
    fn test_hit_range_is_inclusive() {
        assert!(in_hit_range(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 2.5));
        assert!(in_hit_range(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.5), 2.5));
        assert!(!in_hit_range(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.6), 2.5));
        // Height counts towards the distance
        assert!(!in_hit_range(Vec3::ZERO, Vec3::new(0.0, 2.0, 2.0), 2.5));
    }

    #[test]
    fn test_pending_hit_countdown() {
        let mut hit = PendingHit::new(AttackKind::Punch, 0.35);
        assert!(!hit.tick(0.2));
        assert_relative_eq!(hit.remaining, 0.15, epsilon = 1e-6);
        assert!(hit.tick(0.2));
    }

    #[test]
    fn test_holding_away_depends_on_side() {
        let mut input = ScriptedInput::new();

        // Attacker behind the victim on Z: away is right
        input.hold(1, Action::MoveRight);
        assert!(is_holding_away(&input, PlayerId::P2, 0.0, 2.0));
        assert!(!is_holding_away(&input, PlayerId::P2, 4.0, 2.0));

        // Attacker in front: away is left
        input.clear();
        input.hold(1, Action::MoveLeft);
        assert!(is_holding_away(&input, PlayerId::P2, 4.0, 2.0));
        assert!(!is_holding_away(&input, PlayerId::P2, 0.0, 2.0));

        // Another player's keys do not count
        input.clear();
        input.hold(0, Action::MoveRight);
        assert!(!is_holding_away(&input, PlayerId::P2, 0.0, 2.0));
    }

    #[test]
    fn test_reactions() {
        assert_eq!(reaction(false, false), (ImpactKind::Hit, AnimState::IdleHit));
        assert_eq!(reaction(true, false), (ImpactKind::Block, AnimState::IdleBlock));
        assert_eq!(reaction(false, true), (ImpactKind::Hit, AnimState::CrouchHit));
        // No crouch block off a real attack
        assert_eq!(reaction(true, true), (ImpactKind::Hit, AnimState::CrouchHit));
    }

    #[test]
    fn test_resolve_clean_hit() {
        let config = MatchConfig::default();
        let mut effects = MatchEffects::new(config.shake_decay);
        let mut victim = victim_at(2.0);

        let impact = resolve(&mut victim, AttackKind::Punch, false, &config, &mut effects)
            .unwrap();

        assert_eq!(impact.kind, ImpactKind::Hit);
        assert_eq!(impact.reaction, AnimState::IdleHit);
        assert_eq!(victim.state(), AnimState::IdleHit);
        assert_eq!(victim.health(), 95.0);
        assert_eq!(effects.hit_stop_remaining(), 0.24);
        assert_eq!(effects.shake_remaining(), 0.5);
        assert_eq!(effects.shake_intensity(), 0.5);
    }

    #[test]
    fn test_resolve_block() {
        let config = MatchConfig::default();
        let mut effects = MatchEffects::new(config.shake_decay);
        let mut victim = victim_at(2.0);

        let impact = resolve(&mut victim, AttackKind::JumpKick, true, &config, &mut effects)
            .unwrap();

        assert_eq!(impact.kind, ImpactKind::Block);
        assert_eq!(victim.state(), AnimState::IdleBlock);
        assert_eq!(victim.health(), 98.0);
        assert_eq!(effects.hit_stop_remaining(), 0.12);
        assert_eq!(effects.shake_remaining(), 0.3);
        assert_eq!(effects.shake_intensity(), 0.2);
    }

    #[test]
    fn test_resolve_crouching_victim() {
        let config = MatchConfig::default();
        let mut effects = MatchEffects::new(config.shake_decay);

        let mut victim = victim_at(2.0);
        victim.force_state(AnimState::IdleCrouch);
        resolve(&mut victim, AttackKind::Punch, false, &config, &mut effects);
        assert_eq!(victim.state(), AnimState::CrouchHit);

        let mut victim = victim_at(2.0);
        victim.force_state(AnimState::CrouchIdle);
        let impact = resolve(&mut victim, AttackKind::Punch, true, &config, &mut effects)
            .unwrap();
        assert_eq!(impact.kind, ImpactKind::Hit);
        assert_eq!(victim.state(), AnimState::CrouchHit);
        assert_eq!(victim.health(), 95.0);
        assert_eq!(effects.hit_stop_remaining(), 0.24);
        assert_eq!(effects.shake_intensity(), 0.5);
    }

    #[test]
    fn test_reeling_victim_ignores_hit() {
        let config = MatchConfig::default();
        let mut effects = MatchEffects::new(config.shake_decay);
        let mut victim = victim_at(2.0);
        victim.force_state(AnimState::HitIdle);

        assert!(resolve(&mut victim, AttackKind::Punch, false, &config, &mut effects).is_none());
        assert_eq!(victim.health(), 100.0);
        assert_eq!(victim.state(), AnimState::HitIdle);
        assert_eq!(effects.hit_stop_remaining(), 0.0);
    }

    #[test]
    fn test_resolve_overrides_any_other_state() {
        let config = MatchConfig::default();
        let mut effects = MatchEffects::new(config.shake_decay);
        let mut victim = victim_at(2.0);
        victim.force_state(AnimState::IdlePunch);

        resolve(&mut victim, AttackKind::Punch, false, &config, &mut effects);
        assert_eq!(victim.state(), AnimState::IdleHit);
        assert_eq!(victim.blend(), 0.0);
    }
}
