// Match session: owns both fighters and the shared effects, runs the tick

use glam::Vec3;

use crate::engine::input::ActionQuery;

use super::characters::{AnimState, Animator, Fighter, FighterStats, PlayerId};
use super::combat::{self, Impact};
use super::config::{ConfigError, MatchConfig};
use super::effects::MatchEffects;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Delta the gameplay ran with (0 while hit-stop froze it)
    pub gameplay_dt: f32,
    /// Attacks that landed, indexed by victim
    pub impacts: [Option<Impact>; 2],
}

impl TickReport {
    pub fn is_frozen(&self) -> bool {
        self.gameplay_dt == 0.0
    }
}

/// Renderer-facing snapshot of one fighter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterView {
    pub position: Vec3,
    pub facing: Vec3,
    pub health_ratio: f32,
    pub state: AnimState,
}

/// Renderer-facing snapshot of the match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchView {
    pub fighters: [FighterView; 2],
    pub hit_stop_remaining: f32,
    pub shake_remaining: f32,
    pub shake_intensity: f32,
    pub shake_amplitude: f32,
}

/// A two-player match
#[derive(Debug)]
pub struct MatchSession<A> {
    config: MatchConfig,
    fighters: [Fighter<A>; 2],
    effects: MatchEffects,
    /// Ticks run since the last reset, frozen ones included
    tick_count: u64,
}

impl<A: Animator> MatchSession<A> {
    /// Create a match, one animator per player in `PlayerId` order
    pub fn new(
        config: MatchConfig,
        stats: FighterStats,
        animators: [A; 2],
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let [p1_animator, p2_animator] = animators;
        let fighters = [
            Fighter::new(PlayerId::P1, stats.clone(), config.spawn_z[0], p1_animator),
            Fighter::new(PlayerId::P2, stats, config.spawn_z[1], p2_animator),
        ];

        log::info!(
            "Match created: lane [{}, {}], spawns {:?}",
            config.lane.min,
            config.lane.max,
            config.spawn_z
        );

        Ok(Self {
            effects: MatchEffects::new(config.shake_decay),
            config,
            fighters,
            tick_count: 0,
        })
    }

    /// Restore both fighters and clear all timers and effects
    pub fn reset(&mut self) {
        for player in PlayerId::ALL {
            let spawn_z = self.config.spawn_z[player.index()];
            self.fighters[player.index()].reset(spawn_z);
        }
        self.effects.reset();
        self.tick_count = 0;
        log::info!("Match reset");
    }

    /// Run one tick of `real_dt` seconds
    ///
    /// Order: hit-stop gate, physics for both fighters, then per player the
    /// queued attack against it followed by its state machine, then animation.
    /// While hit-stop runs only the effects count down.
    pub fn tick<Q: ActionQuery + ?Sized>(&mut self, input: &Q, real_dt: f32) -> TickReport {
        self.tick_count += 1;

        let dt = self.effects.begin_tick(real_dt);
        let mut report = TickReport {
            gameplay_dt: dt,
            ..Default::default()
        };
        if dt <= 0.0 {
            return report;
        }

        for player in PlayerId::ALL {
            let (fighter, opponent) = Self::pair_mut(&mut self.fighters, player);
            fighter.step_physics(input, &self.config.lane, opponent.position().z, dt);
        }

        for player in PlayerId::ALL {
            let (fighter, opponent) = Self::pair_mut(&mut self.fighters, player);

            if let Some(attack) = fighter.tick_pending_hit(dt) {
                let holding_away = combat::is_holding_away(
                    input,
                    player,
                    opponent.position().z,
                    fighter.position().z,
                );
                let impact = combat::resolve(
                    fighter,
                    attack,
                    holding_away,
                    &self.config,
                    &mut self.effects,
                );
                if impact.is_some() && fighter.is_knocked_out() {
                    log::info!("{} is knocked out", player);
                }
                report.impacts[player.index()] = impact;
            }

            if let Some(attack) = fighter.update_state(input) {
                if combat::in_hit_range(
                    fighter.position(),
                    opponent.position(),
                    self.config.hit_distance,
                ) {
                    let windup = attack.windup(&self.config);
                    log::debug!(
                        "{} {:?} will land on {} in {}s",
                        player,
                        attack,
                        opponent.player,
                        windup
                    );
                    opponent.arm_hit(attack, windup);
                }
            }
        }

        for fighter in self.fighters.iter_mut() {
            fighter.advance_animation(dt);
        }

        report
    }

    /// The fighter for `player` and its opponent
    fn pair_mut(
        fighters: &mut [Fighter<A>; 2],
        player: PlayerId,
    ) -> (&mut Fighter<A>, &mut Fighter<A>) {
        let [p1, p2] = fighters;
        match player {
            PlayerId::P1 => (p1, p2),
            PlayerId::P2 => (p2, p1),
        }
    }

    pub fn fighter(&self, player: PlayerId) -> &Fighter<A> {
        &self.fighters[player.index()]
    }

    pub fn effects(&self) -> &MatchEffects {
        &self.effects
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The player still standing once the other is knocked out
    pub fn winner(&self) -> Option<PlayerId> {
        let [p1, p2] = &self.fighters;
        match (p1.is_knocked_out(), p2.is_knocked_out()) {
            (false, true) => Some(PlayerId::P1),
            (true, false) => Some(PlayerId::P2),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.fighters.iter().any(|fighter| fighter.is_knocked_out())
    }

    /// Snapshot for the renderer, camera and UI bars
    pub fn view(&self) -> MatchView {
        let fighter_view = |fighter: &Fighter<A>| FighterView {
            position: fighter.position(),
            facing: fighter.facing(),
            health_ratio: fighter.health_ratio(),
            state: fighter.state(),
        };

        MatchView {
            fighters: [
                fighter_view(&self.fighters[0]),
                fighter_view(&self.fighters[1]),
            ],
            hit_stop_remaining: self.effects.hit_stop_remaining(),
            shake_remaining: self.effects.shake_remaining(),
            shake_intensity: self.effects.shake_intensity(),
            shake_amplitude: self.effects.shake_amplitude(),
        }
    }
}
