// Fighter animation playback
//
// Skeletal sampling and bone blending live in the renderer. The gameplay core
// only needs to start clips, cross-fade two of them, advance time and read
// back how far each clip has played, which is what `Animator` captures.

use std::collections::HashMap;
use std::fmt;

/// Every animation a fighter rig ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Idle,
    Walk,
    Punch,
    Crouch,
    CrouchBlock,
    StandBlock,
    StandHit,
    Jump,
    JumpKick,
}

impl Clip {
    /// Asset name of the clip (e.g. for looking up the rig animation)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Punch => "punch",
            Self::Crouch => "crouch",
            Self::CrouchBlock => "crouch_block",
            Self::StandBlock => "stand_block",
            Self::StandHit => "stand_hit",
            Self::Jump => "jump",
            Self::JumpKick => "jump_kick",
        }
    }
}

/// Animation playback capability consumed by the fighter state machine
pub trait Animator {
    /// Move playback forward by `dt` seconds of gameplay time
    fn advance(&mut self, dt: f32);

    /// Play `clip` alone, starting `start_time` seconds in
    fn play_single(&mut self, clip: Clip, start_time: f32);

    /// Cross-fade from `from` to `to`; `ratio` 0.0 is all `from`, 1.0 all `to`
    fn play_blended(&mut self, from: Clip, to: Clip, time_from: f32, time_to: f32, ratio: f32);

    /// Seconds played on the current (first) clip
    fn current_time(&self) -> f32;

    /// Seconds played on the second clip of a blend, 0.0 when not blending
    fn current_time_of_second_clip(&self) -> f32;
}

/// Timing data for one clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub clip: Clip,
    /// Length of one cycle in seconds
    pub duration: f32,
    /// Whether the clip wraps around at the end
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(clip: Clip, duration: f32, looping: bool) -> Self {
        Self {
            clip,
            duration,
            looping,
        }
    }

    /// Create a looping clip
    pub fn looping(clip: Clip, duration: f32) -> Self {
        Self::new(clip, duration, true)
    }

    /// Create a one-shot clip (holds its last pose)
    pub fn one_shot(clip: Clip, duration: f32) -> Self {
        Self::new(clip, duration, false)
    }

    /// Map elapsed play time to the position inside the clip
    pub fn phase_at(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            0.0
        } else if self.looping {
            time.rem_euclid(self.duration)
        } else {
            time.clamp(0.0, self.duration)
        }
    }
}

/// One clip slot with its elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    clip: Clip,
    time: f32,
}

/// What the renderer should sample this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    /// First clip and the position inside it
    pub primary: (Clip, f32),
    /// Second clip of a blend and the position inside it
    pub secondary: Option<(Clip, f32)>,
    /// Weight of the second clip
    pub ratio: f32,
}

impl fmt::Display for PoseSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (clip, phase) = self.primary;
        write!(f, "{}@{:.2}", clip.name(), phase)?;
        if let Some((clip, phase)) = self.secondary {
            write!(f, " -> {}@{:.2} ({:.2})", clip.name(), phase, self.ratio)?;
        }
        Ok(())
    }
}

/// Timing-only `Animator`: tracks which clips play, for how long and at what blend
///
/// Elapsed time keeps counting past the end of a clip; `sample` wraps or holds it
/// per clip so bridge delays longer than a clip still expire.
#[derive(Debug)]
pub struct ClipPlayer {
    /// All available clips
    clips: HashMap<Clip, AnimationClip>,
    /// Currently playing clip
    primary: Track,
    /// Clip being blended toward, if any
    secondary: Option<Track>,
    /// Weight of the secondary clip
    ratio: f32,
}

impl ClipPlayer {
    /// Create a player with no clip data, starting on `initial`
    pub fn new(initial: Clip) -> Self {
        Self {
            clips: HashMap::new(),
            primary: Track {
                clip: initial,
                time: 0.0,
            },
            secondary: None,
            ratio: 0.0,
        }
    }

    /// Create a player with the standard fighter rig clips, idling
    pub fn with_fighter_clips() -> Self {
        let mut player = Self::new(Clip::Idle);

        player.add_clip(AnimationClip::looping(Clip::Idle, 3.3));
        player.add_clip(AnimationClip::looping(Clip::Walk, 2.06));
        player.add_clip(AnimationClip::one_shot(Clip::Punch, 1.03));
        player.add_clip(AnimationClip::looping(Clip::Crouch, 1.2));
        player.add_clip(AnimationClip::one_shot(Clip::CrouchBlock, 0.9));
        player.add_clip(AnimationClip::one_shot(Clip::StandBlock, 0.9));
        player.add_clip(AnimationClip::one_shot(Clip::StandHit, 1.1));
        player.add_clip(AnimationClip::one_shot(Clip::Jump, 1.2));
        player.add_clip(AnimationClip::one_shot(Clip::JumpKick, 1.6));

        player
    }

    /// Add (or replace) clip timing data
    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.clip, clip);
    }

    /// Clip currently in the first slot
    pub fn primary_clip(&self) -> Clip {
        self.primary.clip
    }

    /// Clip being blended toward, if any
    pub fn secondary_clip(&self) -> Option<Clip> {
        self.secondary.map(|track| track.clip)
    }

    /// Weight of the secondary clip
    pub fn blend_ratio(&self) -> f32 {
        self.ratio
    }

    fn phase(&self, track: Track) -> f32 {
        self.clips
            .get(&track.clip)
            .map_or(track.time, |clip| clip.phase_at(track.time))
    }

    /// Clip positions for the renderer
    pub fn sample(&self) -> PoseSample {
        PoseSample {
            primary: (self.primary.clip, self.phase(self.primary)),
            secondary: self
                .secondary
                .map(|track| (track.clip, self.phase(track))),
            ratio: self.ratio,
        }
    }
}

impl Default for ClipPlayer {
    fn default() -> Self {
        Self::with_fighter_clips()
    }
}

impl Animator for ClipPlayer {
    fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        self.primary.time += dt;
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.time += dt;
        }
    }

    fn play_single(&mut self, clip: Clip, start_time: f32) {
        self.primary = Track {
            clip,
            time: start_time,
        };
        self.secondary = None;
        self.ratio = 0.0;
    }

    fn play_blended(&mut self, from: Clip, to: Clip, time_from: f32, time_to: f32, ratio: f32) {
        self.primary = Track {
            clip: from,
            time: time_from,
        };
        self.secondary = Some(Track {
            clip: to,
            time: time_to,
        });
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    fn current_time(&self) -> f32 {
        self.primary.time
    }

    fn current_time_of_second_clip(&self) -> f32 {
        self.secondary.map_or(0.0, |track| track.time)
    }
}
