// Animation bridges: timed cross-fades between two clips that end by committing a state

use super::animation::{Animator, Clip};
use super::state::AnimState;

/// Blend progress above which a bridge resolves
pub const BRIDGE_COMPLETE: f32 = 0.9;

/// One row of the bridge table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bridge {
    /// Clip being faded out
    pub from: Clip,
    /// Clip being faded in
    pub to: Clip,
    /// State committed once the fade completes
    pub next: AnimState,
    /// Seconds the first clip must have played before fading starts
    pub delay: f32,
}

impl Bridge {
    pub const fn new(from: Clip, to: Clip, next: AnimState, delay: f32) -> Self {
        Self {
            from,
            to,
            next,
            delay,
        }
    }

    /// Start the fade: both clips queued, target at its first frame, no weight yet
    pub fn begin<A: Animator + ?Sized>(&self, animator: &mut A, blend: &mut f32) {
        *blend = 0.0;
        let time_from = animator.current_time();
        animator.play_blended(self.from, self.to, time_from, 0.0, 0.0);
    }

    /// Run one tick of the fade
    ///
    /// Nothing happens until the playing clip is past `delay`. After that the
    /// blend grows by `rate` each call; the first time it exceeds
    /// `BRIDGE_COMPLETE` the target clip is left playing alone, `blend` goes
    /// back to 0 and the successor state is returned.
    pub fn step<A: Animator + ?Sized>(
        &self,
        animator: &mut A,
        blend: &mut f32,
        rate: f32,
    ) -> Option<AnimState> {
        if animator.current_time() <= self.delay {
            return None;
        }

        *blend = (*blend + rate) % 1.0;

        let time_from = animator.current_time();
        let time_to = animator.current_time_of_second_clip();
        animator.play_blended(self.from, self.to, time_from, time_to, *blend);

        if *blend > BRIDGE_COMPLETE {
            *blend = 0.0;
            animator.play_single(self.to, time_to);
            return Some(self.next);
        }

        None
    }
}
