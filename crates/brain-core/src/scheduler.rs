//! Cancellation scope for timed work.
//!
//! A `Scheduler` owns every timer and tween created for one sequence run.
//! Nothing runs by itself: the render loop calls [`Scheduler::pop_due`] and
//! [`Scheduler::step_tweens`] with the current clock, so ordering is fully
//! determined by due times. [`Scheduler::cancel_all`] drops everything at once.

use crate::tween::Tween;
use smallvec::SmallVec;

pub type TimerId = u32;
pub type TweenId = u32;

/// Scene property a tween writes to. At most one tween per channel is alive;
/// starting a new one replaces the old (last write wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    CameraDolly,
    ParticleProgress,
    Rising,
    XRayPhase,
}

#[derive(Clone, Copy, Debug)]
struct Timer<C> {
    id: TimerId,
    due: f64,
    cue: C,
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    id: TweenId,
    channel: Channel,
    tween: Tween,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completed {
    pub channel: Channel,
    pub tween: Tween,
}

#[derive(Debug, Default)]
pub struct TweenStep {
    pub samples: SmallVec<[(Channel, f32); 4]>,
    pub completed: SmallVec<[Completed; 4]>,
}

#[derive(Debug)]
pub struct Scheduler<C> {
    next_id: u32,
    timers: SmallVec<[Timer<C>; 8]>,
    tweens: SmallVec<[Animation; 4]>,
}

impl<C: Copy> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            timers: SmallVec::new(),
            tweens: SmallVec::new(),
        }
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    /// Schedule `cue` to fire at absolute time `due`.
    pub fn schedule_at(&mut self, due: f64, cue: C) -> TimerId {
        let id = self.alloc_id();
        self.timers.push(Timer { id, due, cue });
        id
    }

    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        before != self.timers.len()
    }

    /// Start a tween on `channel`, replacing any in-flight tween there.
    pub fn animate(&mut self, channel: Channel, tween: Tween) -> TweenId {
        self.tweens.retain(|a| a.channel != channel);
        let id = self.alloc_id();
        self.tweens.push(Animation { id, channel, tween });
        id
    }

    /// Drop the tween on `channel` without reporting it as completed.
    pub fn cancel_channel(&mut self, channel: Channel) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|a| a.channel != channel);
        before != self.tweens.len()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<f64> {
        self.timers.iter().map(|t| t.due).min_by(f64::total_cmp)
    }

    /// End time of the tween that finishes first.
    pub fn next_tween_end(&self) -> Option<f64> {
        self.tweens
            .iter()
            .map(|a| a.tween.end_time())
            .min_by(f64::total_cmp)
    }

    /// Remove and return the earliest timer due at or before `now`, with its
    /// due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, C)> {
        let mut best: Option<usize> = None;
        for (i, t) in self.timers.iter().enumerate() {
            if t.due > now {
                continue;
            }
            match best {
                Some(b) => {
                    let cur = &self.timers[b];
                    if t.due < cur.due || (t.due == cur.due && t.id < cur.id) {
                        best = Some(i);
                    }
                }
                None => best = Some(i),
            }
        }
        best.map(|i| {
            let t = self.timers.remove(i);
            (t.due, t.cue)
        })
    }

    /// Sample every tween at `now`; finished tweens are reported once with
    /// their final value and dropped.
    pub fn step_tweens(&mut self, now: f64) -> TweenStep {
        let mut step = TweenStep::default();
        for a in &self.tweens {
            step.samples.push((a.channel, a.tween.sample(now)));
            if a.tween.is_done(now) {
                step.completed.push(Completed {
                    channel: a.channel,
                    tween: a.tween,
                });
            }
        }
        self.tweens.retain(|a| !a.tween.is_done(now));
        step.completed
            .sort_by(|a, b| a.tween.end_time().total_cmp(&b.tween.end_time()));
        step
    }

    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() || !self.tweens.is_empty() {
            log::debug!(
                "[scheduler] cancelling {} timers, {} tweens",
                self.timers.len(),
                self.tweens.len()
            );
        }
        self.timers.clear();
        self.tweens.clear();
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn pending_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Ease;

    #[test]
    fn timers_pop_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule_at(3.0, 'c');
        s.schedule_at(1.0, 'a');
        s.schedule_at(1.0, 'b');
        assert_eq!(s.pop_due(0.5), None);
        assert_eq!(s.pop_due(5.0), Some((1.0, 'a')));
        assert_eq!(s.pop_due(5.0), Some((1.0, 'b')));
        assert_eq!(s.pop_due(5.0), Some((3.0, 'c')));
        assert_eq!(s.pop_due(5.0), None);
    }

    #[test]
    fn new_tween_replaces_same_channel() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.animate(Channel::Rising, Tween::new(0.0, 0.6, 2.0, Ease::Linear, 0.0));
        s.animate(Channel::Rising, Tween::new(0.6, 0.0, 2.0, Ease::Linear, 0.0));
        assert_eq!(s.pending_tweens(), 1);
        let step = s.step_tweens(1.0);
        assert_eq!(step.samples.as_slice(), &[(Channel::Rising, 0.3)]);
    }

    #[test]
    fn cancel_timer_only_removes_target() {
        let mut s = Scheduler::new();
        let a = s.schedule_at(1.0, 1u8);
        s.schedule_at(2.0, 2u8);
        assert!(s.cancel_timer(a));
        assert!(!s.cancel_timer(a));
        assert_eq!(s.pending_timers(), 1);
    }

    #[test]
    fn cancel_channel_leaves_other_channels() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.animate(Channel::Rising, Tween::new(0.0, 0.6, 2.0, Ease::Linear, 0.0));
        s.animate(Channel::XRayPhase, Tween::new(3.0, 5.0, 3.0, Ease::QuadIn, 0.0));
        assert!(s.cancel_channel(Channel::Rising));
        assert_eq!(s.pending_tweens(), 1);
        assert!(!s.cancel_channel(Channel::Rising));
        assert!(s.step_tweens(5.0).completed.iter().all(|c| c.channel != Channel::Rising));
    }
}
