//! Intro sequencer.
//!
//! A one-shot state machine:
//!
//! ```text
//! Idle -> Zooming -> Labeling -> TransitioningNav -> Settled
//!   \________\__________\_____________\______> Interrupted
//! ```
//!
//! Every timer and tween the intro creates lives in one [`Scheduler`] owned
//! by the director. Skipping cancels that scope in a single call and then
//! writes the end state directly, so the terminal state does not depend on
//! which phase was interrupted.
//!
//! The director never touches the DOM. Anything the page chrome must do is
//! queued as a [`StageCommand`] for the front end to drain.

use crate::constants::*;
use crate::ease::Ease;
use crate::memory::NAV_ITEMS;
use crate::scene::BrainScene;
use crate::scheduler::{Channel, Completed, Scheduler, TimerId};
use crate::tween::Tween;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Idle,
    Zooming,
    Labeling,
    TransitioningNav,
    Settled,
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Begin,
    LabelsDue,
    NavDue,
    SettleDue,
    Skip,
}

impl IntroPhase {
    /// Transition table. `None` means the trigger is not valid here.
    pub fn next(self, trigger: Trigger) -> Option<IntroPhase> {
        use IntroPhase::*;
        match (self, trigger) {
            (Idle, Trigger::Begin) => Some(Zooming),
            (Zooming, Trigger::LabelsDue) => Some(Labeling),
            (Labeling, Trigger::NavDue) => Some(TransitioningNav),
            (TransitioningNav, Trigger::SettleDue) => Some(Settled),
            (Idle | Zooming | Labeling | TransitioningNav, Trigger::Skip) => Some(Interrupted),
            _ => None,
        }
    }

    /// True until the intro has reached either terminal state.
    pub fn is_playing(self) -> bool {
        !self.is_terminal()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, IntroPhase::Settled | IntroPhase::Interrupted)
    }
}

/// How the page asked the intro to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    Full,
    Skip,
}

impl StartMode {
    /// Parse a `location.search` string; `skip=true` anywhere selects Skip.
    pub fn from_query(query: &str) -> Self {
        let q = query.strip_prefix('?').unwrap_or(query);
        let skip = q
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(k, v)| k == "skip" && v == "true");
        if skip {
            StartMode::Skip
        } else {
            StartMode::Full
        }
    }
}

/// Timed steps of the intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroCue {
    Begin,
    Sparkles,
    ShowLabels,
    NavTransition,
    LabelsToNav,
    RevealNav,
    FadeLabels,
    ShowControls,
    RemoveLabels,
    FadeRising,
    Settle,
}

/// Work for the page chrome, in the order it became due.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StageCommand {
    SparklesOn,
    /// Fade labels in one after another.
    ShowLabels { stagger_ms: u32 },
    /// Slide every label onto its measured nav-bar slot.
    LabelsToNav { slide_ms: u32 },
    /// Reveal the nav bar; a zero sweep shows it at full visibility at once.
    RevealNav { sweep_ms: u32 },
    FadeLabels,
    /// Control panel and bottom navigation.
    ShowChrome,
    RemoveLabels,
    /// Default camera distance captured for the zoom slider.
    DefaultZoom(f32),
}

#[derive(Debug)]
pub struct Director {
    phase: IntroPhase,
    scope: Scheduler<IntroCue>,
    commands: Vec<StageCommand>,
    rising_fade: Option<TimerId>,
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Director {
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::Idle,
            scope: Scheduler::new(),
            commands: Vec::new(),
            rising_fade: None,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn pending_timers(&self) -> usize {
        self.scope.pending_timers()
    }

    pub fn pending_tweens(&self) -> usize {
        self.scope.pending_tweens()
    }

    /// Whether `advance` still has anything to do.
    pub fn is_active(&self) -> bool {
        !self.scope.is_idle()
    }

    /// Arm the intro: it begins after the initial delay.
    pub fn start(&mut self, now: f64) {
        if self.phase != IntroPhase::Idle || self.scope.pending_timers() > 0 {
            return;
        }
        log::info!("[intro] starting in {:.1}s", INTRO_INITIAL_DELAY);
        self.scope.schedule_at(now + INTRO_INITIAL_DELAY, IntroCue::Begin);
    }

    fn transition(&mut self, trigger: Trigger) {
        match self.phase.next(trigger) {
            Some(next) => {
                log::info!("[intro] {:?} -> {:?}", self.phase, next);
                self.phase = next;
            }
            None => log::warn!("[intro] ignoring {:?} in {:?}", trigger, self.phase),
        }
    }

    /// Run everything due up to `now` in time order and return the chrome
    /// commands produced along the way.
    pub fn advance(&mut self, scene: &mut BrainScene, now: f64) -> Vec<StageCommand> {
        self.yield_rising(scene);
        loop {
            let timer = self.scope.next_due().filter(|&t| t <= now);
            let tween = self.scope.next_tween_end().filter(|&t| t <= now);
            match (timer, tween) {
                (None, None) => break,
                (Some(t), Some(e)) if e <= t => self.finish_tweens(scene, e),
                (None, Some(e)) => self.finish_tweens(scene, e),
                (Some(t), _) => {
                    if let Some((due, cue)) = self.scope.pop_due(t) {
                        self.fire(scene, cue, due);
                    }
                }
            }
        }
        self.finish_tweens(scene, now);
        std::mem::take(&mut self.commands)
    }

    /// Once the control panel has driven the rising level, the intro's own
    /// rising tween and pending fade are dropped.
    fn yield_rising(&mut self, scene: &BrainScene) {
        if !scene.rising_claimed() {
            return;
        }
        let fade = self
            .rising_fade
            .take()
            .is_some_and(|id| self.scope.cancel_timer(id));
        let tween = self.scope.cancel_channel(Channel::Rising);
        if fade || tween {
            log::info!("[intro] rising particles handed to the control panel");
        }
    }

    fn finish_tweens(&mut self, scene: &mut BrainScene, at: f64) {
        let step = self.scope.step_tweens(at);
        for (channel, value) in step.samples {
            scene.apply(channel, value);
        }
        for done in step.completed {
            self.on_complete(scene, done);
        }
    }

    fn fire(&mut self, scene: &mut BrainScene, cue: IntroCue, at: f64) {
        log::debug!("[intro] cue {:?} at {:.2}", cue, at);
        match cue {
            IntroCue::Begin => {
                self.transition(Trigger::Begin);
                self.scope.animate(
                    Channel::CameraDolly,
                    Tween::new(DOLLY_FROM, DOLLY_TO, DOLLY_DURATION, Ease::QuadInOut, at),
                );
                let transform = scene.particles.transform(true, at);
                self.scope.animate(Channel::ParticleProgress, transform);
                self.scope.schedule_at(at + SPARKLES_DELAY, IntroCue::Sparkles);
                self.scope.schedule_at(at + LABELS_DELAY, IntroCue::ShowLabels);
            }
            IntroCue::Sparkles => {
                scene.rising.sparkles = true;
                self.commands.push(StageCommand::SparklesOn);
            }
            IntroCue::ShowLabels => {
                self.transition(Trigger::LabelsDue);
                scene.labels.place(&scene.regions, &NAV_ITEMS);
                self.commands.push(StageCommand::ShowLabels {
                    stagger_ms: LABEL_STAGGER_MS,
                });
            }
            IntroCue::NavTransition => {
                self.transition(Trigger::NavDue);
                self.scope.animate(
                    Channel::Rising,
                    Tween::new(0.0, RISING_PEAK, RISING_UP_DURATION, Ease::QuintInOut, at),
                );
                self.scope
                    .schedule_at(at + LABELS_TO_NAV_DELAY, IntroCue::LabelsToNav);
                self.scope.schedule_at(at + SETTLE_DELAY, IntroCue::Settle);
            }
            IntroCue::LabelsToNav => {
                scene.labels.begin_transition();
                self.commands.push(StageCommand::LabelsToNav {
                    slide_ms: LABEL_SLIDE_MS,
                });
                self.scope
                    .schedule_at(at + NAV_REVEAL_DELAY, IntroCue::RevealNav);
                self.scope
                    .schedule_at(at + LABELS_REMOVE_DELAY, IntroCue::RemoveLabels);
            }
            IntroCue::RevealNav => {
                self.commands.push(StageCommand::RevealNav {
                    sweep_ms: NAV_SWEEP_MS,
                });
                self.scope
                    .schedule_at(at + LABELS_FADE_DELAY, IntroCue::FadeLabels);
                self.scope.schedule_at(at + CHROME_DELAY, IntroCue::ShowControls);
            }
            IntroCue::FadeLabels => self.commands.push(StageCommand::FadeLabels),
            IntroCue::ShowControls => self.commands.push(StageCommand::ShowChrome),
            IntroCue::RemoveLabels => {
                scene.labels.clear();
                self.commands.push(StageCommand::RemoveLabels);
            }
            IntroCue::FadeRising => {
                self.rising_fade = None;
                self.scope.animate(
                    Channel::Rising,
                    Tween::new(
                        scene.rising.level,
                        0.0,
                        RISING_FADE_DURATION,
                        Ease::CubicIn,
                        at,
                    ),
                );
            }
            IntroCue::Settle => {
                self.transition(Trigger::SettleDue);
                scene.camera.release();
                let d = scene.capture_default();
                self.commands.push(StageCommand::DefaultZoom(d));
            }
        }
    }

    fn on_complete(&mut self, scene: &mut BrainScene, done: Completed) {
        let end = done.tween.end_time();
        match done.channel {
            Channel::CameraDolly => {
                scene.xray.dim();
                self.scope
                    .schedule_at(end + NAV_TRANSITION_DELAY, IntroCue::NavTransition);
            }
            Channel::ParticleProgress => {
                log::info!("[particles] transform complete");
                scene.camera.max_distance = POST_INTRO_MAX_DISTANCE.max(scene.camera.min_distance);
            }
            Channel::Rising if done.tween.rising() => {
                self.rising_fade =
                    Some(self.scope.schedule_at(end + RISING_LINGER, IntroCue::FadeRising));
            }
            Channel::Rising | Channel::XRayPhase => {}
        }
    }

    /// Jump straight to the end state. Valid while the intro is still
    /// playing; returns the chrome commands for the final layout, or nothing
    /// if the intro has already finished.
    pub fn skip(&mut self, scene: &mut BrainScene) -> Vec<StageCommand> {
        if !self.phase.is_playing() {
            log::debug!("[intro] skip ignored in {:?}", self.phase);
            return Vec::new();
        }
        log::info!("[intro] skipping from {:?}", self.phase);
        self.scope.cancel_all();
        self.rising_fade = None;
        self.commands.clear();
        self.transition(Trigger::Skip);

        scene.camera.place_at_intro_end();
        scene.camera.release();
        scene.particles.settle();
        scene.xray.dim();
        scene.rising.sparkles = true;
        scene.rising.set_level(0.0);
        scene.labels.clear();
        let d = scene.capture_default();

        vec![
            StageCommand::RemoveLabels,
            StageCommand::SparklesOn,
            StageCommand::RevealNav { sweep_ms: 0 },
            StageCommand::ShowChrome,
            StageCommand::DefaultZoom(d),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_is_one_way() {
        use IntroPhase::*;
        assert_eq!(Idle.next(Trigger::Begin), Some(Zooming));
        assert_eq!(Zooming.next(Trigger::NavDue), None);
        assert_eq!(Settled.next(Trigger::Skip), None);
        assert_eq!(Interrupted.next(Trigger::Begin), None);
        for p in [Idle, Zooming, Labeling, TransitioningNav] {
            assert_eq!(p.next(Trigger::Skip), Some(Interrupted));
        }
    }

    #[test]
    fn start_mode_reads_skip_flag() {
        assert_eq!(StartMode::from_query("?skip=true"), StartMode::Skip);
        assert_eq!(StartMode::from_query("?a=1&skip=true"), StartMode::Skip);
        assert_eq!(StartMode::from_query("?skip=false"), StartMode::Full);
        assert_eq!(StartMode::from_query(""), StartMode::Full);
    }
}
